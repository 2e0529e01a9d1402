//! Build-info line and missing-property resolution.
//!
//! Each of the three build fields resolves with override-takes-precedence
//! semantics, then degrades three ways: a hyperlinked `name #number` line
//! when both identify the build, a loose one-sided rendering when only one
//! does, and a fixed placeholder when neither resolves.

use crate::config::BuildOverrides;
use crate::constants::messages;
use crate::types::Environment;

/// The display line plus the build fields that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub text: String,
    pub missing_env_properties: Vec<&'static str>,
}

/// Resolve the build display line from the report environment and the
/// process-level overrides.
pub fn resolve_build_info(
    environment: Option<&Environment>,
    overrides: &BuildOverrides,
) -> BuildInfo {
    let build_name = overrides
        .name
        .clone()
        .or_else(|| environment.and_then(|e| e.build_name.clone()));
    let build_number = overrides
        .number
        .clone()
        .or_else(|| environment.and_then(|e| e.build_number.clone()));
    let build_url = overrides
        .url
        .clone()
        .or_else(|| environment.and_then(|e| e.build_url.clone()));

    if environment.is_none()
        && build_name.is_none()
        && build_number.is_none()
        && build_url.is_none()
    {
        return BuildInfo {
            text: messages::NO_BUILD_INFO.to_string(),
            missing_env_properties: vec!["buildName", "buildNumber", "buildUrl"],
        };
    }

    let mut missing_env_properties = Vec::new();
    if build_name.is_none() {
        missing_env_properties.push("buildName");
    }
    if build_number.is_none() {
        missing_env_properties.push("buildNumber");
    }
    if build_url.is_none() {
        missing_env_properties.push("buildUrl");
    }

    match (&build_name, &build_number) {
        (Some(name), Some(number)) => {
            let build_text = match &build_url {
                Some(url) => format!("<{}|{} #{}>", url, name, number),
                None => format!("{} #{}", name, number),
            };
            BuildInfo {
                text: format!("{}{}", messages::BUILD_PREFIX, build_text),
                missing_env_properties,
            }
        }
        (Some(_), None) | (None, Some(_)) => BuildInfo {
            // The loose spacing is intentional; downstream consumers match
            // on it.
            text: format!(
                "{} {} {}",
                messages::BUILD_PREFIX,
                build_name.as_deref().unwrap_or(""),
                build_number.as_deref().unwrap_or("")
            ),
            missing_env_properties,
        },
        (None, None) => BuildInfo {
            text: messages::NO_BUILD_INFO.to_string(),
            missing_env_properties,
        },
    }
}
