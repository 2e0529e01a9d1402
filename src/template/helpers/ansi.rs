//! ANSI-stripping helpers for console-captured text.

use crate::text::strip_ansi;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(strip_ansi_helper: |message: str| strip_ansi(message));

handlebars_helper!(format_message: |text: Json| {
    strip_ansi(text.as_str().unwrap_or("No message available"))
});

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("stripAnsi", Box::new(strip_ansi_helper));
    registry.register_helper("formatMessage", Box::new(format_message));
}

#[cfg(test)]
mod tests {
    use crate::template::helpers::testing::render;
    use serde_json::json;

    #[test]
    fn test_strip_ansi() {
        let context = json!({ "message": "Hello \u{1b}[31mRed\u{1b}[0m" });
        assert_eq!(render("{{stripAnsi message}}", &context), "Hello Red");
    }

    #[test]
    fn test_format_message_with_text() {
        let context = json!({ "message": "\u{1b}[1mLine1\u{1b}[0m" });
        assert_eq!(render("{{formatMessage message}}", &context), "Line1");
    }

    #[test]
    fn test_format_message_fallback_when_missing() {
        assert_eq!(
            render("{{formatMessage missing}}", &json!({})),
            "No message available"
        );
    }
}
