//! Slack Block Kit construction.
//!
//! # Module Organization
//!
//! - `types` - The closed block/envelope model and its JSON shape
//! - `builders` - Per-view block builders and the message scaffold
//! - `chart` - Result-summary pie-chart URL

mod builders;
mod chart;
mod types;

pub use builders::{
    ai_test_blocks, failed_test_blocks, flaky_test_blocks, message_blocks,
    single_ai_test_blocks, single_failed_test_blocks, test_result_blocks,
};
pub use chart::chart_image_url;
pub use types::{Accessory, Attachment, Block, BlockKitTemplate, SlackMessage, TextObject};
