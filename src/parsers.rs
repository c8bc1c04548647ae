pub mod emoji;
pub mod markdown;
pub mod mrkdwn;

pub(crate) mod emoji_data;
pub(crate) mod segments;
