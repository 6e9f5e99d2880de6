pub mod aggregate;
pub mod format;
pub mod matcher;

pub use aggregate::summarize;
pub use format::{format_top, format_user_stats, pluralize, PluralForms};
pub use matcher::AnnouncementMatcher;
