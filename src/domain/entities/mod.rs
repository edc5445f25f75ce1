//! Core dashboard entities.

pub mod click;
pub mod link;
pub mod page;

pub use click::ClickEvent;
pub use link::{LinkSummary, LinkUpdate};
pub use page::PageMeta;
