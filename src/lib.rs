pub mod config;
pub mod dom;
pub mod media;
pub mod mirror;
pub mod notify;
pub mod page;
pub mod resize;
pub mod upload;
pub mod visitor;

pub use page::{start, Page};
