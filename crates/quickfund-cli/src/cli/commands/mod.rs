//! CLI command handlers.

pub mod config;
pub mod i18n;
pub mod landing;
pub mod validate;
