//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod contact;
pub mod landing;
pub mod navbar;
pub mod testimonials;
pub mod toast;
