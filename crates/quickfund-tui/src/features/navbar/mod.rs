//! Top bar: brand, section tabs, language, theme and account controls.

mod render;

pub use render::{NAVBAR_HEIGHT, render_navbar};
