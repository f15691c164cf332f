//! Landing page sections: navigation between them and their bodies.

mod render;
mod state;
mod update;

pub use render::{max_scroll, render_section};
pub use state::{LandingState, Section};
pub use update::handle_main_key;
