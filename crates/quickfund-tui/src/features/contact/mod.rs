//! "Send us a Message" form on the Contact section.

mod render;
mod state;
mod update;

pub use render::render_contact_form;
pub use state::ContactState;
pub use update::{handle_edit_key, handle_paste};
