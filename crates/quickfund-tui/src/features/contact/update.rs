use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quickfund_core::contact::ContactField;
use quickfund_core::content::CONTACT_SENT_MESSAGE;

use super::ContactState;
use crate::features::toast::Toast;
use crate::mutations::StateMutation;

/// Handles a key while the contact form is being edited.
pub fn handle_edit_key(contact: &mut ContactState, key: KeyEvent) -> Vec<StateMutation> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let field = contact.focused();

    match key.code {
        KeyCode::Esc => {
            contact.editing = false;
        }
        KeyCode::Char('s') if ctrl => return submit(contact),
        KeyCode::Tab | KeyCode::Down => contact.focus_next(),
        KeyCode::BackTab | KeyCode::Up => contact.focus_prev(),
        KeyCode::Enter => {
            if field == ContactField::Message {
                return submit(contact);
            }
            contact.focus_next();
        }
        KeyCode::Left | KeyCode::Right if field == ContactField::Subject => {
            contact.form.cycle_subject(key.code == KeyCode::Right);
            contact.errors.remove(&field);
        }
        KeyCode::Backspace => {
            if let Some(text) = contact.form.text_mut(field) {
                text.pop();
                contact.errors.remove(&field);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(text) = contact.form.text_mut(field) {
                text.push(c);
                contact.errors.remove(&field);
            }
        }
        _ => {}
    }
    vec![]
}

/// Inserts pasted text into the focused field. Newlines are kept only in
/// the message.
pub fn handle_paste(contact: &mut ContactState, pasted: &str) {
    let field = contact.focused();
    let Some(text) = contact.form.text_mut(field) else {
        return;
    };
    if field == ContactField::Message {
        text.push_str(pasted);
    } else {
        text.extend(pasted.chars().filter(|c| !c.is_control()));
    }
    contact.errors.remove(&field);
}

fn submit(contact: &mut ContactState) -> Vec<StateMutation> {
    if contact.submit() {
        tracing::info!("contact message accepted");
        vec![StateMutation::Toast(Toast::success(CONTACT_SENT_MESSAGE))]
    } else {
        vec![]
    }
}
