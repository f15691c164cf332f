use std::collections::BTreeMap;

use quickfund_core::contact::{ContactField, ContactForm};

#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: BTreeMap<ContactField, String>,
    /// True while keys are routed to the form.
    pub editing: bool,
    /// Index into [`ContactField::all`].
    pub focus: usize,
}

impl ContactState {
    pub fn begin_editing(&mut self) {
        self.editing = true;
        self.focus = 0;
    }

    pub fn focused(&self) -> ContactField {
        let all = ContactField::all();
        all[self.focus.min(all.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ContactField::all().len();
    }

    pub fn focus_prev(&mut self) {
        let n = ContactField::all().len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn focus_field(&mut self, field: ContactField) {
        if let Some(index) = ContactField::all().iter().position(|f| *f == field) {
            self.focus = index;
        }
    }

    /// Validates the form. On success the form is cleared and editing ends.
    pub fn submit(&mut self) -> bool {
        self.errors = self.form.validate();
        if let Some(first) = self.errors.keys().next().copied() {
            self.focus_field(first);
            return false;
        }
        self.form.clear();
        self.editing = false;
        self.focus = 0;
        true
    }
}
