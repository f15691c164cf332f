//! "Send us a Message" contact form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auth::is_valid_email;

/// Topic picked in the contact form's subject selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Support,
    Emergency,
    Donation,
    Partnership,
    Other,
}

impl Subject {
    pub fn all() -> &'static [Subject] {
        &[
            Subject::Support,
            Subject::Emergency,
            Subject::Donation,
            Subject::Partnership,
            Subject::Other,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Subject::Support => "support",
            Subject::Emergency => "emergency",
            Subject::Donation => "donation",
            Subject::Partnership => "partnership",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Support => "General Support",
            Subject::Emergency => "Emergency Help",
            Subject::Donation => "Donation Inquiry",
            Subject::Partnership => "Partnership",
            Subject::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::FirstName,
            ContactField::LastName,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::FirstName => "Enter your first name",
            ContactField::LastName => "Enter your last name",
            ContactField::Email => "Enter your email",
            ContactField::Phone => "Enter your phone number",
            ContactField::Subject => "Select a subject",
            ContactField::Message => "Tell us how we can help you...",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone | ContactField::Subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl ContactForm {
    /// Current text of a field; the subject renders as its label.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => self.subject.map_or("", Subject::label),
            ContactField::Message => &self.message,
        }
    }

    /// Mutable text for typed fields; `None` for the subject selector.
    pub fn text_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::FirstName => Some(&mut self.first_name),
            ContactField::LastName => Some(&mut self.last_name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Subject => None,
            ContactField::Message => Some(&mut self.message),
        }
    }

    /// Steps the subject selector through "none" and every subject, wrapping.
    pub fn cycle_subject(&mut self, forward: bool) {
        let all = Subject::all();
        let slots = all.len() + 1;
        let current = self
            .subject
            .and_then(|s| all.iter().position(|x| *x == s))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.subject = next.checked_sub(1).map(|i| all[i]);
    }

    /// Returns one message per failing field; empty means the form can be sent.
    pub fn validate(&self) -> BTreeMap<ContactField, String> {
        let mut errors = BTreeMap::new();
        if self.first_name.trim().is_empty() {
            errors.insert(ContactField::FirstName, "First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            errors.insert(ContactField::LastName, "Last name is required".into());
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required".into());
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, "Email is invalid".into());
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required".into());
        }
        errors
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}
