//! Authentication form model and auth client boundary.
//!
//! ## Module Structure
//!
//! - `role.rs`: participant roles offered by the signup form
//! - `form.rs`: form mode, field names, form data and the error map
//! - `validate.rs`: submit-time validation rules
//! - `session.rs`: user/session records returned by the backend
//! - `client.rs`: login/signup/logout backends (HTTP and in-memory demo)

mod client;
mod form;
mod role;
mod session;
mod validate;

pub use client::{AuthClient, DemoAuthBackend, HttpAuthBackend};
pub use form::{AuthMode, Field, FieldErrors, FormData};
pub use role::Role;
pub use session::{LoginRequest, OrganizationDetails, Session, SignupRequest, User};
pub use validate::{
    MIN_PASSWORD_LEN, PHONE_DIGITS, is_valid_email, is_valid_phone, password_len, phone_digits,
    validate,
};
