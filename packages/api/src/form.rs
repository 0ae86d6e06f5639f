//! Form-encoded request payloads.
//!
//! The portal accepts its writes as `multipart/form-data` posts, not JSON
//! bodies. [`FormFields`] is the one-way mapping from a typed payload to the
//! named text fields the server's form parser expects; HTTP clients fold the
//! pairs into whatever multipart builder they use.
//!
//! Field order follows the portal's form definitions. The server keys by
//! name, so order is cosmetic, but keeping it stable makes captures easy to
//! compare.

/// A payload that can be flattened into named multipart text fields.
pub trait FormFields {
    /// The `(name, value)` pairs to submit, in declaration order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// A username/password pair for the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl FormFields for Credentials {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ]
    }
}
