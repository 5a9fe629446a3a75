use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

/// Credentials an operation chain is constructed with.
///
/// Immutable once built. `extra` carries arbitrary auxiliary sign-up
/// fields (e.g. a first name); lookups for keys that were never set
/// answer with the empty string rather than erroring.
#[derive(Debug)]
pub struct Credentials {
    username: String,
    password: SecretString,
    extra: HashMap<String, String>,
}

impl Credentials {
    /// Creates credentials with no extra fields.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            extra: HashMap::new(),
        }
    }

    /// Adds one auxiliary field. Keys are unique; setting a key twice
    /// keeps the later value.
    #[must_use]
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The username as given.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password as given.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// The auxiliary field for `key`, `""` when absent.
    #[must_use]
    pub fn extra(&self, key: &str) -> &str {
        self.extra.get(key).map_or("", String::as_str)
    }

    /// Request body for credential-bearing flows: username and password
    /// with the extra fields merged in.
    pub(crate) fn request_body(&self) -> HashMap<String, String> {
        let mut body = HashMap::with_capacity(2 + self.extra.len());
        body.insert("username".to_owned(), self.username.clone());
        body.insert(
            "password".to_owned(),
            self.password.expose_secret().to_owned(),
        );
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        body
    }
}
