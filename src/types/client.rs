//! Client identity records
//!
//! A client is registered once per tax id and never changes afterwards.
//! Accounts hold a shared reference to their client.

use std::fmt;

/// Client identifier, assigned sequentially by the registry starting at 1
pub type ClientId = u32;

/// Registered bank client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: String,
    tax_id: String,
    address: String,
    birth_date: Option<String>,
}

impl Client {
    /// Build a client record
    ///
    /// Name, tax id and address are trimmed of surrounding whitespace. The
    /// id is a placeholder until the registry assigns one on registration.
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>, address: impl Into<String>) -> Self {
        Client {
            id: 0,
            name: name.into().trim().to_string(),
            tax_id: tax_id.into().trim().to_string(),
            address: address.into().trim().to_string(),
            birth_date: None,
        }
    }

    /// Attach a birth date (free-form, e.g. `dd-mm-yyyy`)
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        let birth_date = birth_date.into().trim().to_string();
        self.birth_date = (!birth_date.is_empty()).then_some(birth_date);
        self
    }

    pub(crate) fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Tax id: {}", self.name, self.tax_id)
    }
}
