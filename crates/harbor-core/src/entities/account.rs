use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Login identity shared by clients and team members.
///
/// Passwords are plaintext in the mock data set. They are compared on login
/// and never copied into [`super::ActorProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Case-insensitive email match against a trimmed identifier.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email.eq_ignore_ascii_case(identifier.trim())
    }
}
