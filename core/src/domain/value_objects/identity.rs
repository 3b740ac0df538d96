//! Resolved identity of an authenticated caller.

use serde::{Deserialize, Serialize};

/// Hash-free view of a user
///
/// Returned by registration and login, embedded in tokens, and handed to
/// handlers by the authorization gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
