// src/model/user.rs
//! Workspace users, people and bots alike.

use crate::types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Person-specific payload. The email only appears when the integration
/// has user-information capabilities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A user object. `kind` is `"person"` or `"bot"`; it stays a string so
/// new kinds pass through undamaged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<Value>,
}

impl User {
    pub fn is_bot(&self) -> bool {
        self.kind.as_deref() == Some("bot") || self.bot.is_some()
    }

    /// The person's email, when the payload carries one.
    pub fn email(&self) -> Option<&str> {
        self.person.as_ref().and_then(|person| person.email.as_deref())
    }
}
