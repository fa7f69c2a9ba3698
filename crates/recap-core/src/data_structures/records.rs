//! # Records
//!
//! A user record with optional fields and its display summary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

const NOT_AVAILABLE: &str = "N/A";

/// A user as entered in the dictionary walkthrough.
///
/// Every field may be missing; [`user_info`] fills the gaps with `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub active: bool,
}

/// Display strings derived from a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInfo {
    /// `"Maria Silva (28 years)"`
    pub display: String,
    pub contact: String,
    /// `"Active"` or `"Inactive"`
    pub status: String,
}

pub fn user_info(user: &UserRecord) -> UserInfo {
    let name = user.name.as_deref().unwrap_or(NOT_AVAILABLE);
    let age = user
        .age
        .map_or_else(|| NOT_AVAILABLE.to_string(), |a| a.to_string());

    UserInfo {
        display: format!("{} ({} years)", name, age),
        contact: user.email.as_deref().unwrap_or(NOT_AVAILABLE).to_string(),
        status: if user.active { "Active" } else { "Inactive" }.to_string(),
    }
}

/// The user of the dictionary walkthrough.
pub fn example_user() -> UserRecord {
    UserRecord {
        name: Some("Maria Silva".to_string()),
        email: Some("maria@email.com".to_string()),
        age: Some(28),
        active: true,
    }
}
