//! Role lookup after sign-in.
//!
//! Authentication itself happens against the identity provider; this
//! crate only resolves the signed-in user's role from the `users`
//! collection and hands back a session token.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::store::DocumentStore;

pub const USERS_COLLECTION: &str = "users";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Member => write!(f, "member"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub role: Role,
}

/// Resolve a signed-in user's role. A uid with no user record is a
/// fetch failure, not a silent default.
pub async fn login<S: DocumentStore>(store: &S, uid: &str, email: &str) -> Result<Session> {
    let doc = store
        .get(USERS_COLLECTION, uid)
        .await?
        .ok_or_else(|| StoreError::Fetch(format!("no user record for {uid}")))?;
    let role = doc
        .str_field("role")
        .and_then(|r| r.parse().ok())
        .unwrap_or_default();
    Ok(Session {
        uid: uid.to_string(),
        email: email.to_string(),
        role,
    })
}
