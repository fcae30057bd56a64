use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::claims::TokenClaims;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Role vocabulary the client understands.
///
/// The backend sends roles as free strings. The three known roles get their
/// own variants; anything else lands in [`Role::Other`] so route checks stay
/// total instead of panicking or silently coercing. Matching is
/// case-sensitive: `"admin"` is *not* `Role::Admin` and will only satisfy a
/// requirement that explicitly lists `"admin"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    User,
    /// A role string outside the known set. Stored verbatim.
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Role {
        match raw {
            "Admin" => Role::Admin,
            "Manager" => Role::Manager,
            "User" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
            Role::Other(s) => s,
        }
    }

    /// Whether this is one of the three roles the backend defines.
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Roles travel as plain strings on the wire.
impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(de::Error::custom("role must not be empty"));
        }
        Ok(Role::parse(&raw))
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The application-facing user derived from a valid token.
///
/// In-memory only, never persisted. Lives exactly as long as the credential
/// it was derived from is held and unexpired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: String,
    pub display_name: String,
    pub role: Role,
    pub email: String,
}

impl Identity {
    /// Derive an identity from decoded claims, applying the fallback chain.
    pub fn from_claims(claims: &TokenClaims) -> Identity {
        Identity {
            subject_id: claims.sub.clone(),
            display_name: resolve_display_name(claims),
            role: resolve_role(claims),
            email: claims.email.clone(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> ({})",
            self.display_name, self.email, self.role
        )
    }
}

/// Display-name precedence: the `name` claim when present and non-empty,
/// otherwise the email address.
fn resolve_display_name(claims: &TokenClaims) -> String {
    claims
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&claims.email)
        .to_string()
}

/// Role precedence: the `role` claim when present and non-empty, otherwise
/// `User`.
fn resolve_role(claims: &TokenClaims) -> Role {
    claims
        .role
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(Role::parse)
        .unwrap_or(Role::User)
}
