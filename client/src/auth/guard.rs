use shared::types::Role;

use super::session::Session;

/// Where an unauthenticated navigation is sent.
pub const LOGIN_PATH: &str = "/login";
/// Default landing page for authenticated users.
pub const HOME_PATH: &str = "/";

// ---------------------------------------------------------------------------
// Route requirements
// ---------------------------------------------------------------------------

/// The set of roles a route admits.
///
/// Absence of a requirement (a `None` passed to [`authorize`]) means "any
/// authenticated identity". Matching is exact: an unknown role satisfies
/// only a requirement that explicitly lists the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
    allowed: Vec<Role>,
}

impl RouteRequirement {
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    pub fn allows(&self, role: &Role) -> bool {
        self.allowed.contains(role)
    }

    pub fn roles(&self) -> &[Role] {
        &self.allowed
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Admit,
    RedirectTo {
        path: &'static str,
        /// The originally requested path, so the login flow can return the
        /// user afterward. Set only on the login redirect; a wrong-role
        /// redirect intentionally carries nothing.
        from: Option<String>,
    },
}

impl AccessDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AccessDecision::Admit)
    }
}

/// Decide whether a navigation is permitted.
///
/// Pure and deterministic in `(session, requirement)`; callers re-run it on
/// every navigation rather than caching the outcome. A wrong-role navigation
/// redirects to the landing page, deliberately indistinguishable from a page
/// that does not exist. There is no "forbidden" surface.
pub fn authorize(
    session: &Session,
    requirement: Option<&RouteRequirement>,
    requested: &str,
) -> AccessDecision {
    let Some(identity) = session.identity() else {
        return AccessDecision::RedirectTo {
            path: LOGIN_PATH,
            from: Some(requested.to_string()),
        };
    };

    match requirement {
        None => AccessDecision::Admit,
        Some(req) if req.allows(&identity.role) => AccessDecision::Admit,
        Some(_) => AccessDecision::RedirectTo {
            path: HOME_PATH,
            from: None,
        },
    }
}
