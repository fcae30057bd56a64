use shared::types::Role;

use crate::auth::guard::{self, AccessDecision, RouteRequirement};
use crate::auth::session::Session;

/// A protected view the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub title: &'static str,
    /// `None` admits any authenticated identity.
    pub requirement: Option<RouteRequirement>,
}

/// The protected route table. `/login` is the only public path and is not
/// listed here; it sits outside the gate entirely.
pub fn route_table() -> Vec<Route> {
    vec![
        Route {
            path: "/",
            title: "Dashboard",
            requirement: None,
        },
        Route {
            path: "/rooms",
            title: "Rooms",
            requirement: None,
        },
        Route {
            path: "/my-bookings",
            title: "My Bookings",
            requirement: Some(RouteRequirement::any_of([
                Role::User,
                Role::Manager,
                Role::Admin,
            ])),
        },
        Route {
            path: "/admin/users",
            title: "User Management",
            requirement: Some(RouteRequirement::any_of([Role::Admin])),
        },
        Route {
            path: "/admin/rooms",
            title: "Room Management",
            requirement: Some(RouteRequirement::any_of([Role::Admin])),
        },
        Route {
            path: "/admin/bookings",
            title: "All Bookings",
            requirement: Some(RouteRequirement::any_of([Role::Admin, Role::Manager])),
        },
    ]
}

pub fn find_route(path: &str) -> Option<Route> {
    route_table().into_iter().find(|route| route.path == path)
}

/// Run a navigation through the gate.
///
/// Unknown paths behave like wrong-role navigations for authenticated users
/// (back to the landing page) and like any protected path for anonymous ones
/// (to login). The gate contract already makes the two cases
/// indistinguishable to callers.
pub fn navigate(session: &Session, path: &str) -> AccessDecision {
    match find_route(path) {
        Some(route) => guard::authorize(session, route.requirement.as_ref(), path),
        None if session.is_authenticated() => AccessDecision::RedirectTo {
            path: guard::HOME_PATH,
            from: None,
        },
        None => AccessDecision::RedirectTo {
            path: guard::LOGIN_PATH,
            from: Some(path.to_string()),
        },
    }
}
