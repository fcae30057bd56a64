pub mod api;
pub mod auth;
pub mod nav;
pub mod routes;

pub use self::api::{ApiClient, ApiError};
pub use self::auth::guard::{AccessDecision, RouteRequirement, authorize};
pub use self::auth::session::{Session, SessionStore, SessionTransition};
