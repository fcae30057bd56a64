pub mod codec;
pub mod guard;
pub mod session;
pub mod store;

pub use self::guard::{AccessDecision, RouteRequirement, authorize};
pub use self::session::{Session, SessionStore, SessionTransition};
pub use self::store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
