pub mod api_error;
pub mod booking;
pub mod claims;
pub mod client_config;
pub mod identity;
pub mod login;
pub mod room;
pub mod user;

pub use self::api_error::ApiErrorBody;
pub use self::booking::{Booking, BookingStatus, NewBooking};
pub use self::claims::TokenClaims;
pub use self::client_config::{ApiConfig, AppConfig, ConfigError, StorageConfig};
pub use self::identity::{Identity, Role};
pub use self::login::{LoginRequest, LoginResponse, LoginUser};
pub use self::room::{NewRoom, Room};
pub use self::user::{NewUser, UserAccount};
