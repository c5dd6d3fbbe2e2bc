pub mod health;
pub mod notify;

pub use health::{health_check, readiness_check};
pub use notify::notify;
