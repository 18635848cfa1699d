pub mod alert;
pub mod health;

pub use alert::{method_not_allowed, receive_alert};
pub use health::health_check;
