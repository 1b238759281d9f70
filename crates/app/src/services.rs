//! Application services — driving use-cases.

pub mod notification_service;

pub use notification_service::{FanSettings, NotificationService};
