//! # fanbridge-app
//!
//! Application layer — the notification use-case and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **driven/outbound port traits** that adapters implement:
//!   - `SecretStore` — resolve named secrets
//!   - `AccessTokenSource` — exchange a refresh token for an access token
//!   - `CommandGateway` — execute device commands
//! - Provide the **driving use-case**: `NotificationService::handle_push`,
//!   which runs decode → parse → filter → credentials → token → dispatch and
//!   short-circuits with a terminal outcome or error at each stage
//!
//! ## Dependency rule
//! Depends on `fanbridge-domain` only. Never imports adapter crates;
//! adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
