//! Data transfer objects for API communication.
//!
//! Request and response types for the betting API, serializable via `serde`.
//! Field names follow the public camelCase wire format (`boyPool`,
//! `genderRevealed`, ...) that deployed clients already expect.
mod request;
mod response;

pub use request::*;
pub use response::*;
