//! Token pair and secret wrappers held by a session.

pub mod pair;
pub mod secret;
