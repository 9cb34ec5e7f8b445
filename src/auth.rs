//! Auth-domain credentials, permission levels, and token models.

pub mod credentials;
pub mod permission;
pub mod token;

pub use credentials::*;
pub use permission::*;
pub use token::{pair::*, secret::*};
