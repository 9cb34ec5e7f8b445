//! Service-facing configuration for the Humanity deployment a session talks to.
//!
//! `descriptor` exposes a validated [`ServiceDescriptor`] covering the OAuth token endpoint,
//! the resource API base URL, and the client authentication method used for token exchanges.

pub mod descriptor;

pub use descriptor::*;
