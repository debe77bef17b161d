//! Data models for portal-sweep.
//!
//! All entities live in the remote portal; these types are the serde
//! projections of what the sharing API returns. The tool only reads them
//! and mutates ownership and tag fields through the portal client.

mod content;
mod member;

pub use content::*;
pub use member::*;
