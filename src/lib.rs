//! portal-sweep - member retirement automation for web GIS portals.
//!
//! Selects portal members by organizational category and account age,
//! transfers their content items and groups to a holding account with
//! provenance tagging, and optionally deletes the retired accounts.

pub mod config;
pub mod error;
pub mod models;
pub mod portal;
pub mod services;

pub use config::{PortalSession, SweepConfig};
pub use error::{Error, Result};
