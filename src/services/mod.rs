//! Service layer for portal-sweep.
//!
//! The sweep pipeline, run strictly in sequence:
//! - Selector (category and account-age filtering)
//! - Transfer (item and group reassignment with provenance tagging)
//! - Deleter (gated account deletion)
//! - Orchestrator (holding-account resolution and per-member loop)

pub mod deleter;
pub mod orchestrator;
pub mod selector;
pub mod transfer;

pub use orchestrator::RunSummary;
pub use transfer::TransferStats;
