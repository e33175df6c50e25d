//! Permit (ILP) verification client.
//!
//! One best-effort lookup per submission: validate locally, fetch once,
//! render one of three outcomes. No retry, timeout or cancellation.

pub mod client;
pub mod query;
pub mod render;
pub mod response;
pub mod transport;

pub use client::*;
pub use query::*;
pub use response::*;
pub use transport::*;

/// Relative URL of the verification service.
pub const DEFAULT_ENDPOINT: &str = "api/verify_ilp.php";
/// Query parameter carrying the permit number.
pub const PERMIT_PARAM: &str = "permit";
