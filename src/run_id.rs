//! Run IDs for scoring passes.
//!
//! The process gets one ULID at startup; each ranking or recompute pass can
//! additionally mint its own. The IDs are time-ordered and show up in every
//! log line of a pass, so a slow or odd-looking ranking can be traced back
//! end to end.

use once_cell::sync::Lazy;
use ulid::Ulid;

/// Process-level run ID, generated once at first access.
static PROCESS_RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// The process-level run ID (stable for the process lifetime).
#[inline]
pub fn get() -> &'static str {
    &PROCESS_RUN_ID
}

/// A fresh ULID for one ranking pass or recompute batch.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
