//! Background Services
//!
//! This module contains the runtime pieces the pure model cannot own:
//! - uploads: Cancellable per-upload expiry timers

pub mod uploads;

// Re-export commonly used types for convenience
pub use uploads::{UploadExpired, UploadScheduler};
