//! A collection of various utility helpers.

mod error;
pub use self::error::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;

use std::sync::Arc;

/// A callback used to report progress messages.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which silently drops all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| {})
}
