//! Recording handler invocations.
//!
//! Dispatch tests need to show that exactly one handler ran. A [`Probe`] is a
//! cheaply cloneable log that handlers write their name into; clones share
//! the same log, so a probe can be moved into `'static` closures or threads.
//!
//! # Examples
//!
//! ```
//! use typed_result_test_helpers::probe::Probe;
//!
//! let probe = Probe::default();
//! let handler = {
//!     let probe = probe.clone();
//!     move |x: u32| {
//!         probe.record("double");
//!         x * 2
//!     }
//! };
//! assert_eq!(handler(4), 8);
//! probe.ensure_only("double").unwrap();
//! ```

use std::sync::Arc;

use anyhow::{Result, ensure};
use parking_lot::Mutex;

/// Shared, ordered log of handler names.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl Probe {
    /// Append `name` to the log.
    pub fn record(&self, name: &'static str) {
        self.calls.lock().push(name);
    }

    /// Snapshot of every recorded name, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    /// How many times `name` was recorded.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == name).count()
    }

    /// Check that `name` was the only handler recorded, exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error describing the full log otherwise.
    pub fn ensure_only(&self, name: &str) -> Result<()> {
        let calls = self.calls();
        ensure!(
            calls == [name],
            "expected only `{name}` to run once, saw {calls:?}"
        );
        Ok(())
    }
}
