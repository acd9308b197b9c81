//! Process-wide assertion configuration
//!
//! Two global switches live here, both read once when a subject is created
//! (never mid-chain):
//!
//! - the value representation used when failure messages render actual and
//!   expected values, and
//! - the flag deciding whether failure messages carry the capture-site
//!   location of the chain.
//!
//! Installing a representation affects every chain created afterwards.
//! Chains already in flight keep the representation they were created with.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use attest::{install_representation, reset_representation, Represent};
//!
//! struct Truncating;
//!
//! impl Represent for Truncating {
//!     fn value(&self, value: &dyn std::fmt::Debug) -> String {
//!         let mut text = format!("{value:?}");
//!         if text.len() > 40 {
//!             text.truncate(40);
//!             text.push_str("...");
//!         }
//!         text
//!     }
//! }
//!
//! install_representation(Arc::new(Truncating));
//! // ... assertions ...
//! reset_representation();
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// Formats values for failure messages.
///
/// Implementations receive the value behind a `Debug` object and return the
/// text embedded in the report. The standard representation is plain `{:?}`
/// formatting; custom representations typically truncate, re-quote or
/// otherwise decorate that output.
pub trait Represent: Send + Sync {
    fn value(&self, value: &dyn Debug) -> String;
}

/// Plain `{:?}` formatting.
pub struct StandardRepresentation;

impl Represent for StandardRepresentation {
    fn value(&self, value: &dyn Debug) -> String {
        format!("{value:?}")
    }
}

static ACTIVE: Lazy<RwLock<Arc<dyn Represent>>> =
    Lazy::new(|| RwLock::new(Arc::new(StandardRepresentation)));

static REPORT_LOCATIONS: AtomicBool = AtomicBool::new(true);

/// Install a custom representation for all chains created from now on.
pub fn install_representation(representation: Arc<dyn Represent>) {
    let mut active = match ACTIVE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *active = representation;
}

/// Restore the standard `{:?}` representation.
pub fn reset_representation() {
    install_representation(Arc::new(StandardRepresentation));
}

/// Decide whether failure messages of chains created from now on include the
/// ` at file:line:column` suffix pointing at the capture site.
pub fn report_caller_locations(enabled: bool) {
    REPORT_LOCATIONS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn active() -> Arc<dyn Represent> {
    match ACTIVE.read() {
        Ok(guard) => Arc::clone(&guard),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

pub(crate) fn locations_enabled() -> bool {
    REPORT_LOCATIONS.load(Ordering::Relaxed)
}
