#![doc(test(attr(deny(warnings))))]

//! Prorata Core computes the share of monthly budget allotments that
//! falls inside an arbitrary date range, prorating partial months by
//! day count.

pub mod allocation;
pub mod domain;
pub mod errors;
pub mod source;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Prorata Core tracing initialized.");
    });
}
