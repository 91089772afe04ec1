#![doc(test(attr(deny(warnings))))]

//! Finance Hub offers the paycheck-allocation, expense-logging, and reporting
//! primitives behind a single-user personal-finance dashboard.

pub mod allocation;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Hub tracing initialized.");
    });
}
