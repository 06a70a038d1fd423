#![doc(test(attr(deny(warnings))))]

//! Bank Core models the business rules of a bank account: applying deposits
//! and withdrawals under account-variant limits, and producing rolling-window
//! account statements.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}
