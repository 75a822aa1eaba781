// ============================================================================
// Numeric Module
// Exact decimal arithmetic for currency-scoped amounts
// ============================================================================
//
// This module provides:
// - DecimalAmount: exact decimal with tracked scale (wraps rust_decimal)
// - RoundingMode: policies for fitting a result into a target scale
// - MoneyError: error type shared by the whole crate
//
// Design principles:
// - No floating-point arithmetic (floats are only parsed at the boundary)
// - All arithmetic returns Result (no panics)
// - Precision is never dropped without an explicit rounding mode

mod amount;
mod errors;
mod rounding;

pub use amount::DecimalAmount;
pub use errors::{MoneyError, MoneyResult};
pub use rounding::RoundingMode;

/// Largest scale the decimal engine can hold.
pub const MAX_SCALE: u32 = 28;
