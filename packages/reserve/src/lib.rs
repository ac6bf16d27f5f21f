// FixSwap Reserve Package

#![no_std]

pub mod types;
pub mod ledger;
pub mod rate;

pub use types::{Asset, ReserveError, ReserveLedger};
pub use rate::{quote_a_for_b, quote_b_for_a};
