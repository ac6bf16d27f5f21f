// Exchange Types

use soroban_sdk::{contracttype, Address};

pub use fixswap_reserve::{Asset, ReserveLedger};

// ============================================================
// EXCHANGE CONFIGURATION
// ============================================================

/// Fixed at initialization and never rewritten
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    /// May update the rate and withdraw reserves
    pub owner: Address,
    /// Token contract for asset A
    pub token_a: Address,
    /// Token contract for asset B
    pub token_b: Address,
}

impl ExchangeConfig {
    pub fn is_owner(&self, caller: &Address) -> bool {
        &self.owner == caller
    }
}
