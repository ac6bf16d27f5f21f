// Exchange storage module for FixSwap

use soroban_sdk::{contracttype, Env};

use crate::error::ExchangeError;
use crate::types::{ExchangeConfig, ReserveLedger};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner and token addresses
    Config,
    /// Reserve counters and exchange rate
    Ledger,
    /// Set while a guarded entry point is executing
    Locked,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Instance lifetime in ledgers (~30 days at 5s/ledger)
const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
/// Bump once fewer than ~29 days remain
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 17_280;

/// Extend TTL for the contract instance and everything stored in it
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &ExchangeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<ExchangeConfig, ExchangeError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ExchangeError::NotInitialized)
}

// ============================================================
// RESERVE LEDGER
// ============================================================

/// Reserves and rate are always written together as one entry
pub fn write_ledger(env: &Env, ledger: &ReserveLedger) {
    env.storage().instance().set(&DataKey::Ledger, ledger);
}

pub fn read_ledger(env: &Env) -> Result<ReserveLedger, ExchangeError> {
    env.storage()
        .instance()
        .get(&DataKey::Ledger)
        .ok_or(ExchangeError::NotInitialized)
}

// ============================================================
// RE-ENTRANCY FLAG
// ============================================================

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
