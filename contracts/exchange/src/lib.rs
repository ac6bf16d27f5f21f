#![no_std]

//! # FixSwap Exchange
//!
//! Two-asset exchange settling swaps at an owner-set integer rate
//! (units of B per unit of A).
//!
//! ## Responsibilities:
//! 1. Swap A for B and B for A against the tracked reserves
//! 2. Accept liquidity from anyone, release it only to the owner
//! 3. Let the owner replace the rate
//!
//! Every state-changing call transfers first and commits the reserve
//! ledger afterwards, inside a non-reentrant guard.

use soroban_sdk::{contract, contractimpl, log, Address, Env};

use fixswap_reserve::rate;

mod error;
mod events;
mod guard;
mod storage;
mod transfer;
pub mod types;

pub use error::ExchangeError;
use events::*;
use guard::non_reentrant;
use storage::*;
pub use types::{Asset, ExchangeConfig, ReserveLedger};

#[contract]
pub struct FixedRateExchange;

#[contractimpl]
impl FixedRateExchange {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the exchange
    ///
    /// # Arguments
    /// * `owner` - May update the rate and withdraw reserves
    /// * `token_a` - Token contract for asset A
    /// * `token_b` - Token contract for asset B
    /// * `initial_rate` - Units of B per unit of A
    pub fn initialize(
        env: Env,
        owner: Address,
        token_a: Address,
        token_b: Address,
        initial_rate: u128,
    ) -> Result<(), ExchangeError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(ExchangeError::AlreadyInitialized);
        }

        if token_a == token_b {
            return Err(ExchangeError::SameToken);
        }

        let config = ExchangeConfig {
            owner,
            token_a,
            token_b,
        };
        write_config(&env, &config);
        write_ledger(&env, &ReserveLedger::new(initial_rate));
        extend_instance_ttl(&env);

        emit_initialized(
            &env,
            &config.owner,
            &config.token_a,
            &config.token_b,
            initial_rate,
        );

        Ok(())
    }

    // ========================================================
    // OWNER FUNCTIONS
    // ========================================================

    /// Replace the exchange rate. No bounds are enforced.
    pub fn set_exchange_rate(env: Env, caller: Address, new_rate: u128) -> Result<(), ExchangeError> {
        caller.require_auth();
        let config = read_config(&env)?;
        Self::require_owner(&env, &config, &caller)?;

        non_reentrant(&env, || {
            let mut ledger = read_ledger(&env)?;
            ledger.set_rate(new_rate);
            write_ledger(&env, &ledger);
            extend_instance_ttl(&env);

            log!(&env, "exchange rate updated", new_rate);
            emit_exchange_rate_updated(&env, new_rate);
            Ok(())
        })
    }

    /// Withdraw reserves to the owner
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<(), ExchangeError> {
        caller.require_auth();
        let config = read_config(&env)?;
        Self::require_owner(&env, &config, &caller)?;

        non_reentrant(&env, || {
            let mut ledger = read_ledger(&env)?;

            if ledger.reserve_a < amount_a || ledger.reserve_b < amount_b {
                log!(&env, "withdrawal exceeds reserves", amount_a, amount_b);
                return Err(ExchangeError::InsufficientReserve);
            }

            transfer::push(&env, &config.token_a, &config.owner, amount_a)?;
            transfer::push(&env, &config.token_b, &config.owner, amount_b)?;

            ledger.apply_withdrawal(amount_a, amount_b)?;
            write_ledger(&env, &ledger);
            extend_instance_ttl(&env);

            emit_removed_liquidity(&env, &config.token_a, amount_a, &config.token_b, amount_b);
            Ok(())
        })
    }

    // ========================================================
    // SWAP FUNCTIONS
    // ========================================================

    /// Sell `amount_a` of A for `amount_a * rate` of B
    ///
    /// Returns the amount of B paid out.
    pub fn swap_a_for_b(env: Env, caller: Address, amount_a: u128) -> Result<u128, ExchangeError> {
        caller.require_auth();
        let config = read_config(&env)?;

        non_reentrant(&env, || {
            let mut ledger = read_ledger(&env)?;
            let amount_b = rate::quote_a_for_b(amount_a, ledger.exchange_rate)?;

            Self::require_balance(&env, &config.token_a, &caller, amount_a, ExchangeError::NotEnoughTokenA)?;

            if ledger.reserve_b < amount_b {
                log!(&env, "reserve B cannot cover swap", amount_b);
                return Err(ExchangeError::InsufficientLiquidityB);
            }

            transfer::pull(&env, &config.token_a, &caller, amount_a)?;
            transfer::push(&env, &config.token_b, &caller, amount_b)?;

            ledger.apply_swap_a_for_b(amount_a, amount_b)?;
            write_ledger(&env, &ledger);
            extend_instance_ttl(&env);

            emit_swapped(&env, &config.token_a, amount_a, &config.token_b, amount_b);
            Ok(amount_b)
        })
    }

    /// Sell `amount_b` of B for `floor(amount_b / rate)` of A
    ///
    /// The division truncates: any `amount_b` below the rate is accepted and
    /// pays out 0 of A. Returns the amount of A paid out.
    pub fn swap_b_for_a(env: Env, caller: Address, amount_b: u128) -> Result<u128, ExchangeError> {
        caller.require_auth();
        let config = read_config(&env)?;

        non_reentrant(&env, || {
            let mut ledger = read_ledger(&env)?;
            let amount_a = rate::quote_b_for_a(amount_b, ledger.exchange_rate)?;

            Self::require_balance(&env, &config.token_b, &caller, amount_b, ExchangeError::NotEnoughTokenB)?;

            if ledger.reserve_a < amount_a {
                log!(&env, "reserve A cannot cover swap", amount_a);
                return Err(ExchangeError::InsufficientLiquidityA);
            }

            transfer::pull(&env, &config.token_b, &caller, amount_b)?;
            transfer::push(&env, &config.token_a, &caller, amount_a)?;

            ledger.apply_swap_b_for_a(amount_b, amount_a)?;
            write_ledger(&env, &ledger);
            extend_instance_ttl(&env);

            emit_swapped(&env, &config.token_b, amount_b, &config.token_a, amount_a);
            Ok(amount_a)
        })
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Deposit both assets into the reserves
    ///
    /// The caller must have approved the exchange for at least
    /// `amount_a` of A and `amount_b` of B beforehand.
    pub fn provide_liquidity(
        env: Env,
        caller: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<(), ExchangeError> {
        caller.require_auth();
        let config = read_config(&env)?;

        non_reentrant(&env, || {
            let mut ledger = read_ledger(&env)?;
            let exchange = env.current_contract_address();

            let allowance_a = transfer::allowance_of(&env, &config.token_a, &caller, &exchange);
            let allowance_b = transfer::allowance_of(&env, &config.token_b, &caller, &exchange);
            if allowance_a < transfer::to_token_amount(amount_a)?
                || allowance_b < transfer::to_token_amount(amount_b)?
            {
                log!(&env, "allowance too low", caller.clone(), amount_a, amount_b);
                return Err(ExchangeError::InsufficientAllowance);
            }

            transfer::pull(&env, &config.token_a, &caller, amount_a)?;
            transfer::pull(&env, &config.token_b, &caller, amount_b)?;

            ledger.apply_deposit(amount_a, amount_b)?;
            write_ledger(&env, &ledger);
            extend_instance_ttl(&env);

            emit_added_liquidity(&env, &config.token_a, amount_a, &config.token_b, amount_b);
            Ok(())
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Current `(reserve_a, reserve_b)`
    pub fn get_reserves(env: Env) -> Result<(u128, u128), ExchangeError> {
        Ok(read_ledger(&env)?.snapshot())
    }

    /// `(token_a, token_b)`
    pub fn get_token_addresses(env: Env) -> Result<(Address, Address), ExchangeError> {
        let config = read_config(&env)?;
        Ok((config.token_a, config.token_b))
    }

    /// Units of B per unit of A
    pub fn get_exchange_rate(env: Env) -> Result<u128, ExchangeError> {
        Ok(read_ledger(&env)?.exchange_rate)
    }

    pub fn get_owner(env: Env) -> Result<Address, ExchangeError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn get_config(env: Env) -> Result<ExchangeConfig, ExchangeError> {
        read_config(&env)
    }

    /// B a swap of `amount_a` would pay at the current rate.
    /// Balance and reserve checks are not applied.
    pub fn quote_a_for_b(env: Env, amount_a: u128) -> Result<u128, ExchangeError> {
        let ledger = read_ledger(&env)?;
        Ok(rate::quote_a_for_b(amount_a, ledger.exchange_rate)?)
    }

    /// A a swap of `amount_b` would pay at the current rate.
    /// Balance and reserve checks are not applied.
    pub fn quote_b_for_a(env: Env, amount_b: u128) -> Result<u128, ExchangeError> {
        let ledger = read_ledger(&env)?;
        Ok(rate::quote_b_for_a(amount_b, ledger.exchange_rate)?)
    }
}

// ========================================================
// INTERNAL HELPERS
// ========================================================

impl FixedRateExchange {
    fn require_owner(env: &Env, config: &ExchangeConfig, caller: &Address) -> Result<(), ExchangeError> {
        if !config.is_owner(caller) {
            log!(env, "caller is not owner", caller.clone());
            return Err(ExchangeError::NotOwner);
        }
        Ok(())
    }

    /// Caller must hold at least `amount` of `token` before any transfer is attempted
    fn require_balance(
        env: &Env,
        token: &Address,
        caller: &Address,
        amount: u128,
        shortfall: ExchangeError,
    ) -> Result<(), ExchangeError> {
        let needed = transfer::to_token_amount(amount)?;
        if transfer::balance_of(env, token, caller) < needed {
            log!(env, "caller balance too low", caller.clone(), amount);
            return Err(shortfall);
        }
        Ok(())
    }
}
