// Exchange events module for FixSwap
// Each event is published once, after the reserve commit of a successful call

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the exchange is initialized
/// Topics: ("Initialized",)
/// Data: (owner, token_a, token_b, exchange_rate)
pub fn emit_initialized(
    env: &Env,
    owner: &Address,
    token_a: &Address,
    token_b: &Address,
    exchange_rate: u128,
) {
    env.events().publish(
        (Symbol::new(env, "Initialized"),),
        (owner.clone(), token_a.clone(), token_b.clone(), exchange_rate),
    );
}

/// Emitted when the owner replaces the rate
/// Topics: ("ExchangeRateUpdated",)
/// Data: new_rate
pub fn emit_exchange_rate_updated(env: &Env, new_rate: u128) {
    env.events()
        .publish((Symbol::new(env, "ExchangeRateUpdated"),), new_rate);
}

/// Emitted after either swap direction
/// Topics: ("Swapped",)
/// Data: (asset_in, amount_in, asset_out, amount_out)
pub fn emit_swapped(
    env: &Env,
    asset_in: &Address,
    amount_in: u128,
    asset_out: &Address,
    amount_out: u128,
) {
    env.events().publish(
        (Symbol::new(env, "Swapped"),),
        (asset_in.clone(), amount_in, asset_out.clone(), amount_out),
    );
}

/// Topics: ("AddedLiquidity",)
/// Data: (token_a, amount_a, token_b, amount_b)
pub fn emit_added_liquidity(
    env: &Env,
    token_a: &Address,
    amount_a: u128,
    token_b: &Address,
    amount_b: u128,
) {
    env.events().publish(
        (Symbol::new(env, "AddedLiquidity"),),
        (token_a.clone(), amount_a, token_b.clone(), amount_b),
    );
}

/// Topics: ("RemovedLiquidity",)
/// Data: (token_a, amount_a, token_b, amount_b)
pub fn emit_removed_liquidity(
    env: &Env,
    token_a: &Address,
    amount_a: u128,
    token_b: &Address,
    amount_b: u128,
) {
    env.events().publish(
        (Symbol::new(env, "RemovedLiquidity"),),
        (token_a.clone(), amount_a, token_b.clone(), amount_b),
    );
}
