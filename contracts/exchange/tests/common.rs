#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events}, token, Address, Env, Symbol, TryFromVal, Val, Vec,
};
use fixswap_exchange::{FixedRateExchange, FixedRateExchangeClient};

// Test constants
pub const DEFAULT_RATE: u128 = 2;
pub const APPROVAL_LEDGERS: u32 = 1000;

pub struct TestExchange<'a> {
    pub client: FixedRateExchangeClient<'a>,
    pub owner: Address,
    pub token_a: Address,
    pub token_b: Address,
}

/// Setup exchange with fresh tokens at the given rate
pub fn setup_exchange(env: &Env, rate: u128) -> TestExchange<'_> {
    let owner = Address::generate(env);
    let token_admin = Address::generate(env);
    let token_a = create_token(env, &token_admin);
    let token_b = create_token(env, &token_admin);

    let exchange_id = env.register(FixedRateExchange, ());
    let client = FixedRateExchangeClient::new(env, &exchange_id);

    client.initialize(&owner, &token_a, &token_b, &rate);

    TestExchange {
        client,
        owner,
        token_a,
        token_b,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

/// Let `spender` pull up to `amount` of `token` from `from`
pub fn approve(env: &Env, token: &Address, from: &Address, spender: &Address, amount: i128) {
    let expiration = env.ledger().sequence() + APPROVAL_LEDGERS;
    token::Client::new(env, token).approve(from, spender, &amount, &expiration);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

/// New address holding and having approved the given amounts for the exchange
pub fn funded_user(env: &Env, ex: &TestExchange, amount_a: i128, amount_b: i128) -> Address {
    let user = Address::generate(env);
    if amount_a > 0 {
        mint_tokens(env, &ex.token_a, &user, amount_a);
        approve(env, &ex.token_a, &user, &ex.client.address, amount_a);
    }
    if amount_b > 0 {
        mint_tokens(env, &ex.token_b, &user, amount_b);
        approve(env, &ex.token_b, &user, &ex.client.address, amount_b);
    }
    user
}

/// Deposit reserves from a throwaway provider
pub fn seed_liquidity(env: &Env, ex: &TestExchange, amount_a: u128, amount_b: u128) {
    let provider = funded_user(env, ex, amount_a as i128, amount_b as i128);
    ex.client.provide_liquidity(&provider, &amount_a, &amount_b);
}

/// Topics and data of the most recent event published by `contract`.
/// Only sees the latest top-level invocation, so call it straight after
/// the operation under test.
pub fn last_event_of(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let mut last = None;
    for (id, topics, data) in env.events().all().iter() {
        if &id == contract {
            last = Some((topics, data));
        }
    }
    last.expect("no event published by contract")
}

pub fn event_name(env: &Env, topics: &Vec<Val>) -> Symbol {
    Symbol::try_from_val(env, &topics.get(0).unwrap()).unwrap()
}
