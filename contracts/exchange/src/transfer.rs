// Calls into the external token contracts
//
// Token contracts are untrusted. Transfers go through the `try_` client
// variants so a rejected transfer comes back as `TransferFailed` instead of
// trapping the host.

use soroban_sdk::{log, token, Address, Env};

use crate::error::ExchangeError;

/// Token contracts count in i128; reserves count in u128
pub fn to_token_amount(amount: u128) -> Result<i128, ExchangeError> {
    i128::try_from(amount).map_err(|_| ExchangeError::Overflow)
}

pub fn balance_of(env: &Env, token: &Address, owner: &Address) -> i128 {
    token::Client::new(env, token).balance(owner)
}

pub fn allowance_of(env: &Env, token: &Address, owner: &Address, spender: &Address) -> i128 {
    token::Client::new(env, token).allowance(owner, spender)
}

/// Move `amount` from `from` into the exchange using the exchange's allowance
pub fn pull(env: &Env, token: &Address, from: &Address, amount: u128) -> Result<(), ExchangeError> {
    if amount == 0 {
        return Ok(());
    }
    let value = to_token_amount(amount)?;
    let exchange = env.current_contract_address();

    let result = token::Client::new(env, token).try_transfer_from(&exchange, from, &exchange, &value);
    if !matches!(result, Ok(Ok(()))) {
        log!(env, "transfer_from failed", token.clone(), from.clone(), amount);
        return Err(ExchangeError::TransferFailed);
    }
    Ok(())
}

/// Move `amount` out of the exchange to `to`
pub fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), ExchangeError> {
    if amount == 0 {
        return Ok(());
    }
    let value = to_token_amount(amount)?;
    let exchange = env.current_contract_address();

    let result = token::Client::new(env, token).try_transfer(&exchange, to, &value);
    if !matches!(result, Ok(Ok(()))) {
        log!(env, "transfer failed", token.clone(), to.clone(), amount);
        return Err(ExchangeError::TransferFailed);
    }
    Ok(())
}
