use soroban_sdk::{token, Address, Env};

use crate::errors::{reject, RegistryError};

/// Tokens of `token` currently held by this contract.
pub fn balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

/// Rejects a payer whose token balance cannot cover `amount`.
///
/// Must run before [`collect`]: a failed token transfer surfaces the token
/// contract's own error code, not ours.
pub fn require_funds(
    env: &Env,
    token: &Address,
    payer: &Address,
    amount: i128,
    operation: &str,
) -> Result<(), RegistryError> {
    if token::Client::new(env, token).balance(payer) < amount {
        return Err(reject(env, RegistryError::InsufficientPayment, operation));
    }
    Ok(())
}

/// Pulls `amount` tokens from `payer` into the contract.
///
/// The payer must have authorised the enclosing invocation.
pub fn collect(env: &Env, token: &Address, payer: &Address, amount: i128) {
    token::Client::new(env, token).transfer(payer, &env.current_contract_address(), &amount);
}

/// Sends the entire escrowed balance to `recipient` and returns the amount.
pub fn release_all(
    env: &Env,
    token: &Address,
    recipient: &Address,
    operation: &str,
) -> Result<i128, RegistryError> {
    let amount = balance(env, token);
    if amount <= 0 {
        return Err(reject(env, RegistryError::NothingToWithdraw, operation));
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), recipient, &amount);
    Ok(amount)
}
