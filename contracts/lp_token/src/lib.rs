#![no_std]

//! Fungible balance ledger stored in the calling contract's own storage.
//!
//! Every pair embeds one of these to account for its liquidity token, and the
//! native wrapper reuses it for wrapped balances. Because state is keyed off
//! the current contract's storage, two contracts never share balances.
//!
//! `mint` and `burn` are privileged bookkeeping for the embedding contract.
//! `transfer`, `transfer_from` and `approve` are holder operations and
//! require the holder's (or spender's) authorization.

mod errors;
mod storage;


pub use errors::LpTokenError;
pub use storage::{AllowanceEntry, INFINITE_ALLOWANCE};

use soroban_sdk::{Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use storage::{
    is_initialized, read_allowance, read_balance, read_total_supply, write_allowance,
    write_balance, write_total_supply,
};

fn check_nonnegative_amount(amount: i128) -> Result<(), LpTokenError> {
    if amount < 0 {
        return Err(LpTokenError::NegativeAmount);
    }
    Ok(())
}

pub fn initialize(
    env: &Env,
    decimals: u32,
    name: String,
    symbol: String,
) -> Result<(), LpTokenError> {
    if is_initialized(env) {
        return Err(LpTokenError::AlreadyInitialized);
    }

    TokenUtils::new(env).metadata().set_metadata(&TokenMetadata {
        decimal: decimals,
        name,
        symbol,
    });
    write_total_supply(env, 0);
    Ok(())
}

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    read_balance(env, id)
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    read_allowance(env, from, spender).amount
}

pub fn decimals(env: &Env) -> u32 {
    TokenUtils::new(env).metadata().get_metadata().decimal
}

pub fn name(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().name
}

pub fn symbol(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().symbol
}

/// Creates `amount` new units for `to`.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), LpTokenError> {
    check_nonnegative_amount(amount)?;
    if !is_initialized(env) {
        return Err(LpTokenError::NotInitialized);
    }

    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(LpTokenError::Overflow)?;
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(LpTokenError::Overflow)?;

    write_total_supply(env, supply);
    write_balance(env, to, balance);

    TokenUtils::new(env)
        .events()
        .mint(env.current_contract_address(), to.clone(), amount);
    Ok(())
}

/// Destroys `amount` units held by `from`.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), LpTokenError> {
    check_nonnegative_amount(amount)?;
    spend_balance(env, from, amount)?;

    let supply = read_total_supply(env)
        .checked_sub(amount)
        .ok_or(LpTokenError::Overflow)?;
    write_total_supply(env, supply);

    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LpTokenError> {
    from.require_auth();
    check_nonnegative_amount(amount)?;

    move_balance(env, from, to, amount)?;
    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);
    Ok(())
}

/// Moves `amount` from `from` to `to` on behalf of `spender`, consuming its
/// allowance unless the allowance is [`INFINITE_ALLOWANCE`].
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LpTokenError> {
    spender.require_auth();
    check_nonnegative_amount(amount)?;

    let mut entry = read_allowance(env, from, spender);
    if entry.amount < amount {
        return Err(LpTokenError::InsufficientAllowance);
    }
    if entry.amount != INFINITE_ALLOWANCE && amount > 0 {
        entry.amount -= amount;
        write_allowance(env, from, spender, &entry);
    }

    move_balance(env, from, to, amount)?;
    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), LpTokenError> {
    from.require_auth();
    check_nonnegative_amount(amount)?;

    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(LpTokenError::InvalidExpiration);
    }

    write_allowance(
        env,
        from,
        spender,
        &AllowanceEntry {
            amount,
            expiration_ledger,
        },
    );
    TokenUtils::new(env)
        .events()
        .approve(from.clone(), spender.clone(), amount, expiration_ledger);
    Ok(())
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), LpTokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(LpTokenError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LpTokenError> {
    spend_balance(env, from, amount)?;
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(LpTokenError::Overflow)?;
    write_balance(env, to, balance);
    Ok(())
}
