#![no_std]

//! Wraps the native asset into an ordinary SEP-41 token that pairs can hold,
//! one wrapped unit per native unit.
//!
//! The native asset is reached through its Stellar Asset Contract. Deposits
//! pull native from the depositor and mint wrapped units to it; withdrawals
//! burn wrapped units and pay the native asset back.

mod errors;
mod events;
mod storage;


pub use errors::WrappedNativeError;

use driftswap_lp_token::LpTokenError;
use events::WrappedNativeEvents;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, String};
use storage::{extend_instance_ttl, get_native, set_native};

const DECIMALS: u32 = 7;
const NAME: &str = "Wrapped Lumens";
const SYMBOL: &str = "WXLM";

fn native_client(env: &Env) -> Result<TokenClient<'_>, WrappedNativeError> {
    let native = get_native(env).ok_or(WrappedNativeError::NotInitialized)?;
    Ok(TokenClient::new(env, &native))
}

#[contract]
pub struct WrappedNative;

#[contractimpl]
impl WrappedNative {
    pub fn initialize(env: Env, native: Address) -> Result<(), WrappedNativeError> {
        if get_native(&env).is_some() {
            return Err(WrappedNativeError::AlreadyInitialized);
        }
        set_native(&env, &native);
        driftswap_lp_token::initialize(
            &env,
            DECIMALS,
            String::from_str(&env, NAME),
            String::from_str(&env, SYMBOL),
        )?;
        extend_instance_ttl(&env);
        Ok(())
    }

    pub fn native(env: Env) -> Result<Address, WrappedNativeError> {
        get_native(&env).ok_or(WrappedNativeError::NotInitialized)
    }

    /// Pulls `amount` of the native asset from `from` and mints as much
    /// wrapped balance to it.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WrappedNativeError> {
        from.require_auth();
        if amount < 0 {
            return Err(WrappedNativeError::NegativeAmount);
        }
        extend_instance_ttl(&env);

        native_client(&env)?.transfer(&from, &env.current_contract_address(), &amount);
        driftswap_lp_token::mint(&env, &from, amount)?;

        WrappedNativeEvents::deposit(&env, &from, amount);
        Ok(())
    }

    /// Burns `amount` of `from`'s wrapped balance and pays the native asset back.
    pub fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), WrappedNativeError> {
        from.require_auth();
        extend_instance_ttl(&env);

        let native = native_client(&env)?;
        driftswap_lp_token::burn(&env, &from, amount)?;
        native.transfer(&env.current_contract_address(), &from, &amount);

        WrappedNativeEvents::withdraw(&env, &from, amount);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // SEP-41
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        driftswap_lp_token::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), LpTokenError> {
        extend_instance_ttl(&env);
        driftswap_lp_token::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        driftswap_lp_token::balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LpTokenError> {
        extend_instance_ttl(&env);
        driftswap_lp_token::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LpTokenError> {
        extend_instance_ttl(&env);
        driftswap_lp_token::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        driftswap_lp_token::total_supply(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        driftswap_lp_token::decimals(&env)
    }

    pub fn name(env: Env) -> String {
        driftswap_lp_token::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        driftswap_lp_token::symbol(&env)
    }
}
