#![no_std]

//! Constant-product pair engine.
//!
//! A pair pools two SEP-41 tokens and is itself the SEP-41 token of its
//! liquidity shares. Callers move tokens into the pair before calling
//! `mint` or `swap`, and liquidity tokens before calling `burn`; the pair
//! measures deposits against its last recorded reserves.

mod errors;
mod events;
mod liquidity;
mod oracle;
mod protocol_fee;
mod reentrancy;
mod storage;
mod swap;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; pair is no_std so we must opt-in explicitly.


pub use errors::PairError;

use driftswap_lp_token::LpTokenError;
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, U256};
use storage::{extend_instance_ttl, get_pair_state, has_pair_state, set_pair_state, PairStorage};

const LP_DECIMALS: u32 = 7;
const LP_NAME: &str = "DriftSwap LP";
const LP_SYMBOL: &str = "DRIFT-LP";

fn load_state(env: &Env) -> Result<PairStorage, PairError> {
    get_pair_state(env).ok_or(PairError::NotInitialized)
}

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    /// Binds the pair to its factory and its two tokens, sorted
    /// (`token_0 < token_1`). Called once by the factory right after deployment.
    pub fn initialize(
        env: Env,
        factory: Address,
        token_0: Address,
        token_1: Address,
    ) -> Result<(), PairError> {
        if has_pair_state(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        factory.require_auth();

        let zero = U256::from_u32(&env, 0);
        set_pair_state(
            &env,
            &PairStorage {
                factory,
                token_0,
                token_1,
                reserve_0: 0,
                reserve_1: 0,
                block_timestamp_last: 0,
                price_0_cumulative_last: zero.clone(),
                price_1_cumulative_last: zero.clone(),
                k_last: zero,
            },
        );
        driftswap_lp_token::initialize(
            &env,
            LP_DECIMALS,
            String::from_str(&env, LP_NAME),
            String::from_str(&env, LP_SYMBOL),
        )?;
        extend_instance_ttl(&env);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reserve-mutating entry points
    // -----------------------------------------------------------------------

    pub fn mint(env: Env, to: Address) -> Result<i128, PairError> {
        extend_instance_ttl(&env);
        liquidity::mint(&env, &to)
    }

    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        extend_instance_ttl(&env);
        liquidity::burn(&env, &to)
    }

    pub fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), PairError> {
        extend_instance_ttl(&env);
        swap::swap(&env, amount_0_out, amount_1_out, &to, &data)
    }

    pub fn skim(env: Env, to: Address) -> Result<(), PairError> {
        extend_instance_ttl(&env);
        swap::skim(&env, &to)
    }

    pub fn sync(env: Env) -> Result<(), PairError> {
        extend_instance_ttl(&env);
        swap::sync(&env)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// `(reserve_0, reserve_1, block_timestamp_last)`
    pub fn get_reserves(env: Env) -> Result<(i128, i128, u32), PairError> {
        let state = load_state(&env)?;
        Ok((state.reserve_0, state.reserve_1, state.block_timestamp_last))
    }

    pub fn factory(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.factory)
    }

    pub fn token_0(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.token_0)
    }

    pub fn token_1(env: Env) -> Result<Address, PairError> {
        Ok(load_state(&env)?.token_1)
    }

    pub fn price_0_cumulative_last(env: Env) -> Result<U256, PairError> {
        Ok(load_state(&env)?.price_0_cumulative_last)
    }

    pub fn price_1_cumulative_last(env: Env) -> Result<U256, PairError> {
        Ok(load_state(&env)?.price_1_cumulative_last)
    }

    pub fn k_last(env: Env) -> Result<U256, PairError> {
        Ok(load_state(&env)?.k_last)
    }

    // -----------------------------------------------------------------------
    // Liquidity token (SEP-41)
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
