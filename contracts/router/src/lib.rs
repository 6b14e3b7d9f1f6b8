#![no_std]

//! Stateless entry point composing pairs into liquidity operations and
//! multi-hop swaps.
//!
//! `to` authorizes every call: it pays the inputs and receives the outputs.
//! Amounts are computed from current reserves before any token moves, and
//! each hop pays the next pair directly, so a route either completes in full
//! or the whole invocation is rolled back.

mod errors;
mod guard;
mod helpers;
mod liquidity;
mod storage;
mod swap;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::RouterError;

use driftswap_interface::{pair_address, WrappedNativeClient};
use guard::{ensure_deadline, ensure_max_input, ensure_min_output, ensure_non_negative};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use storage::{extend_instance_ttl, get_config, has_config, set_config, RouterConfig};

fn load_config(env: &Env) -> Result<RouterConfig, RouterError> {
    get_config(env).ok_or(RouterError::NotInitialized)
}

fn first(amounts: &Vec<i128>) -> Result<i128, RouterError> {
    amounts.first().ok_or(RouterError::InvalidPath)
}

fn last(amounts: &Vec<i128>) -> Result<i128, RouterError> {
    amounts.last().ok_or(RouterError::InvalidPath)
}

/// Native routes must start (or end) at the wrapped native token.
fn ensure_endpoint(endpoint: Option<Address>, wrapped_native: &Address) -> Result<(), RouterError> {
    match endpoint {
        Some(token) if token == *wrapped_native => Ok(()),
        _ => Err(RouterError::InvalidPath),
    }
}

#[contract]
pub struct Router;

#[contractimpl]
impl Router {
    pub fn initialize(env: Env, factory: Address, wrapped_native: Address) -> Result<(), RouterError> {
        if has_config(&env) {
            return Err(RouterError::AlreadyInitialized);
        }
        set_config(
            &env,
            &RouterConfig {
                factory,
                wrapped_native,
            },
        );
        extend_instance_ttl(&env);
        Ok(())
    }

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        Ok(load_config(&env)?.factory)
    }

    pub fn wrapped_native(env: Env) -> Result<Address, RouterError> {
        Ok(load_config(&env)?.wrapped_native)
    }

    // -----------------------------------------------------------------------
    // Liquidity
    // -----------------------------------------------------------------------

    /// Deposits at the pool price, creating the pair on first use.
    /// Returns `(amount_a, amount_b, liquidity)`.
    pub fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_a_desired, amount_b_desired, amount_a_min, amount_b_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        let (pair, amount_a, amount_b) = liquidity::add_liquidity_amounts(
            &env,
            &config.factory,
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        )?;
        let liquidity =
            liquidity::deposit_and_mint(&env, &pair, &token_a, &token_b, amount_a, amount_b, &to, &to);

        Ok((amount_a, amount_b, liquidity))
    }

    /// Same as `add_liquidity` with the native asset as the second token.
    /// Only the native amount actually used is wrapped and debited.
    /// Returns `(amount_token, amount_native, liquidity)`.
    pub fn add_liquidity_native(
        env: Env,
        token: Address,
        amount_token_desired: i128,
        amount_native_desired: i128,
        amount_token_min: i128,
        amount_native_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[
            amount_token_desired,
            amount_native_desired,
            amount_token_min,
            amount_native_min,
        ])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        let (pair, amount_token, amount_native) = liquidity::add_liquidity_amounts(
            &env,
            &config.factory,
            &token,
            &config.wrapped_native,
            amount_token_desired,
            amount_native_desired,
            amount_token_min,
            amount_native_min,
        )?;
        WrappedNativeClient::new(&env, &config.wrapped_native).deposit(&to, &amount_native);
        let liquidity = liquidity::deposit_and_mint(
            &env,
            &pair,
            &token,
            &config.wrapped_native,
            amount_token,
            amount_native,
            &to,
            &to,
        );

        Ok((amount_token, amount_native, liquidity))
    }

    /// Burns `liquidity` of `to`'s pool share. Returns `(amount_a, amount_b)`.
    pub fn remove_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128), RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[liquidity, amount_a_min, amount_b_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        liquidity::remove_liquidity(
            &env,
            &config.factory,
            &token_a,
            &token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            &to,
        )
    }

    /// Burns liquidity of a token/native pair and unwraps the native side.
    /// Returns `(amount_token, amount_native)`.
    pub fn remove_liquidity_native(
        env: Env,
        token: Address,
        liquidity: i128,
        amount_token_min: i128,
        amount_native_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128), RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[liquidity, amount_token_min, amount_native_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        let (amount_token, amount_native) = liquidity::remove_liquidity(
            &env,
            &config.factory,
            &token,
            &config.wrapped_native,
            liquidity,
            amount_token_min,
            amount_native_min,
            &to,
        )?;
        WrappedNativeClient::new(&env, &config.wrapped_native).withdraw(&to, &amount_native);

        Ok((amount_token, amount_native))
    }

    // -----------------------------------------------------------------------
    // Swaps
    // -----------------------------------------------------------------------

    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_in, amount_out_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        let amounts = helpers::get_amounts_out(&env, &config.factory, amount_in, &path)?;
        ensure_min_output(last(&amounts)?, amount_out_min)?;

        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        Ok(amounts)
    }

    pub fn swap_tokens_for_exact_tokens(
        env: Env,
        amount_out: i128,
        amount_in_max: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_out, amount_in_max])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;

        let amounts = helpers::get_amounts_in(&env, &config.factory, amount_out, &path)?;
        ensure_max_input(first(&amounts)?, amount_in_max)?;

        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        Ok(amounts)
    }

    /// Wraps exactly `amount_in` native and sells it along `path`,
    /// which must start at the wrapped native token.
    pub fn swap_exact_native_for_tokens(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_in, amount_out_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;
        ensure_endpoint(path.first(), &config.wrapped_native)?;

        let amounts = helpers::get_amounts_out(&env, &config.factory, amount_in, &path)?;
        ensure_min_output(last(&amounts)?, amount_out_min)?;

        WrappedNativeClient::new(&env, &config.wrapped_native).deposit(&to, &first(&amounts)?);
        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        Ok(amounts)
    }

    /// Buys exactly `amount_out` native; `path` must end at the wrapped native token.
    pub fn swap_tokens_for_exact_native(
        env: Env,
        amount_out: i128,
        amount_in_max: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_out, amount_in_max])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;
        ensure_endpoint(path.last(), &config.wrapped_native)?;

        let amounts = helpers::get_amounts_in(&env, &config.factory, amount_out, &path)?;
        ensure_max_input(first(&amounts)?, amount_in_max)?;

        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        WrappedNativeClient::new(&env, &config.wrapped_native).withdraw(&to, &last(&amounts)?);
        Ok(amounts)
    }

    /// Sells exactly `amount_in` for native; `path` must end at the wrapped native token.
    pub fn swap_exact_tokens_for_native(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_in, amount_out_min])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;
        ensure_endpoint(path.last(), &config.wrapped_native)?;

        let amounts = helpers::get_amounts_out(&env, &config.factory, amount_in, &path)?;
        ensure_min_output(last(&amounts)?, amount_out_min)?;

        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        WrappedNativeClient::new(&env, &config.wrapped_native).withdraw(&to, &last(&amounts)?);
        Ok(amounts)
    }

    /// Buys exactly `amount_out` with native, spending at most
    /// `amount_in_max`. Only the required input is wrapped and debited.
    pub fn swap_native_for_exact_tokens(
        env: Env,
        amount_out: i128,
        amount_in_max: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, RouterError> {
        ensure_deadline(&env, deadline)?;
        ensure_non_negative(&[amount_out, amount_in_max])?;
        to.require_auth();
        extend_instance_ttl(&env);
        let config = load_config(&env)?;
        ensure_endpoint(path.first(), &config.wrapped_native)?;

        let amounts = helpers::get_amounts_in(&env, &config.factory, amount_out, &path)?;
        ensure_max_input(first(&amounts)?, amount_in_max)?;

        WrappedNativeClient::new(&env, &config.wrapped_native).deposit(&to, &first(&amounts)?);
        swap::pay_first_hop(&env, &config.factory, &path, first(&amounts)?, &to)?;
        swap::execute(&env, &config.factory, &amounts, &path, &to)?;
        Ok(amounts)
    }

    // -----------------------------------------------------------------------
    // Library
    // -----------------------------------------------------------------------

    pub fn quote(env: Env, amount_a: i128, reserve_a: i128, reserve_b: i128) -> Result<i128, RouterError> {
        helpers::quote(&env, amount_a, reserve_a, reserve_b)
    }

    pub fn get_amount_out(
        env: Env,
        amount_in: i128,
        reserve_in: i128,
        reserve_out: i128,
    ) -> Result<i128, RouterError> {
        helpers::get_amount_out(&env, amount_in, reserve_in, reserve_out)
    }

    pub fn get_amount_in(
        env: Env,
        amount_out: i128,
        reserve_in: i128,
        reserve_out: i128,
    ) -> Result<i128, RouterError> {
        helpers::get_amount_in(&env, amount_out, reserve_in, reserve_out)
    }

    pub fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Result<Vec<i128>, RouterError> {
        let config = load_config(&env)?;
        helpers::get_amounts_out(&env, &config.factory, amount_in, &path)
    }

    pub fn get_amounts_in(env: Env, amount_out: i128, path: Vec<Address>) -> Result<Vec<i128>, RouterError> {
        let config = load_config(&env)?;
        helpers::get_amounts_in(&env, &config.factory, amount_out, &path)
    }

    /// Deterministic pair address, whether or not the pair exists yet.
    pub fn pair_for(env: Env, token_a: Address, token_b: Address) -> Result<Address, RouterError> {
        let config = load_config(&env)?;
        pair_address(&env, &config.factory, &token_a, &token_b).ok_or(RouterError::IdenticalTokens)
    }
}
