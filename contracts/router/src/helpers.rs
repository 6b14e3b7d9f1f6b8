use driftswap_interface::{sort_tokens, FactoryClient, PairClient};
use driftswap_math::{mul_div, FEE_DENOMINATOR, FEE_MULTIPLIER};
use soroban_sdk::{vec, Address, Env, Vec};

use crate::errors::RouterError;

/// Given some amount of an asset and pair reserves, returns the equivalent
/// amount of the other asset at the current price (no fee).
pub fn quote(env: &Env, amount_a: i128, reserve_a: i128, reserve_b: i128) -> Result<i128, RouterError> {
    if amount_a <= 0 {
        return Err(RouterError::InsufficientAmount);
    }
    if reserve_a <= 0 || reserve_b <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }
    mul_div(env, amount_a, reserve_b, reserve_a).ok_or(RouterError::Overflow)
}

/// Computes output amount for an exact input swap using constant-product formula.
///
/// Formula: amount_out = (amount_in * 997 * reserve_out) /
///                       (reserve_in * 1000 + amount_in * 997)
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, RouterError> {
    if amount_in <= 0 {
        return Err(RouterError::InsufficientInputAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(FEE_MULTIPLIER)
        .ok_or(RouterError::Overflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)
        .and_then(|r| r.checked_add(amount_in_with_fee))
        .ok_or(RouterError::Overflow)?;

    mul_div(env, amount_in_with_fee, reserve_out, denominator).ok_or(RouterError::Overflow)
}

/// Computes input amount required for an exact output swap.
///
/// Formula: amount_in = (reserve_in * amount_out * 1000) /
///                      ((reserve_out - amount_out) * 997) + 1
pub fn get_amount_in(
    env: &Env,
    amount_out: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, RouterError> {
    if amount_out <= 0 {
        return Err(RouterError::InsufficientOutputAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 || amount_out >= reserve_out {
        return Err(RouterError::InsufficientLiquidity);
    }

    let scaled_out = amount_out
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(RouterError::Overflow)?;
    let denominator = (reserve_out - amount_out)
        .checked_mul(FEE_MULTIPLIER)
        .ok_or(RouterError::Overflow)?;

    mul_div(env, reserve_in, scaled_out, denominator)
        .and_then(|amount_in| amount_in.checked_add(1))
        .ok_or(RouterError::Overflow)
}

/// Looks the pair up in the factory registry.
pub fn get_pair_address(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address, RouterError> {
    if token_a == token_b {
        return Err(RouterError::IdenticalTokens);
    }
    FactoryClient::new(env, factory)
        .get_pair(token_a, token_b)
        .ok_or(RouterError::PairNotFound)
}

/// Reserves of the `token_a`/`token_b` pair, in argument order.
pub fn get_reserves(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<(Address, i128, i128), RouterError> {
    let (token_0, _) = sort_tokens(token_a, token_b).ok_or(RouterError::IdenticalTokens)?;
    let pair = get_pair_address(env, factory, token_a, token_b)?;
    let (reserve_0, reserve_1, _) = PairClient::new(env, &pair).get_reserves();

    if *token_a == token_0 {
        Ok((pair, reserve_0, reserve_1))
    } else {
        Ok((pair, reserve_1, reserve_0))
    }
}

/// Consecutive tokens `(path[index], path[index + 1])`.
pub fn hop(path: &Vec<Address>, index: u32) -> Result<(Address, Address), RouterError> {
    let input = path.get(index).ok_or(RouterError::InvalidPath)?;
    let output = path.get(index + 1).ok_or(RouterError::InvalidPath)?;
    Ok((input, output))
}

/// Chains [`get_amount_out`] along `path`; `amounts[0] == amount_in`.
pub fn get_amounts_out(
    env: &Env,
    factory: &Address,
    amount_in: i128,
    path: &Vec<Address>,
) -> Result<Vec<i128>, RouterError> {
    if path.len() < 2 {
        return Err(RouterError::InvalidPath);
    }

    let mut amounts = vec![env, amount_in];
    let mut amount = amount_in;
    for i in 0..path.len() - 1 {
        let (input, output) = hop(path, i)?;
        let (_, reserve_in, reserve_out) = get_reserves(env, factory, &input, &output)?;
        amount = get_amount_out(env, amount, reserve_in, reserve_out)?;
        amounts.push_back(amount);
    }
    Ok(amounts)
}

/// Chains [`get_amount_in`] backwards along `path`; the last entry is `amount_out`.
pub fn get_amounts_in(
    env: &Env,
    factory: &Address,
    amount_out: i128,
    path: &Vec<Address>,
) -> Result<Vec<i128>, RouterError> {
    if path.len() < 2 {
        return Err(RouterError::InvalidPath);
    }

    let mut amounts = vec![env, amount_out];
    let mut amount = amount_out;
    for i in (0..path.len() - 1).rev() {
        let (input, output) = hop(path, i)?;
        let (_, reserve_in, reserve_out) = get_reserves(env, factory, &input, &output)?;
        amount = get_amount_in(env, amount, reserve_in, reserve_out)?;
        amounts.push_front(amount);
    }
    Ok(amounts)
}
