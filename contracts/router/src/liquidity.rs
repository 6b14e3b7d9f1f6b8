use driftswap_interface::{sort_tokens, FactoryClient, PairClient};
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{
    errors::RouterError,
    guard::ensure_min_amounts,
    helpers::{get_pair_address, get_reserves, quote},
};

/// Deposit amounts for an `add_liquidity` call and the pair receiving them.
///
/// Creates the pair if it does not exist yet. An empty pair takes both
/// desired amounts as-is; otherwise one side is reduced to match the pool
/// price, and the reduced side must stay above its minimum.
#[allow(clippy::too_many_arguments)]
pub fn add_liquidity_amounts(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
) -> Result<(Address, i128, i128), RouterError> {
    sort_tokens(token_a, token_b).ok_or(RouterError::IdenticalTokens)?;

    let factory_client = FactoryClient::new(env, factory);
    if factory_client.get_pair(token_a, token_b).is_none() {
        factory_client.create_pair(token_a, token_b);
    }

    let (pair, reserve_a, reserve_b) = get_reserves(env, factory, token_a, token_b)?;
    if reserve_a == 0 && reserve_b == 0 {
        return Ok((pair, amount_a_desired, amount_b_desired));
    }

    let amount_b_optimal = quote(env, amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        ensure_min_amounts(amount_a_desired, amount_a_min, amount_b_optimal, amount_b_min)?;
        return Ok((pair, amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = quote(env, amount_b_desired, reserve_b, reserve_a)?;
    // amount_a_optimal <= amount_a_desired holds: price is monotonic
    ensure_min_amounts(amount_a_optimal, amount_a_min, amount_b_desired, amount_b_min)?;
    Ok((pair, amount_a_optimal, amount_b_desired))
}

/// Transfers both deposits from `from` into `pair` and mints the liquidity to `to`.
#[allow(clippy::too_many_arguments)]
pub fn deposit_and_mint(
    env: &Env,
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
    amount_a: i128,
    amount_b: i128,
    from: &Address,
    to: &Address,
) -> i128 {
    TokenClient::new(env, token_a).transfer(from, pair, &amount_a);
    TokenClient::new(env, token_b).transfer(from, pair, &amount_b);
    PairClient::new(env, pair).mint(to)
}

/// Returns `liquidity` from `to` to its pair and pays both tokens out to `to`,
/// in argument order.
#[allow(clippy::too_many_arguments)]
pub fn remove_liquidity(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
    liquidity: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    to: &Address,
) -> Result<(i128, i128), RouterError> {
    let (token_0, _) = sort_tokens(token_a, token_b).ok_or(RouterError::IdenticalTokens)?;
    let pair = get_pair_address(env, factory, token_a, token_b)?;

    // The pair is its own liquidity token
    TokenClient::new(env, &pair).transfer(to, &pair, &liquidity);
    let (amount_0, amount_1) = PairClient::new(env, &pair).burn(to);

    let (amount_a, amount_b) = if *token_a == token_0 {
        (amount_0, amount_1)
    } else {
        (amount_1, amount_0)
    };
    ensure_min_amounts(amount_a, amount_a_min, amount_b, amount_b_min)?;
    Ok((amount_a, amount_b))
}
