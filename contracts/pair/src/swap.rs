use driftswap_interface::SwapCalleeClient;
use driftswap_math::{product, FEE_CHARGE, FEE_DENOMINATOR};
use soroban_sdk::{token::TokenClient, Address, Bytes, Env, U256};

use crate::{
    errors::PairError,
    events::PairEvents,
    liquidity::token_balances,
    oracle, reentrancy,
    storage::{get_pair_state, set_pair_state},
};

/// Input amount implied by a post-swap balance: whatever exceeds the reserve
/// left behind after the output was paid.
fn amount_in(balance: i128, reserve: i128, amount_out: i128) -> i128 {
    let remaining = reserve - amount_out;
    if balance > remaining {
        balance - remaining
    } else {
        0
    }
}

/// `balance * 1000 - amount_in * 3`
fn adjusted_balance(balance: i128, amount_in: i128) -> Result<i128, PairError> {
    balance
        .checked_mul(FEE_DENOMINATOR)
        .and_then(|b| b.checked_sub(amount_in.checked_mul(FEE_CHARGE)?))
        .ok_or(PairError::Overflow)
}

/// Fee-adjusted constant product check:
/// `(b0 * 1000 - in0 * 3) * (b1 * 1000 - in1 * 3) >= r0 * r1 * 1000^2`.
pub fn check_k(
    env: &Env,
    balance_0: i128,
    balance_1: i128,
    amount_0_in: i128,
    amount_1_in: i128,
    reserve_0: i128,
    reserve_1: i128,
) -> Result<(), PairError> {
    let adjusted_0 = adjusted_balance(balance_0, amount_0_in)?;
    let adjusted_1 = adjusted_balance(balance_1, amount_1_in)?;

    let k_after = product(env, adjusted_0, adjusted_1).ok_or(PairError::Overflow)?;
    let scale = U256::from_u128(env, (FEE_DENOMINATOR * FEE_DENOMINATOR) as u128);
    let k_before = product(env, reserve_0, reserve_1)
        .ok_or(PairError::Overflow)?
        .mul(&scale);

    if k_after < k_before {
        return Err(PairError::InvalidK);
    }
    Ok(())
}

/// Pays out the requested amounts and verifies that enough input arrived to
/// keep the fee-adjusted product from shrinking.
///
/// Outputs are sent before the input is checked. With non-empty `data`, `to`
/// is invoked as a [`SwapCallee`](driftswap_interface::SwapCallee) in between
/// and may repay with either token (flash swap).
pub fn swap(
    env: &Env,
    amount_0_out: i128,
    amount_1_out: i128,
    to: &Address,
    data: &Bytes,
) -> Result<(), PairError> {
    if amount_0_out < 0 || amount_1_out < 0 || (amount_0_out == 0 && amount_1_out == 0) {
        return Err(PairError::InsufficientOutputAmount);
    }

    let mut state = get_pair_state(env).ok_or(PairError::NotInitialized)?;
    reentrancy::acquire(env)?;

    let (reserve_0, reserve_1) = (state.reserve_0, state.reserve_1);
    if amount_0_out >= reserve_0 || amount_1_out >= reserve_1 {
        return Err(PairError::InsufficientLiquidity);
    }
    if *to == state.token_0 || *to == state.token_1 {
        return Err(PairError::InvalidRecipient);
    }

    let contract = env.current_contract_address();
    if amount_0_out > 0 {
        TokenClient::new(env, &state.token_0).transfer(&contract, to, &amount_0_out);
    }
    if amount_1_out > 0 {
        TokenClient::new(env, &state.token_1).transfer(&contract, to, &amount_1_out);
    }
    if !data.is_empty() {
        SwapCalleeClient::new(env, to).swap_call(&contract, &amount_0_out, &amount_1_out, data);
    }

    let (balance_0, balance_1) = token_balances(env, &state);
    let amount_0_in = amount_in(balance_0, reserve_0, amount_0_out);
    let amount_1_in = amount_in(balance_1, reserve_1, amount_1_out);
    if amount_0_in == 0 && amount_1_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }

    check_k(env, balance_0, balance_1, amount_0_in, amount_1_in, reserve_0, reserve_1)?;

    oracle::update(env, &mut state, balance_0, balance_1)?;
    set_pair_state(env, &state);

    PairEvents::swap(env, amount_0_in, amount_1_in, amount_0_out, amount_1_out, to);
    reentrancy::release(env);
    Ok(())
}

/// Sends any balance above the reserves to `to`.
pub fn skim(env: &Env, to: &Address) -> Result<(), PairError> {
    let state = get_pair_state(env).ok_or(PairError::NotInitialized)?;
    reentrancy::acquire(env)?;

    let contract = env.current_contract_address();
    let (balance_0, balance_1) = token_balances(env, &state);
    let surplus_0 = balance_0 - state.reserve_0;
    let surplus_1 = balance_1 - state.reserve_1;
    if surplus_0 > 0 {
        TokenClient::new(env, &state.token_0).transfer(&contract, to, &surplus_0);
    }
    if surplus_1 > 0 {
        TokenClient::new(env, &state.token_1).transfer(&contract, to, &surplus_1);
    }

    reentrancy::release(env);
    Ok(())
}

/// Forces the reserves to match the current balances.
pub fn sync(env: &Env) -> Result<(), PairError> {
    let mut state = get_pair_state(env).ok_or(PairError::NotInitialized)?;
    reentrancy::acquire(env)?;

    let (balance_0, balance_1) = token_balances(env, &state);
    oracle::update(env, &mut state, balance_0, balance_1)?;
    set_pair_state(env, &state);

    reentrancy::release(env);
    Ok(())
}
