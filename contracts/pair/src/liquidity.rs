use driftswap_interface::zero_address;
use driftswap_math::{mul_div, product, sqrt_product, MINIMUM_LIQUIDITY};
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{
    errors::PairError,
    events::PairEvents,
    oracle, protocol_fee, reentrancy,
    storage::{get_pair_state, set_pair_state, PairStorage},
};

/// Current token balances held by the pair.
pub fn token_balances(env: &Env, state: &PairStorage) -> (i128, i128) {
    let contract = env.current_contract_address();
    (
        TokenClient::new(env, &state.token_0).balance(&contract),
        TokenClient::new(env, &state.token_1).balance(&contract),
    )
}

/// Mints liquidity for the tokens deposited since the last reserve update.
///
/// The caller transfers both tokens to the pair first; the deposit is read as
/// `balance - reserve`. The first provider receives
/// `sqrt(amount_0 * amount_1) - MINIMUM_LIQUIDITY` and the minimum liquidity
/// is locked forever with the zero address. Later providers receive the
/// smaller of their two proportional shares, so depositing off-ratio donates
/// the excess to existing holders.
pub fn mint(env: &Env, to: &Address) -> Result<i128, PairError> {
    let mut state = get_pair_state(env).ok_or(PairError::NotInitialized)?;
    reentrancy::acquire(env)?;

    let (balance_0, balance_1) = token_balances(env, &state);
    let amount_0 = balance_0
        .checked_sub(state.reserve_0)
        .ok_or(PairError::Overflow)?;
    let amount_1 = balance_1
        .checked_sub(state.reserve_1)
        .ok_or(PairError::Overflow)?;
    if amount_0 < 0 || amount_1 < 0 {
        return Err(PairError::InsufficientLiquidityMinted);
    }

    let fee_on = protocol_fee::mint_fee(env, &mut state)?;
    // Read after `mint_fee`, which may have grown the supply.
    let total_supply = driftswap_lp_token::total_supply(env);

    let liquidity = if total_supply == 0 {
        let root = sqrt_product(env, amount_0, amount_1).ok_or(PairError::Overflow)?;
        if root <= MINIMUM_LIQUIDITY {
            return Err(PairError::InsufficientLiquidityMinted);
        }
        driftswap_lp_token::mint(env, &zero_address(env), MINIMUM_LIQUIDITY)?;
        root - MINIMUM_LIQUIDITY
    } else {
        let share_0 =
            mul_div(env, amount_0, total_supply, state.reserve_0).ok_or(PairError::Overflow)?;
        let share_1 =
            mul_div(env, amount_1, total_supply, state.reserve_1).ok_or(PairError::Overflow)?;
        share_0.min(share_1)
    };

    if liquidity <= 0 {
        return Err(PairError::InsufficientLiquidityMinted);
    }
    driftswap_lp_token::mint(env, to, liquidity)?;

    oracle::update(env, &mut state, balance_0, balance_1)?;
    if fee_on {
        state.k_last = product(env, state.reserve_0, state.reserve_1).ok_or(PairError::Overflow)?;
    }
    set_pair_state(env, &state);

    PairEvents::mint(env, to, amount_0, amount_1, liquidity);
    reentrancy::release(env);
    Ok(liquidity)
}

/// Burns the liquidity tokens held by the pair itself and sends the
/// proportional share of both balances to `to`.
///
/// The caller transfers its liquidity tokens to the pair first.
pub fn burn(env: &Env, to: &Address) -> Result<(i128, i128), PairError> {
    let mut state = get_pair_state(env).ok_or(PairError::NotInitialized)?;
    reentrancy::acquire(env)?;

    let contract = env.current_contract_address();
    let (balance_0, balance_1) = token_balances(env, &state);
    let liquidity = driftswap_lp_token::balance(env, &contract);

    let fee_on = protocol_fee::mint_fee(env, &mut state)?;
    let total_supply = driftswap_lp_token::total_supply(env);
    if total_supply == 0 {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    // Pro-rata over balances, so any surplus goes to the burner too.
    let amount_0 = mul_div(env, liquidity, balance_0, total_supply).ok_or(PairError::Overflow)?;
    let amount_1 = mul_div(env, liquidity, balance_1, total_supply).ok_or(PairError::Overflow)?;
    if amount_0 <= 0 || amount_1 <= 0 {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    driftswap_lp_token::burn(env, &contract, liquidity)?;
    TokenClient::new(env, &state.token_0).transfer(&contract, to, &amount_0);
    TokenClient::new(env, &state.token_1).transfer(&contract, to, &amount_1);

    let (balance_0, balance_1) = token_balances(env, &state);
    oracle::update(env, &mut state, balance_0, balance_1)?;
    if fee_on {
        state.k_last = product(env, state.reserve_0, state.reserve_1).ok_or(PairError::Overflow)?;
    }
    set_pair_state(env, &state);

    PairEvents::burn(env, to, amount_0, amount_1, liquidity);
    reentrancy::release(env);
    Ok((amount_0, amount_1))
}
