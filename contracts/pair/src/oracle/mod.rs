use driftswap_math::{uq112_div, wrapping_add, MAX_RESERVE};
use soroban_sdk::{Env, U256};

use crate::{errors::PairError, events::PairEvents, storage::PairStorage};

// Cumulative price oracle (TWAP support).
// An external reader samples `price_x_cumulative_last` at two timestamps and
// divides the difference by the elapsed seconds to obtain the average price.

/// Ledger timestamp truncated to 32 bits; accumulators use wrapping time deltas.
pub fn current_block_timestamp(env: &Env) -> u32 {
    (env.ledger().timestamp() % (1_u64 << 32)) as u32
}

/// Advances both cumulative price accumulators by the reserves that were in
/// force during the elapsed interval.
pub fn update_cumulative_prices(
    env: &Env,
    reserve_0: i128,
    reserve_1: i128,
    time_elapsed: u32,
    price_0_cumulative: &mut U256,
    price_1_cumulative: &mut U256,
) -> Result<(), PairError> {
    let elapsed = U256::from_u32(env, time_elapsed);

    // price_0_cumulative += (reserve_1 / reserve_0) * time_elapsed
    let price_0 = uq112_div(env, reserve_1, reserve_0).ok_or(PairError::Overflow)?;
    *price_0_cumulative = wrapping_add(env, price_0_cumulative, &price_0.mul(&elapsed));

    // price_1_cumulative += (reserve_0 / reserve_1) * time_elapsed
    let price_1 = uq112_div(env, reserve_0, reserve_1).ok_or(PairError::Overflow)?;
    *price_1_cumulative = wrapping_add(env, price_1_cumulative, &price_1.mul(&elapsed));

    Ok(())
}

/// Overwrites the reserves with fresh balances, first folding the previous
/// reserves into the price accumulators for the time they were in force.
pub fn update(
    env: &Env,
    state: &mut PairStorage,
    balance_0: i128,
    balance_1: i128,
) -> Result<(), PairError> {
    if !(0..=MAX_RESERVE).contains(&balance_0) || !(0..=MAX_RESERVE).contains(&balance_1) {
        return Err(PairError::Overflow);
    }

    let block_timestamp = current_block_timestamp(env);
    let time_elapsed = block_timestamp.wrapping_sub(state.block_timestamp_last);

    if time_elapsed > 0 && state.reserve_0 != 0 && state.reserve_1 != 0 {
        update_cumulative_prices(
            env,
            state.reserve_0,
            state.reserve_1,
            time_elapsed,
            &mut state.price_0_cumulative_last,
            &mut state.price_1_cumulative_last,
        )?;
    }

    state.reserve_0 = balance_0;
    state.reserve_1 = balance_1;
    state.block_timestamp_last = block_timestamp;

    PairEvents::sync(env, balance_0, balance_1);
    Ok(())
}
