use driftswap_interface::FactoryClient;
use driftswap_math::{from_u256, mul_div, sqrt_product, sqrt_u256, PROTOCOL_FEE_DIVISOR};
use soroban_sdk::{Env, U256};

use crate::{errors::PairError, storage::PairStorage};

/// Mints the protocol's share of accrued swap fees to the factory's `fee_to`.
///
/// Growth in `sqrt(k)` since the last liquidity event is the fee income of
/// liquidity providers. With the switch on, `fee_to` receives liquidity worth
/// 1/6 of that growth:
///
/// `liquidity = supply * (root_k - root_k_last) / (5 * root_k + root_k_last)`
///
/// Must run before the caller reads total supply, using the reserves from
/// before the current mutation. Returns whether the fee switch is on; when it
/// is off, a stale `k_last` is cleared.
pub fn mint_fee(env: &Env, state: &mut PairStorage) -> Result<bool, PairError> {
    let fee_to = FactoryClient::new(env, &state.factory).fee_to();
    let zero = U256::from_u32(env, 0);

    let Some(fee_to) = fee_to else {
        if state.k_last != zero {
            state.k_last = zero;
        }
        return Ok(false);
    };

    if state.k_last != zero {
        let root_k = sqrt_product(env, state.reserve_0, state.reserve_1).ok_or(PairError::Overflow)?;
        let root_k_last = from_u256(&sqrt_u256(env, &state.k_last)).ok_or(PairError::Overflow)?;

        if root_k > root_k_last {
            let total_supply = driftswap_lp_token::total_supply(env);
            let denominator = root_k
                .checked_mul(PROTOCOL_FEE_DIVISOR)
                .and_then(|d| d.checked_add(root_k_last))
                .ok_or(PairError::Overflow)?;
            let liquidity = mul_div(env, total_supply, root_k - root_k_last, denominator)
                .ok_or(PairError::Overflow)?;

            if liquidity > 0 {
                driftswap_lp_token::mint(env, &fee_to, liquidity)?;
            }
        }
    }

    Ok(true)
}
