use soroban_sdk::Env;

use crate::errors::RouterError;

/// Rejects the call once the ledger timestamp has passed `deadline`.
pub fn ensure_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::Expired);
    }
    Ok(())
}

pub fn ensure_min_output(amount_out: i128, amount_out_min: i128) -> Result<(), RouterError> {
    if amount_out < amount_out_min {
        return Err(RouterError::InsufficientOutputAmount);
    }
    Ok(())
}

pub fn ensure_max_input(amount_in: i128, amount_in_max: i128) -> Result<(), RouterError> {
    if amount_in > amount_in_max {
        return Err(RouterError::ExcessiveInputAmount);
    }
    Ok(())
}

/// Slippage bounds on both legs of a liquidity operation.
pub fn ensure_min_amounts(
    amount_a: i128,
    amount_a_min: i128,
    amount_b: i128,
    amount_b_min: i128,
) -> Result<(), RouterError> {
    if amount_a < amount_a_min {
        return Err(RouterError::InsufficientAAmount);
    }
    if amount_b < amount_b_min {
        return Err(RouterError::InsufficientBAmount);
    }
    Ok(())
}

/// Caller-supplied amounts and bounds must not be negative.
pub fn ensure_non_negative(amounts: &[i128]) -> Result<(), RouterError> {
    if amounts.iter().any(|amount| *amount < 0) {
        return Err(RouterError::NegativeAmount);
    }
    Ok(())
}
