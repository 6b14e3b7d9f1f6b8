//! Integer arithmetic helpers for reserve, liquidity and price calculations.
//!
//! Amounts are `i128` (the SEP-41 amount width) and are never negative once
//! they reach this crate. Products of two reserves can exceed `i128`, so
//! they are widened into the host `U256` type; every narrowing conversion is
//! checked and reports failure as `None`, which callers map onto their own
//! `Overflow` error.
#![no_std]

use soroban_sdk::{Env, U256};


/// Minimum liquidity locked on first mint so total supply never returns to zero.
pub const MINIMUM_LIQUIDITY: i128 = 1_000;
/// Reserves are bounded to 112 bits so that `reserve * reserve * 1000^2` fits in 256 bits.
pub const MAX_RESERVE: i128 = (1_i128 << 112) - 1;
/// Fixed-point resolution of the cumulative price accumulators (UQ112.112).
pub const RESOLUTION: u32 = 112;
/// Fee denominator; the 0.3% swap fee is expressed in thousandths.
pub const FEE_DENOMINATOR: i128 = 1_000;
/// `FEE_DENOMINATOR` minus the 0.3% fee.
pub const FEE_MULTIPLIER: i128 = 997;
/// `FEE_DENOMINATOR - FEE_MULTIPLIER`, charged on the input side of a swap.
pub const FEE_CHARGE: i128 = FEE_DENOMINATOR - FEE_MULTIPLIER;
/// Weight of `root_k` in the protocol fee denominator, giving a 1/6 skim of growth.
pub const PROTOCOL_FEE_DIVISOR: i128 = 5;

/// Computes the floor square root using Newton's method.
pub fn sqrt(value: u128) -> u128 {
    if value > 3 {
        let mut z = value;
        let mut x = value / 2 + 1;
        while x < z {
            z = x;
            x = (value / x + x) / 2;
        }
        z
    } else if value != 0 {
        1
    } else {
        0
    }
}

/// Floor square root of a 256-bit value. Values that fit in `u128` take the
/// native path; the iteration is otherwise identical to [`sqrt`].
pub fn sqrt_u256(env: &Env, value: &U256) -> U256 {
    if let Some(narrow) = value.to_u128() {
        return U256::from_u128(env, sqrt(narrow));
    }

    let one = U256::from_u32(env, 1);
    let mut z = value.clone();
    let mut x = value.shr(1).add(&one);
    while x < z {
        z = x.clone();
        x = value.div(&x).add(&x).shr(1);
    }
    z
}

/// Widens a non-negative `i128` into `U256`.
pub fn to_u256(env: &Env, value: i128) -> Option<U256> {
    if value < 0 {
        return None;
    }
    Some(U256::from_u128(env, value as u128))
}

/// Narrows a `U256` back into a non-negative `i128`.
pub fn from_u256(value: &U256) -> Option<i128> {
    value.to_u128().and_then(|v| i128::try_from(v).ok())
}

/// Product of two non-negative amounts without overflow.
pub fn product(env: &Env, a: i128, b: i128) -> Option<U256> {
    Some(to_u256(env, a)?.mul(&to_u256(env, b)?))
}

/// `floor(sqrt(a * b))` for two non-negative amounts.
pub fn sqrt_product(env: &Env, a: i128, b: i128) -> Option<i128> {
    from_u256(&sqrt_u256(env, &product(env, a, b)?))
}

/// Multiplies `a * b` and divides by `denominator`, rounding down, using a
/// 256-bit intermediate so large reserves do not overflow.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator <= 0 {
        return None;
    }
    let numerator = product(env, a, b)?;
    from_u256(&numerator.div(&to_u256(env, denominator)?))
}

/// Encodes `numerator / denominator` as an unsigned UQ112.112 fixed-point value.
pub fn uq112_div(env: &Env, numerator: i128, denominator: i128) -> Option<U256> {
    if denominator <= 0 {
        return None;
    }
    Some(to_u256(env, numerator)?.shl(RESOLUTION).div(&to_u256(env, denominator)?))
}

/// Addition modulo 2^256. Cumulative prices are only meaningful as
/// differences, so overflow wraps instead of failing.
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let max = U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
    let headroom = max.sub(a);
    if *b > headroom {
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}
