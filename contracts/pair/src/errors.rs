use driftswap_lp_token::LpTokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InsufficientLiquidity = 102,
    InsufficientInputAmount = 103,
    InsufficientOutputAmount = 104,
    InvalidK = 105,
    Locked = 106,
    InvalidRecipient = 107,
    Overflow = 108,
    InsufficientLiquidityMinted = 109,
    InsufficientLiquidityBurned = 110,
    /// Liquidity token ledger failure with no pair-level equivalent.
    LiquidityToken = 111,
}

impl From<LpTokenError> for PairError {
    fn from(err: LpTokenError) -> Self {
        match err {
            LpTokenError::AlreadyInitialized => PairError::AlreadyInitialized,
            LpTokenError::NotInitialized => PairError::NotInitialized,
            LpTokenError::InsufficientBalance => PairError::InsufficientLiquidityBurned,
            LpTokenError::Overflow => PairError::Overflow,
            LpTokenError::InsufficientAllowance
            | LpTokenError::NegativeAmount
            | LpTokenError::InvalidExpiration => PairError::LiquidityToken,
        }
    }
}
