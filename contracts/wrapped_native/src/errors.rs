use driftswap_lp_token::LpTokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WrappedNativeError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InsufficientBalance = 402,
    NegativeAmount = 403,
    Overflow = 404,
    /// Ledger failure with no wrapper-level equivalent.
    Ledger = 405,
}

impl From<LpTokenError> for WrappedNativeError {
    fn from(err: LpTokenError) -> Self {
        match err {
            LpTokenError::AlreadyInitialized => WrappedNativeError::AlreadyInitialized,
            LpTokenError::NotInitialized => WrappedNativeError::NotInitialized,
            LpTokenError::InsufficientBalance => WrappedNativeError::InsufficientBalance,
            LpTokenError::NegativeAmount => WrappedNativeError::NegativeAmount,
            LpTokenError::Overflow => WrappedNativeError::Overflow,
            LpTokenError::InsufficientAllowance | LpTokenError::InvalidExpiration => {
                WrappedNativeError::Ledger
            }
        }
    }
}
