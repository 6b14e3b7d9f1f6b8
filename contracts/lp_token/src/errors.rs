use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LpTokenError {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    InsufficientBalance = 202,
    InsufficientAllowance = 203,
    Overflow = 204,
    NegativeAmount = 205,
    InvalidExpiration = 206,
}
