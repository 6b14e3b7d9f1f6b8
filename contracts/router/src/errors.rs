use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    Expired = 300,
    InsufficientOutputAmount = 301,
    ExcessiveInputAmount = 302,
    InvalidPath = 303,
    PairNotFound = 304,
    IdenticalTokens = 305,
    InsufficientAmount = 306,
    InsufficientLiquidity = 307,
    InsufficientAAmount = 308,
    InsufficientBAmount = 309,
    InsufficientInputAmount = 310,
    NegativeAmount = 311,
    Overflow = 312,
    AlreadyInitialized = 313,
    NotInitialized = 314,
}
