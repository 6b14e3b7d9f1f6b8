use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

/// The all-zero Stellar account. Never a valid token; holds the locked
/// minimum liquidity of every pair.
pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}

/// Sorts two tokens into canonical `(token_0, token_1)` order.
/// Returns `None` for identical tokens, which can never form a pair.
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> Option<(Address, Address)> {
    if token_a == token_b {
        return None;
    }
    if token_a < token_b {
        Some((token_a.clone(), token_b.clone()))
    } else {
        Some((token_b.clone(), token_a.clone()))
    }
}

/// Deployment salt of the pair for an already sorted token couple:
/// `sha256(xdr(token_0) || xdr(token_1))`.
pub fn pair_salt(env: &Env, token_0: &Address, token_1: &Address) -> BytesN<32> {
    let mut salt_data = Bytes::new(env);
    salt_data.append(&token_0.clone().to_xdr(env));
    salt_data.append(&token_1.clone().to_xdr(env));
    env.crypto().sha256(&salt_data).into()
}

/// Address the factory deploys (or deployed) the pair for `token_a`/`token_b`
/// at. Computed locally, without reading the registry.
pub fn pair_address(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Option<Address> {
    let (token_0, token_1) = sort_tokens(token_a, token_b)?;
    let salt = pair_salt(env, &token_0, &token_1);
    Some(env.deployer().with_address(factory.clone(), salt).deployed_address())
}
