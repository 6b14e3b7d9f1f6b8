use soroban_sdk::{Address, BytesN, Env};

/// Deploys a pair from the uploaded Wasm at the address derived from `salt`.
#[cfg(not(any(test, feature = "testutils")))]
pub fn deploy_pair(env: &Env, pair_wasm_hash: &BytesN<32>, salt: BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(salt)
        .deploy(pair_wasm_hash.clone())
}

/// Registers the native pair contract at the address the Wasm deployment
/// would produce, so tests need no prebuilt Wasm.
#[cfg(any(test, feature = "testutils"))]
pub fn deploy_pair(env: &Env, _pair_wasm_hash: &BytesN<32>, salt: BytesN<32>) -> Address {
    let address = env
        .deployer()
        .with_current_contract(salt)
        .deployed_address();
    env.register_contract(Some(&address), driftswap_pair::Pair);
    address
}
