use soroban_sdk::{contracttype, Address, Env, U256};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairStorage {
    pub factory: Address,
    pub token_0: Address,
    pub token_1: Address,
    pub reserve_0: i128,
    pub reserve_1: i128,
    /// Ledger timestamp of the last reserve update, modulo 2^32.
    pub block_timestamp_last: u32,
    /// UQ112.112 running sum of `reserve_1 / reserve_0` weighted by seconds.
    pub price_0_cumulative_last: U256,
    /// UQ112.112 running sum of `reserve_0 / reserve_1` weighted by seconds.
    pub price_1_cumulative_last: U256,
    /// `reserve_0 * reserve_1` after the latest liquidity event (protocol fee only).
    pub k_last: U256,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    PairState,
    ReentrancyGuard,
}

pub fn has_pair_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PairState)
}

pub fn get_pair_state(env: &Env) -> Option<PairStorage> {
    env.storage().instance().get(&DataKey::PairState)
}

pub fn set_pair_state(env: &Env, state: &PairStorage) {
    env.storage().instance().set(&DataKey::PairState, state);
}

pub fn get_reentrancy_guard(env: &Env) -> ReentrancyGuard {
    env.storage()
        .instance()
        .get(&DataKey::ReentrancyGuard)
        .unwrap_or(ReentrancyGuard { locked: false })
}

pub fn set_reentrancy_guard(env: &Env, guard: &ReentrancyGuard) {
    env.storage().instance().set(&DataKey::ReentrancyGuard, guard);
}

/// Extend instance storage TTL to keep the pair alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
