use soroban_sdk::{contracttype, Address, BytesN, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const PERSISTENT_LIFETIME_THRESHOLD: u32 = INSTANCE_LIFETIME_THRESHOLD;
const PERSISTENT_BUMP_AMOUNT: u32 = INSTANCE_BUMP_AMOUNT;

#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryStorage {
    pub pair_wasm_hash: BytesN<32>,
    pub pair_count: u32,
    /// Recipient of the protocol fee; `None` switches the fee off.
    pub fee_to: Option<Address>,
    pub fee_to_setter: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Factory,
    /// Registry entry, written for both token orderings.
    Pair(Address, Address),
    /// Creation-ordered list of pairs.
    AllPairs(u32),
}

pub fn get_factory_storage(env: &Env) -> Option<FactoryStorage> {
    env.storage().instance().get(&DataKey::Factory)
}

pub fn set_factory_storage(env: &Env, storage: &FactoryStorage) {
    env.storage().instance().set(&DataKey::Factory, storage);
}

pub fn has_factory_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Factory)
}

pub fn get_pair(env: &Env, token_a: Address, token_b: Address) -> Option<Address> {
    let key = DataKey::Pair(token_a, token_b);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        extend_persistent_ttl(env, &key);
    }
    pair
}

pub fn set_pair(env: &Env, token_a: Address, token_b: Address, pair: &Address) {
    let key = DataKey::Pair(token_a, token_b);
    env.storage().persistent().set(&key, pair);
    extend_persistent_ttl(env, &key);
}

pub fn get_pair_at(env: &Env, index: u32) -> Option<Address> {
    let key = DataKey::AllPairs(index);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        extend_persistent_ttl(env, &key);
    }
    pair
}

pub fn push_pair(env: &Env, index: u32, pair: &Address) {
    let key = DataKey::AllPairs(index);
    env.storage().persistent().set(&key, pair);
    extend_persistent_ttl(env, &key);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
