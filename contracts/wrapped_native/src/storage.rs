use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Native,
}

pub fn get_native(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Native)
}

pub fn set_native(env: &Env, native: &Address) {
    env.storage().instance().set(&DataKey::Native, native);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
