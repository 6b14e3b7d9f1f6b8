use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Sentinel allowance that is never decremented by `transfer_from`.
pub const INFINITE_ALLOWANCE: i128 = i128::MAX;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum LpTokenKey {
    Balance(Address),
    Allowance(Address, Address),
    TotalSupply,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&LpTokenKey::TotalSupply)
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&LpTokenKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&LpTokenKey::TotalSupply, &amount);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = LpTokenKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = LpTokenKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Reads an allowance; an expired entry reads as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger >= env.ledger().sequence() => entry,
        Some(entry) => AllowanceEntry { amount: 0, expiration_ledger: entry.expiration_ledger },
        None => AllowanceEntry { amount: 0, expiration_ledger: 0 },
    }
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, entry: &AllowanceEntry) {
    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, entry);

    if entry.amount > 0 {
        // Outlive the expiration ledger; `read_allowance` zeroes expired entries.
        let live_for = entry
            .expiration_ledger
            .saturating_sub(env.ledger().sequence())
            .max(DAY_IN_LEDGERS);
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
