use soroban_sdk::{symbol_short, Address, Env};

pub struct WrappedNativeEvents;

impl WrappedNativeEvents {
    pub fn deposit(env: &Env, from: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("deposit"), from.clone()), amount);
    }

    pub fn withdraw(env: &Env, from: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("withdraw"), from.clone()), amount);
    }
}
