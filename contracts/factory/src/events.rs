use soroban_sdk::{symbol_short, Address, Env};

pub struct FactoryEvents;

impl FactoryEvents {
    /// Topics: `("new_pair", token_0, token_1)`
    /// Data:   `(pair, pair_index)`
    pub fn pair_created(
        env: &Env,
        token_0: &Address,
        token_1: &Address,
        pair: &Address,
        pair_index: u32,
    ) {
        env.events().publish(
            (symbol_short!("new_pair"), token_0.clone(), token_1.clone()),
            (pair.clone(), pair_index),
        );
    }

    pub fn fee_to_changed(env: &Env, fee_to: &Option<Address>) {
        env.events().publish((symbol_short!("fee_to"),), fee_to.clone());
    }

    pub fn fee_to_setter_changed(env: &Env, fee_to_setter: &Address) {
        env.events()
            .publish((symbol_short!("setter"),), fee_to_setter.clone());
    }
}
