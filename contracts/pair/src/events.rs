use soroban_sdk::{symbol_short, Address, Env};

pub struct PairEvents;

impl PairEvents {
    /// Emits a `swap` event after a successful token swap.
    ///
    /// Topics: `("swap", to)`
    /// Data:   `(amount_0_in, amount_1_in, amount_0_out, amount_1_out)`
    pub fn swap(
        env: &Env,
        amount_0_in: i128,
        amount_1_in: i128,
        amount_0_out: i128,
        amount_1_out: i128,
        to: &Address,
    ) {
        env.events().publish(
            (symbol_short!("swap"), to.clone()),
            (amount_0_in, amount_1_in, amount_0_out, amount_1_out),
        );
    }

    pub fn mint(env: &Env, to: &Address, amount_0: i128, amount_1: i128, liquidity: i128) {
        env.events()
            .publish((symbol_short!("mint"), to.clone()), (amount_0, amount_1, liquidity));
    }

    pub fn burn(env: &Env, to: &Address, amount_0: i128, amount_1: i128, liquidity: i128) {
        env.events()
            .publish((symbol_short!("burn"), to.clone()), (amount_0, amount_1, liquidity));
    }

    pub fn sync(env: &Env, reserve_0: i128, reserve_1: i128) {
        env.events().publish((symbol_short!("sync"),), (reserve_0, reserve_1));
    }
}
