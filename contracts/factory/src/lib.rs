#![no_std]

//! Registry of trading pairs.
//!
//! Each unordered token couple maps to at most one pair, deployed at an
//! address derived from the sorted tokens so that routers can compute it
//! without a registry read. The factory also owns the protocol fee switch
//! consulted by every pair.

#[cfg(test)]
extern crate std;

mod deploy;
mod errors;
mod events;
mod storage;

#[cfg(test)]
mod test;

pub use errors::FactoryError;

use driftswap_interface::{pair_salt, sort_tokens, zero_address, PairClient};
use events::FactoryEvents;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use storage::{extend_instance_ttl, FactoryStorage};

fn load_storage(env: &Env) -> Result<FactoryStorage, FactoryError> {
    storage::get_factory_storage(env).ok_or(FactoryError::NotInitialized)
}

/// Loads the configuration after checking `caller` is the fee setter.
fn authorize_setter(env: &Env, caller: &Address) -> Result<FactoryStorage, FactoryError> {
    caller.require_auth();
    let factory_storage = load_storage(env)?;
    if *caller != factory_storage.fee_to_setter {
        return Err(FactoryError::Forbidden);
    }
    Ok(factory_storage)
}

#[contract]
pub struct Factory;

#[contractimpl]
impl Factory {
    pub fn initialize(
        env: Env,
        fee_to_setter: Address,
        pair_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        if storage::has_factory_storage(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let factory_storage = FactoryStorage {
            pair_wasm_hash,
            pair_count: 0,
            fee_to: None,
            fee_to_setter,
        };

        storage::set_factory_storage(&env, &factory_storage);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Deploys and registers the pair for `token_a`/`token_b` (either order).
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, FactoryError> {
        let (token_0, token_1) =
            sort_tokens(&token_a, &token_b).ok_or(FactoryError::IdenticalTokens)?;

        let zero = zero_address(&env);
        if token_0 == zero || token_1 == zero {
            return Err(FactoryError::ZeroToken);
        }

        let mut factory_storage = load_storage(&env)?;

        if storage::get_pair(&env, token_0.clone(), token_1.clone()).is_some() {
            return Err(FactoryError::PairExists);
        }

        // 1. Deploy pair at its deterministic address
        let salt = pair_salt(&env, &token_0, &token_1);
        let pair_address = deploy::deploy_pair(&env, &factory_storage.pair_wasm_hash, salt);

        // 2. Initialize pair
        PairClient::new(&env, &pair_address).initialize(
            &env.current_contract_address(),
            &token_0,
            &token_1,
        );

        // 3. Store pair
        storage::set_pair(&env, token_0.clone(), token_1.clone(), &pair_address);
        storage::set_pair(&env, token_1.clone(), token_0.clone(), &pair_address);

        let pair_index = factory_storage.pair_count;
        storage::push_pair(&env, pair_index, &pair_address);
        factory_storage.pair_count += 1;
        storage::set_factory_storage(&env, &factory_storage);
        extend_instance_ttl(&env);

        // 4. Emit event
        FactoryEvents::pair_created(&env, &token_0, &token_1, &pair_address, pair_index);

        Ok(pair_address)
    }

    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        storage::get_pair(&env, token_a, token_b)
    }

    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        storage::get_pair_at(&env, index)
    }

    pub fn all_pairs_length(env: Env) -> u32 {
        storage::get_factory_storage(&env)
            .map(|s| s.pair_count)
            .unwrap_or(0)
    }

    pub fn pair_wasm_hash(env: Env) -> Result<BytesN<32>, FactoryError> {
        Ok(load_storage(&env)?.pair_wasm_hash)
    }

    // -----------------------------------------------------------------------
    // Protocol fee switch
    // -----------------------------------------------------------------------

    pub fn fee_to(env: Env) -> Option<Address> {
        storage::get_factory_storage(&env).and_then(|s| s.fee_to)
    }

    pub fn fee_to_setter(env: Env) -> Result<Address, FactoryError> {
        Ok(load_storage(&env)?.fee_to_setter)
    }

    /// Turns the protocol fee on (`Some(recipient)`) or off (`None`).
    pub fn set_fee_to(
        env: Env,
        caller: Address,
        fee_to: Option<Address>,
    ) -> Result<(), FactoryError> {
        let mut factory_storage = authorize_setter(&env, &caller)?;
        factory_storage.fee_to = fee_to;
        storage::set_factory_storage(&env, &factory_storage);
        extend_instance_ttl(&env);

        FactoryEvents::fee_to_changed(&env, &factory_storage.fee_to);
        Ok(())
    }

    pub fn set_fee_to_setter(
        env: Env,
        caller: Address,
        new_setter: Address,
    ) -> Result<(), FactoryError> {
        let mut factory_storage = authorize_setter(&env, &caller)?;
        factory_storage.fee_to_setter = new_setter;
        storage::set_factory_storage(&env, &factory_storage);
        extend_instance_ttl(&env);

        FactoryEvents::fee_to_setter_changed(&env, &factory_storage.fee_to_setter);
        Ok(())
    }
}
