#![cfg(test)]

use driftswap_interface::{pair_address, zero_address};
use driftswap_pair::PairClient;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _},
    vec, Address, BytesN, Env, IntoVal,
};

use crate::{Factory, FactoryClient, FactoryError};

fn setup_env<'a>() -> (Env, FactoryClient<'a>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let factory_address = env.register_contract(None, Factory);
    let client = FactoryClient::new(&env, &factory_address);
    let fee_to_setter = Address::generate(&env);

    client.initialize(&fee_to_setter, &BytesN::from_array(&env, &[7; 32]));

    let token_a = Address::generate(&env);
    let token_b = Address::generate(&env);

    (env, client, token_a, token_b, fee_to_setter)
}

// ---------- initialize ----------

#[test]
fn test_initialize_happy_path() {
    let (env, client, _, _, fee_to_setter) = setup_env();

    assert!(client.fee_to().is_none());
    assert_eq!(client.fee_to_setter(), fee_to_setter);
    assert_eq!(client.pair_wasm_hash(), BytesN::from_array(&env, &[7; 32]));
    assert_eq!(client.all_pairs_length(), 0);
}

#[test]
fn test_initialize_double_init_fails() {
    let (env, client, _, _, _) = setup_env();

    let result = client.try_initialize(
        &Address::generate(&env),
        &BytesN::from_array(&env, &[0; 32]),
    );
    assert_eq!(result, Err(Ok(FactoryError::AlreadyInitialized)));
}

#[test]
fn test_create_pair_before_initialize_fails() {
    let env = Env::default();
    let client = FactoryClient::new(&env, &env.register_contract(None, Factory));

    let result = client.try_create_pair(&Address::generate(&env), &Address::generate(&env));
    assert_eq!(result, Err(Ok(FactoryError::NotInitialized)));
}

// ---------- create_pair ----------

#[test]
fn test_create_pair_registers_both_orderings() {
    let (env, client, token_a, token_b, _) = setup_env();

    let pair = client.create_pair(&token_a, &token_b);

    assert_eq!(client.get_pair(&token_a, &token_b), Some(pair.clone()));
    assert_eq!(client.get_pair(&token_b, &token_a), Some(pair.clone()));
    assert_eq!(client.all_pairs_length(), 1);
    assert_eq!(client.all_pairs(&0), Some(pair.clone()));
    assert_eq!(client.all_pairs(&1), None);

    // Deterministic address, computable without the registry
    assert_eq!(
        pair_address(&env, &client.address, &token_a, &token_b),
        Some(pair.clone())
    );

    // Pair is initialized with sorted tokens and this factory
    let pair_client = PairClient::new(&env, &pair);
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    assert_eq!(pair_client.token_0(), token_0);
    assert_eq!(pair_client.token_1(), token_1);
    assert_eq!(pair_client.factory(), client.address);
    assert_eq!(pair_client.get_reserves(), (0, 0, 0));
}

#[test]
fn test_create_pair_reversed_order_exists() {
    let (_env, client, token_a, token_b, _) = setup_env();

    client.create_pair(&token_a, &token_b);
    assert_eq!(
        client.try_create_pair(&token_b, &token_a),
        Err(Ok(FactoryError::PairExists))
    );
    assert_eq!(
        client.try_create_pair(&token_a, &token_b),
        Err(Ok(FactoryError::PairExists))
    );
    assert_eq!(client.all_pairs_length(), 1);
}

#[test]
fn test_create_pair_identical_tokens_fails() {
    let (_env, client, token_a, _, _) = setup_env();

    let result = client.try_create_pair(&token_a, &token_a);
    assert_eq!(result, Err(Ok(FactoryError::IdenticalTokens)));
}

#[test]
fn test_create_pair_zero_token_fails() {
    let (env, client, token_a, _, _) = setup_env();

    let result = client.try_create_pair(&zero_address(&env), &token_a);
    assert_eq!(result, Err(Ok(FactoryError::ZeroToken)));
    let result = client.try_create_pair(&token_a, &zero_address(&env));
    assert_eq!(result, Err(Ok(FactoryError::ZeroToken)));
}

#[test]
fn test_all_pairs_in_creation_order() {
    let (env, client, token_a, token_b, _) = setup_env();
    let token_c = Address::generate(&env);

    let first = client.create_pair(&token_a, &token_b);
    let second = client.create_pair(&token_c, &token_a);

    assert_ne!(first, second);
    assert_eq!(client.all_pairs_length(), 2);
    assert_eq!(client.all_pairs(&0), Some(first));
    assert_eq!(client.all_pairs(&1), Some(second));
}

#[test]
fn test_create_pair_emits_event() {
    let (env, client, token_a, token_b, _) = setup_env();
    let pair = client.create_pair(&token_a, &token_b);
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let events = env.events().all();
    assert_eq!(
        events.slice(events.len() - 1..),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("new_pair"), token_0, token_1).into_val(&env),
                (pair, 0_u32).into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_get_pair_none_for_missing() {
    let (_env, client, token_a, token_b, _) = setup_env();
    assert!(client.get_pair(&token_a, &token_b).is_none());
}

// ---------- fee switch ----------

#[test]
fn test_set_fee_to_by_setter() {
    let (env, client, _, _, fee_to_setter) = setup_env();
    let fee_to = Address::generate(&env);

    client.set_fee_to(&fee_to_setter, &Some(fee_to.clone()));
    assert_eq!(client.fee_to(), Some(fee_to));

    client.set_fee_to(&fee_to_setter, &None);
    assert_eq!(client.fee_to(), None);
}

#[test]
fn test_set_fee_to_forbidden_for_others() {
    let (env, client, _, _, _) = setup_env();
    let stranger = Address::generate(&env);

    let result = client.try_set_fee_to(&stranger, &Some(stranger.clone()));
    assert_eq!(result, Err(Ok(FactoryError::Forbidden)));
    assert_eq!(client.fee_to(), None);
}

#[test]
fn test_set_fee_to_setter_hands_over_control() {
    let (env, client, _, _, fee_to_setter) = setup_env();
    let next_setter = Address::generate(&env);

    client.set_fee_to_setter(&fee_to_setter, &next_setter);
    assert_eq!(client.fee_to_setter(), next_setter);

    let result = client.try_set_fee_to(&fee_to_setter, &None);
    assert_eq!(result, Err(Ok(FactoryError::Forbidden)));
    let result = client.try_set_fee_to_setter(&fee_to_setter, &fee_to_setter);
    assert_eq!(result, Err(Ok(FactoryError::Forbidden)));

    client.set_fee_to(&next_setter, &Some(next_setter.clone()));
    assert_eq!(client.fee_to(), Some(next_setter));
}
