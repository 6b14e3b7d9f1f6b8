#![no_std]

//! Cross-contract interfaces shared by the factory, pair and router, plus the
//! canonical keying rules every party uses to locate a pair.

mod pairing;


pub use pairing::{pair_address, pair_salt, sort_tokens, zero_address, ZERO_ADDRESS};

use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Registry surface consumed by pairs (protocol fee switch) and the router.
#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn fee_to(env: Env) -> Option<Address>;
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
    fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address;
}

/// Pair engine surface consumed by the factory and the router.
#[contractclient(name = "PairClient")]
pub trait PairInterface {
    fn initialize(env: Env, factory: Address, token_0: Address, token_1: Address);
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
    fn get_reserves(env: Env) -> (i128, i128, u32);
    fn mint(env: Env, to: Address) -> i128;
    fn burn(env: Env, to: Address) -> (i128, i128);
    fn swap(env: Env, amount_0_out: i128, amount_1_out: i128, to: Address, data: Bytes);
}

/// Native-asset wrapper surface consumed by the router.
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNativeInterface {
    fn native(env: Env) -> Address;
    fn deposit(env: Env, from: Address, amount: i128);
    fn withdraw(env: Env, from: Address, amount: i128);
}

/// Flash swap receiver.
/// A pair invokes `swap_call` on the swap recipient when `data` is non-empty,
/// after the requested outputs were transferred. The receiver must leave the
/// pair holding enough input to satisfy the invariant before returning.
#[contractclient(name = "SwapCalleeClient")]
pub trait SwapCallee {
    fn swap_call(
        env: Env,
        pair: Address,
        amount_0_out: i128,
        amount_1_out: i128,
        data: Bytes,
    );
}
