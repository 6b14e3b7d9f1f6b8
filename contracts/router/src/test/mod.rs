#![cfg(test)]

use driftswap_factory::{Factory, FactoryClient};
use driftswap_pair::PairClient;
use driftswap_wrapped_native::{WrappedNative, WrappedNativeClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, BytesN, Env, Vec,
};

use crate::{guard, Router, RouterClient, RouterError};

const INITIAL_BALANCE: i128 = 1_000_000_000_000;

struct RouterTest<'a> {
    env: Env,
    router: RouterClient<'a>,
    factory: FactoryClient<'a>,
    wrapped: WrappedNativeClient<'a>,
    native: TokenClient<'a>,
    token_a: TokenClient<'a>,
    token_b: TokenClient<'a>,
    token_c: TokenClient<'a>,
    user: Address,
}

fn create_token<'a>(env: &Env, admin: &Address, holder: &Address) -> TokenClient<'a> {
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    StellarAssetClient::new(env, &token).mint(holder, &INITIAL_BALANCE);
    TokenClient::new(env, &token)
}

impl<'a> RouterTest<'a> {
    fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.budget().reset_unlimited();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);

        let factory = FactoryClient::new(&env, &env.register_contract(None, Factory));
        factory.initialize(&admin, &BytesN::from_array(&env, &[0; 32]));

        let native = create_token(&env, &admin, &user);
        let wrapped = WrappedNativeClient::new(&env, &env.register_contract(None, WrappedNative));
        wrapped.initialize(&native.address);

        let router = RouterClient::new(&env, &env.register_contract(None, Router));
        router.initialize(&factory.address, &wrapped.address);

        RouterTest {
            token_a: create_token(&env, &admin, &user),
            token_b: create_token(&env, &admin, &user),
            token_c: create_token(&env, &admin, &user),
            router,
            factory,
            wrapped,
            native,
            user,
            env,
        }
    }

    fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 1_000
    }

    fn add_liquidity(&self, token_a: &TokenClient, token_b: &TokenClient, amount_a: i128, amount_b: i128) -> i128 {
        let (_, _, liquidity) = self.router.add_liquidity(
            &token_a.address,
            &token_b.address,
            &amount_a,
            &amount_b,
            &0,
            &0,
            &self.user,
            &self.deadline(),
        );
        liquidity
    }

    fn pair(&self, token_a: &Address, token_b: &Address) -> PairClient<'a> {
        let pair = self.factory.get_pair(token_a, token_b).unwrap();
        PairClient::new(&self.env, &pair)
    }

    /// Reserves of the pair, in argument order.
    fn reserves(&self, token_a: &Address, token_b: &Address) -> (i128, i128) {
        let pair = self.pair(token_a, token_b);
        let (reserve_0, reserve_1, _) = pair.get_reserves();
        if pair.token_0() == *token_a {
            (reserve_0, reserve_1)
        } else {
            (reserve_1, reserve_0)
        }
    }

    fn path(&self, tokens: &[&Address]) -> Vec<Address> {
        let mut path = Vec::new(&self.env);
        for token in tokens {
            path.push_back((*token).clone());
        }
        path
    }
}

// ---------------------------------------------------------------------------
// initialize
// ---------------------------------------------------------------------------

#[test]
fn initialize_stores_config() {
    let t = RouterTest::setup();

    assert_eq!(t.router.factory(), t.factory.address);
    assert_eq!(t.router.wrapped_native(), t.wrapped.address);
    assert_eq!(
        t.router.try_initialize(&t.factory.address, &t.wrapped.address),
        Err(Ok(RouterError::AlreadyInitialized))
    );
}

// ---------------------------------------------------------------------------
// add_liquidity
// ---------------------------------------------------------------------------

#[test]
fn add_liquidity_creates_pair_and_mints() {
    let t = RouterTest::setup();
    assert!(t.factory.get_pair(&t.token_a.address, &t.token_b.address).is_none());

    let result = t.router.add_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &2_000,
        &4_000_000,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );

    assert_eq!(result, (2_000, 4_000_000, 88_442));
    let pair = t.pair(&t.token_a.address, &t.token_b.address);
    assert_eq!(pair.balance(&t.user), 88_442);
    assert_eq!(t.reserves(&t.token_a.address, &t.token_b.address), (2_000, 4_000_000));
    assert_eq!(t.token_a.balance(&t.user), INITIAL_BALANCE - 2_000);
    assert_eq!(t.token_b.balance(&t.user), INITIAL_BALANCE - 4_000_000);
}

#[test]
fn add_liquidity_reduces_b_to_pool_price() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 1_000_000, 2_000_000);

    let result = t.router.add_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &100_000,
        &500_000,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );

    // supply = floor(sqrt(2e12)) = 1_414_213
    assert_eq!(result, (100_000, 200_000, 141_421));
    assert_eq!(t.reserves(&t.token_a.address, &t.token_b.address), (1_100_000, 2_200_000));
}

#[test]
fn add_liquidity_insufficient_b_amount_leaves_pool_untouched() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 1_000_000, 2_000_000);
    let balance_a = t.token_a.balance(&t.user);
    let balance_b = t.token_b.balance(&t.user);

    let result = t.router.try_add_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &100_000,
        &500_000,
        &0,
        &300_000,
        &t.user,
        &t.deadline(),
    );

    assert_eq!(result, Err(Ok(RouterError::InsufficientBAmount)));
    assert_eq!(t.reserves(&t.token_a.address, &t.token_b.address), (1_000_000, 2_000_000));
    assert_eq!(t.token_a.balance(&t.user), balance_a);
    assert_eq!(t.token_b.balance(&t.user), balance_b);
}

#[test]
fn add_liquidity_insufficient_a_amount() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 1_000_000, 2_000_000);

    // b is the binding side: a is reduced to 100_000, below its minimum
    let result = t.router.try_add_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &500_000,
        &200_000,
        &200_000,
        &0,
        &t.user,
        &t.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientAAmount)));
}

#[test]
fn add_liquidity_identical_tokens_fails() {
    let t = RouterTest::setup();
    let result = t.router.try_add_liquidity(
        &t.token_a.address,
        &t.token_a.address,
        &1_000,
        &1_000,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::IdenticalTokens)));
}

// ---------------------------------------------------------------------------
// remove_liquidity
// ---------------------------------------------------------------------------

#[test]
fn remove_liquidity_returns_amounts_in_argument_order() {
    let t = RouterTest::setup();
    let liquidity = t.add_liquidity(&t.token_a, &t.token_b, 1_000_000, 4_000_000);
    assert_eq!(liquidity, 1_999_000);

    let result = t.router.remove_liquidity(
        &t.token_b.address,
        &t.token_a.address,
        &liquidity,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );

    assert_eq!(result, (3_998_000, 999_500));
    assert_eq!(t.pair(&t.token_a.address, &t.token_b.address).balance(&t.user), 0);
    assert_eq!(t.token_a.balance(&t.user), INITIAL_BALANCE - 500);
    assert_eq!(t.token_b.balance(&t.user), INITIAL_BALANCE - 2_000);
}

#[test]
fn remove_liquidity_below_minimum_fails() {
    let t = RouterTest::setup();
    let liquidity = t.add_liquidity(&t.token_a, &t.token_b, 3_000, 3_000);

    let result = t.router.try_remove_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &liquidity,
        &2_001,
        &0,
        &t.user,
        &t.deadline(),
    );

    assert_eq!(result, Err(Ok(RouterError::InsufficientAAmount)));
    assert_eq!(t.pair(&t.token_a.address, &t.token_b.address).balance(&t.user), liquidity);
}

#[test]
fn remove_liquidity_unknown_pair_fails() {
    let t = RouterTest::setup();
    let result = t.router.try_remove_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &100,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::PairNotFound)));
}

// ---------------------------------------------------------------------------
// swaps
// ---------------------------------------------------------------------------

#[test]
fn multi_hop_swap_realizes_simulated_amounts() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    t.add_liquidity(&t.token_b, &t.token_c, 10_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address, &t.token_c.address]);

    let expected = t.router.get_amounts_out(&100_000, &path);
    let balance_c = t.token_c.balance(&t.user);

    let amounts = t
        .router
        .swap_exact_tokens_for_tokens(&100_000, &0, &path, &t.user, &t.deadline());

    assert_eq!(amounts, expected);
    assert_eq!(amounts.len(), 3);
    assert_eq!(t.token_c.balance(&t.user), balance_c + amounts.get(2).unwrap());
    // The intermediate token never reaches the user
    assert_eq!(
        t.reserves(&t.token_a.address, &t.token_b.address),
        (5_100_000, 10_000_000 - amounts.get(1).unwrap())
    );
    assert_eq!(
        t.reserves(&t.token_b.address, &t.token_c.address),
        (10_000_000 + amounts.get(1).unwrap(), 10_000_000 - amounts.get(2).unwrap())
    );
}

#[test]
fn swap_exact_tokens_below_minimum_fails() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);

    let expected = t.router.get_amounts_out(&1_000_000, &path);
    assert_eq!(expected, vec![&t.env, 1_000_000, 1_662_497]);

    let result = t.router.try_swap_exact_tokens_for_tokens(
        &1_000_000,
        &1_662_498,
        &path,
        &t.user,
        &t.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientOutputAmount)));
    assert_eq!(t.reserves(&t.token_a.address, &t.token_b.address), (5_000_000, 10_000_000));
}

#[test]
fn swap_tokens_for_exact_tokens_pays_computed_input() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);
    let balance_a = t.token_a.balance(&t.user);
    let balance_b = t.token_b.balance(&t.user);

    let amounts = t.router.swap_tokens_for_exact_tokens(
        &1_662_497,
        &1_000_000,
        &path,
        &t.user,
        &t.deadline(),
    );

    assert_eq!(amounts, vec![&t.env, 1_000_000, 1_662_497]);
    assert_eq!(t.token_a.balance(&t.user), balance_a - 1_000_000);
    assert_eq!(t.token_b.balance(&t.user), balance_b + 1_662_497);
}

#[test]
fn swap_tokens_for_exact_tokens_above_maximum_fails() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);

    let result = t.router.try_swap_tokens_for_exact_tokens(
        &1_662_497,
        &999_999,
        &path,
        &t.user,
        &t.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::ExcessiveInputAmount)));
}

#[test]
fn expired_deadline_leaves_reserves_unchanged() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);

    t.env.ledger().set_timestamp(2_000);
    let result = t
        .router
        .try_swap_exact_tokens_for_tokens(&100_000, &0, &path, &t.user, &1_999);

    assert_eq!(result, Err(Ok(RouterError::Expired)));
    assert_eq!(t.reserves(&t.token_a.address, &t.token_b.address), (5_000_000, 10_000_000));

    let result = t.router.try_add_liquidity(
        &t.token_a.address,
        &t.token_b.address,
        &1_000,
        &2_000,
        &0,
        &0,
        &t.user,
        &1_999,
    );
    assert_eq!(result, Err(Ok(RouterError::Expired)));

    // The deadline itself is still valid
    t.router
        .swap_exact_tokens_for_tokens(&100_000, &0, &path, &t.user, &2_000);
}

#[test]
fn swap_with_invalid_path_fails() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);

    let short = t.path(&[&t.token_a.address]);
    assert_eq!(
        t.router
            .try_swap_exact_tokens_for_tokens(&1_000, &0, &short, &t.user, &t.deadline()),
        Err(Ok(RouterError::InvalidPath))
    );

    let unknown = t.path(&[&t.token_a.address, &t.token_c.address]);
    assert_eq!(
        t.router
            .try_swap_exact_tokens_for_tokens(&1_000, &0, &unknown, &t.user, &t.deadline()),
        Err(Ok(RouterError::PairNotFound))
    );
}

#[test]
fn negative_amounts_rejected() {
    let t = RouterTest::setup();
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);

    assert_eq!(
        t.router
            .try_swap_exact_tokens_for_tokens(&-1, &0, &path, &t.user, &t.deadline()),
        Err(Ok(RouterError::NegativeAmount))
    );
}

// ---------------------------------------------------------------------------
// native asset
// ---------------------------------------------------------------------------

fn setup_native_pool<'a>() -> RouterTest<'a> {
    let t = RouterTest::setup();
    let (amount_token, amount_native, _) = t.router.add_liquidity_native(
        &t.token_a.address,
        &5_000_000,
        &10_000_000,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );
    assert_eq!((amount_token, amount_native), (5_000_000, 10_000_000));
    t
}

#[test]
fn add_liquidity_native_wraps_only_used_amount() {
    let t = setup_native_pool();
    assert_eq!(t.native.balance(&t.user), INITIAL_BALANCE - 10_000_000);

    let (amount_token, amount_native, _) = t.router.add_liquidity_native(
        &t.token_a.address,
        &100_000,
        &1_000_000,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );

    assert_eq!((amount_token, amount_native), (100_000, 200_000));
    assert_eq!(t.native.balance(&t.user), INITIAL_BALANCE - 10_200_000);
    assert_eq!(t.wrapped.balance(&t.user), 0);
    assert_eq!(
        t.reserves(&t.token_a.address, &t.wrapped.address),
        (5_100_000, 10_200_000)
    );
}

#[test]
fn remove_liquidity_native_unwraps() {
    let t = setup_native_pool();
    let pair = t.pair(&t.token_a.address, &t.wrapped.address);
    let liquidity = pair.balance(&t.user);
    let native_before = t.native.balance(&t.user);

    let (amount_token, amount_native) = t.router.remove_liquidity_native(
        &t.token_a.address,
        &liquidity,
        &0,
        &0,
        &t.user,
        &t.deadline(),
    );

    assert!(amount_token > 0 && amount_native > 0);
    assert_eq!(t.native.balance(&t.user), native_before + amount_native);
    assert_eq!(t.wrapped.balance(&t.user), 0);
    assert_eq!(pair.balance(&t.user), 0);
}

#[test]
fn swap_exact_native_for_tokens() {
    let t = setup_native_pool();
    let path = t.path(&[&t.wrapped.address, &t.token_a.address]);
    let native_before = t.native.balance(&t.user);
    let token_before = t.token_a.balance(&t.user);

    let amounts = t
        .router
        .swap_exact_native_for_tokens(&100_000, &0, &path, &t.user, &t.deadline());

    assert_eq!(t.native.balance(&t.user), native_before - 100_000);
    assert_eq!(t.token_a.balance(&t.user), token_before + amounts.get(1).unwrap());
    assert_eq!(t.wrapped.balance(&t.user), 0);
}

#[test]
fn swap_exact_tokens_for_native() {
    let t = setup_native_pool();
    let path = t.path(&[&t.token_a.address, &t.wrapped.address]);
    let native_before = t.native.balance(&t.user);

    let amounts = t
        .router
        .swap_exact_tokens_for_native(&100_000, &0, &path, &t.user, &t.deadline());

    assert_eq!(t.native.balance(&t.user), native_before + amounts.get(1).unwrap());
    assert_eq!(t.wrapped.balance(&t.user), 0);
}

#[test]
fn swap_native_for_exact_tokens_debits_only_required_input() {
    let t = setup_native_pool();
    let path = t.path(&[&t.wrapped.address, &t.token_a.address]);
    let native_before = t.native.balance(&t.user);
    let token_before = t.token_a.balance(&t.user);

    let amounts = t
        .router
        .swap_native_for_exact_tokens(&50_000, &1_000_000, &path, &t.user, &t.deadline());

    let spent = amounts.get(0).unwrap();
    assert!(spent < 1_000_000);
    assert_eq!(t.native.balance(&t.user), native_before - spent);
    assert_eq!(t.token_a.balance(&t.user), token_before + 50_000);
}

#[test]
fn swap_tokens_for_exact_native() {
    let t = setup_native_pool();
    let path = t.path(&[&t.token_a.address, &t.wrapped.address]);
    let native_before = t.native.balance(&t.user);

    t.router
        .swap_tokens_for_exact_native(&50_000, &1_000_000, &path, &t.user, &t.deadline());

    assert_eq!(t.native.balance(&t.user), native_before + 50_000);
    assert_eq!(t.wrapped.balance(&t.user), 0);
}

#[test]
fn native_swap_requires_wrapped_endpoint() {
    let t = setup_native_pool();
    let path = t.path(&[&t.token_a.address, &t.wrapped.address]);

    assert_eq!(
        t.router
            .try_swap_exact_native_for_tokens(&1_000, &0, &path, &t.user, &t.deadline()),
        Err(Ok(RouterError::InvalidPath))
    );
    let reversed = t.path(&[&t.wrapped.address, &t.token_a.address]);
    assert_eq!(
        t.router
            .try_swap_exact_tokens_for_native(&1_000, &0, &reversed, &t.user, &t.deadline()),
        Err(Ok(RouterError::InvalidPath))
    );
}

// ---------------------------------------------------------------------------
// library
// ---------------------------------------------------------------------------

#[test]
fn library_quote_and_amounts() {
    let t = RouterTest::setup();

    assert_eq!(t.router.quote(&100, &1_000, &2_000), 200);
    assert_eq!(t.router.get_amount_out(&1_000_000, &5_000_000, &10_000_000), 1_662_497);
    assert_eq!(t.router.get_amount_in(&1_662_497, &5_000_000, &10_000_000), 1_000_000);

    assert_eq!(
        t.router.try_quote(&0, &1_000, &2_000),
        Err(Ok(RouterError::InsufficientAmount))
    );
    assert_eq!(
        t.router.try_get_amount_out(&100, &0, &2_000),
        Err(Ok(RouterError::InsufficientLiquidity))
    );
    assert_eq!(
        t.router.try_get_amount_in(&2_000, &1_000, &2_000),
        Err(Ok(RouterError::InsufficientLiquidity))
    );
    assert_eq!(
        t.router.try_get_amount_out(&0, &1_000, &2_000),
        Err(Ok(RouterError::InsufficientInputAmount))
    );
}

#[test]
fn amounts_in_and_out_agree() {
    let t = RouterTest::setup();
    t.add_liquidity(&t.token_a, &t.token_b, 5_000_000, 10_000_000);
    let path = t.path(&[&t.token_a.address, &t.token_b.address]);

    let amounts_in = t.router.get_amounts_in(&1_662_497, &path);
    assert_eq!(amounts_in, vec![&t.env, 1_000_000, 1_662_497]);
    let amounts_out = t.router.get_amounts_out(&amounts_in.get(0).unwrap(), &path);
    assert_eq!(amounts_out.get(1).unwrap(), 1_662_497);
}

#[test]
fn pair_for_matches_created_pair() {
    let t = RouterTest::setup();

    let predicted = t.router.pair_for(&t.token_a.address, &t.token_b.address);
    let created = t.factory.create_pair(&t.token_b.address, &t.token_a.address);

    assert_eq!(predicted, created);
    assert_eq!(
        t.router.try_pair_for(&t.token_a.address, &t.token_a.address),
        Err(Ok(RouterError::IdenticalTokens))
    );
}

#[test]
fn guard_checks() {
    let env = Env::default();
    env.ledger().set_timestamp(10);

    assert_eq!(guard::ensure_deadline(&env, 10), Ok(()));
    assert_eq!(guard::ensure_deadline(&env, 9), Err(RouterError::Expired));
    assert_eq!(guard::ensure_min_output(5, 5), Ok(()));
    assert_eq!(
        guard::ensure_min_output(4, 5),
        Err(RouterError::InsufficientOutputAmount)
    );
    assert_eq!(guard::ensure_max_input(5, 5), Ok(()));
    assert_eq!(
        guard::ensure_max_input(6, 5),
        Err(RouterError::ExcessiveInputAmount)
    );
    assert_eq!(
        guard::ensure_min_amounts(1, 2, 3, 0),
        Err(RouterError::InsufficientAAmount)
    );
    assert_eq!(
        guard::ensure_min_amounts(2, 2, 3, 4),
        Err(RouterError::InsufficientBAmount)
    );
    assert_eq!(guard::ensure_non_negative(&[0, -1]), Err(RouterError::NegativeAmount));
}
