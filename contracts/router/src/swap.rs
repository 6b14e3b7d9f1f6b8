use driftswap_interface::{sort_tokens, PairClient};
use soroban_sdk::{token::TokenClient, Address, Bytes, Env, Vec};

use crate::{
    errors::RouterError,
    helpers::{get_pair_address, hop},
};

/// Moves `amount` of `path[0]` from `from` into the first pair of the route.
pub fn pay_first_hop(
    env: &Env,
    factory: &Address,
    path: &Vec<Address>,
    amount: i128,
    from: &Address,
) -> Result<(), RouterError> {
    let (input, output) = hop(path, 0)?;
    let pair = get_pair_address(env, factory, &input, &output)?;
    TokenClient::new(env, &input).transfer(from, &pair, &amount);
    Ok(())
}

/// Executes every hop of a funded route. Each pair pays the next pair
/// directly; the last one pays `to`.
pub fn execute(
    env: &Env,
    factory: &Address,
    amounts: &Vec<i128>,
    path: &Vec<Address>,
    to: &Address,
) -> Result<(), RouterError> {
    let hops = path.len() - 1;
    for i in 0..hops {
        let (input, output) = hop(path, i)?;
        let (token_0, _) = sort_tokens(&input, &output).ok_or(RouterError::IdenticalTokens)?;
        let amount_out = amounts.get(i + 1).ok_or(RouterError::InvalidPath)?;
        let (amount_0_out, amount_1_out) = if input == token_0 {
            (0, amount_out)
        } else {
            (amount_out, 0)
        };

        let recipient = if i + 1 < hops {
            let (_, next) = hop(path, i + 1)?;
            get_pair_address(env, factory, &output, &next)?
        } else {
            to.clone()
        };

        let pair = get_pair_address(env, factory, &input, &output)?;
        PairClient::new(env, &pair).swap(&amount_0_out, &amount_1_out, &recipient, &Bytes::new(env));
    }
    Ok(())
}
