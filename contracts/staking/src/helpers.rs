use cosmwasm_std::{Decimal256, Event, Storage, Uint128, Uint256};
use mars_types::staking::RewardIndex;

use crate::{
    error::ContractResult,
    state::{BUCKETS, MINT_RATE, REWARD_INDEX, TOTAL_STAKED},
};

/// A helper enum to represent a storage that can either be immutable or mutable. This is useful
/// to create functions that should mutate state on Execute but not on Query.
pub enum MaybeMutStorage<'a> {
    Immutable(&'a dyn Storage),
    Mutable(&'a mut dyn Storage),
}

impl<'a> From<&'a dyn Storage> for MaybeMutStorage<'a> {
    fn from(storage: &'a dyn Storage) -> Self {
        MaybeMutStorage::Immutable(storage)
    }
}

impl<'a> From<&'a mut dyn Storage> for MaybeMutStorage<'a> {
    fn from(storage: &'a mut dyn Storage) -> Self {
        MaybeMutStorage::Mutable(storage)
    }
}

impl MaybeMutStorage<'_> {
    pub fn to_storage(&self) -> &dyn Storage {
        match self {
            MaybeMutStorage::Immutable(storage) => *storage,
            MaybeMutStorage::Mutable(storage) => *storage,
        }
    }
}

/// Computes the global index at `current_block_time`.
///
/// Nothing is minted while nothing is staked, and the clock is left untouched in that case, so
/// the first stake after an idle period also collects the emission of that period.
pub fn compute_reward_index(
    current: &RewardIndex,
    total_staked: Uint128,
    mint_rate: Uint128,
    current_block_time: u64,
) -> ContractResult<RewardIndex> {
    if total_staked.is_zero() || current_block_time <= current.last_updated {
        return Ok(current.clone());
    }

    // A small total stake can push the index past the 128-bit range
    let seconds_elapsed = current_block_time - current.last_updated;
    let minted = Uint256::from(mint_rate).checked_mul(Uint256::from(seconds_elapsed))?;
    let index_increase = Decimal256::checked_from_ratio(minted, total_staked)?;

    Ok(RewardIndex {
        index: current.index.checked_add(index_increase)?,
        last_updated: current_block_time,
    })
}

/// Computes the reward owed to `staked_amount` for the index moving from `last_reward_index` to
/// `reward_index`, rounded down.
pub fn compute_bucket_reward(
    staked_amount: Uint128,
    last_reward_index: Decimal256,
    reward_index: Decimal256,
) -> ContractResult<Uint128> {
    let index_increase = reward_index.checked_sub(last_reward_index)?;
    let owed = Uint256::from(staked_amount).checked_mul_floor(index_increase)?;
    Ok(Uint128::try_from(owed)?)
}

/// Brings the global index up to `current_block_time`. The result is saved if storage is mutable.
pub fn update_reward_index(
    storage: &mut MaybeMutStorage,
    current_block_time: u64,
) -> ContractResult<RewardIndex> {
    let current = REWARD_INDEX.load(storage.to_storage())?;
    let total_staked = TOTAL_STAKED.load(storage.to_storage())?;
    let mint_rate = MINT_RATE.load(storage.to_storage())?;

    let updated = compute_reward_index(&current, total_staked, mint_rate, current_block_time)?;

    if let MaybeMutStorage::Mutable(storage) = storage {
        if updated != current {
            REWARD_INDEX.save(*storage, &updated)?;
        }
    }

    Ok(updated)
}

/// Returns the reward owed to the bucket of `denom` up to `reward_index`, moving the bucket's
/// snapshot to `reward_index` if storage is mutable. Empty, unknown and up to date buckets owe
/// nothing and keep their snapshot.
pub fn accrue_bucket_reward(
    storage: &mut MaybeMutStorage,
    denom: &str,
    reward_index: &RewardIndex,
) -> ContractResult<Uint128> {
    let Some(mut bucket) = BUCKETS.may_load(storage.to_storage(), denom)? else {
        return Ok(Uint128::zero());
    };

    if bucket.staked_amount.is_zero() || bucket.last_reward_index == reward_index.index {
        return Ok(Uint128::zero());
    }

    let owed = compute_bucket_reward(
        bucket.staked_amount,
        bucket.last_reward_index,
        reward_index.index,
    )?;

    if let MaybeMutStorage::Mutable(storage) = storage {
        bucket.last_reward_index = reward_index.index;
        BUCKETS.save(*storage, denom, &bucket)?;
    }

    Ok(owed)
}

pub fn index_update_event(previous: &RewardIndex, updated: &RewardIndex) -> Option<Event> {
    (previous != updated).then(|| {
        Event::new("mars/staking/index_update")
            .add_attribute("previous_index", previous.index.to_string())
            .add_attribute("index", updated.index.to_string())
            .add_attribute("last_updated", updated.last_updated.to_string())
    })
}
