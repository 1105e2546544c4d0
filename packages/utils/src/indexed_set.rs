use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

/// A per-owner ordered set of strings backed by three maps: the set length, the member stored at
/// each slot and the slot of each member. Membership, insertion and removal are O(1); removal
/// moves the last member into the freed slot, so the order is insertion order only until the
/// first removal.
pub struct IndexedSet<'a> {
    len_namespace: &'a str,
    slots_namespace: &'a str,
    positions_namespace: &'a str,
}

impl<'a> IndexedSet<'a> {
    pub const fn new(
        len_namespace: &'a str,
        slots_namespace: &'a str,
        positions_namespace: &'a str,
    ) -> Self {
        Self {
            len_namespace,
            slots_namespace,
            positions_namespace,
        }
    }

    fn lengths<'b>(&self) -> Map<'b, &'b Addr, u32>
    where
        'a: 'b,
    {
        Map::new(self.len_namespace)
    }

    fn slots<'b>(&self) -> Map<'b, (&'b Addr, u32), String>
    where
        'a: 'b,
    {
        Map::new(self.slots_namespace)
    }

    fn positions<'b>(&self) -> Map<'b, (&'b Addr, &'b str), u32>
    where
        'a: 'b,
    {
        Map::new(self.positions_namespace)
    }

    pub fn len(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<u32> {
        Ok(self.lengths().may_load(storage, owner)?.unwrap_or(0))
    }

    pub fn contains(&self, storage: &dyn Storage, owner: &Addr, member: &str) -> bool {
        self.positions().has(storage, (owner, member))
    }

    /// Returns false if the member was already present
    pub fn insert(&self, storage: &mut dyn Storage, owner: &Addr, member: &str) -> StdResult<bool> {
        if self.contains(storage, owner, member) {
            return Ok(false);
        }

        let len = self.len(storage, owner)?;
        self.slots().save(storage, (owner, len), &member.to_string())?;
        self.positions().save(storage, (owner, member), &len)?;
        self.lengths().save(storage, owner, &(len + 1))?;

        Ok(true)
    }

    /// Returns false if the member was not present
    pub fn remove(&self, storage: &mut dyn Storage, owner: &Addr, member: &str) -> StdResult<bool> {
        let Some(position) = self.positions().may_load(storage, (owner, member))? else {
            return Ok(false);
        };

        let last = self.len(storage, owner)? - 1;
        if position != last {
            let moved = self.slots().load(storage, (owner, last))?;
            self.slots().save(storage, (owner, position), &moved)?;
            self.positions().save(storage, (owner, moved.as_str()), &position)?;
        }

        self.slots().remove(storage, (owner, last));
        self.positions().remove(storage, (owner, member));
        if last == 0 {
            self.lengths().remove(storage, owner);
        } else {
            self.lengths().save(storage, owner, &last)?;
        }

        Ok(true)
    }

    pub fn members(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<Vec<String>> {
        (0..self.len(storage, owner)?)
            .map(|slot| self.slots().load(storage, (owner, slot)))
            .collect()
    }
}
