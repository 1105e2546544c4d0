use cosmwasm_std::{Addr, Empty, Order, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::PermissionError;

/// An inspectable permission table mapping a capability to the set of addresses holding it.
///
/// Capabilities are plain strings so each contract can define its own typed enum on top.
pub struct Permissions<'a> {
    namespace: &'a str,
}

impl<'a> Permissions<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace,
        }
    }

    fn table<'b>(&self) -> Map<'b, (&'b str, &'b Addr), Empty>
    where
        'a: 'b,
    {
        Map::new(self.namespace)
    }

    pub fn grant(&self, storage: &mut dyn Storage, capability: &str, addr: &Addr) -> StdResult<()> {
        self.table().save(storage, (capability, addr), &Empty {})
    }

    pub fn revoke(&self, storage: &mut dyn Storage, capability: &str, addr: &Addr) {
        self.table().remove(storage, (capability, addr))
    }

    /// Revokes the capability from every holder, returning the addresses that lost it
    pub fn revoke_all(&self, storage: &mut dyn Storage, capability: &str) -> StdResult<Vec<Addr>> {
        let holders = self.holders(storage, capability)?;
        for addr in &holders {
            self.revoke(storage, capability, addr);
        }
        Ok(holders)
    }

    pub fn has(&self, storage: &dyn Storage, capability: &str, addr: &Addr) -> bool {
        self.table().has(storage, (capability, addr))
    }

    pub fn assert(
        &self,
        storage: &dyn Storage,
        capability: &str,
        addr: &Addr,
    ) -> Result<(), PermissionError> {
        if !self.has(storage, capability, addr) {
            return Err(PermissionError::Unauthorized {
                capability: capability.to_string(),
                address: addr.to_string(),
            });
        }
        Ok(())
    }

    pub fn holders(&self, storage: &dyn Storage, capability: &str) -> StdResult<Vec<Addr>> {
        self.table().prefix(capability).keys(storage, None, None, Order::Ascending).collect()
    }
}
