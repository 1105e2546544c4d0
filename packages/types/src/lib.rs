pub mod adapters;
pub mod gauge;
pub mod identity;
pub mod minter;
pub mod permissions;
pub mod pool;
pub mod registry;
pub mod staking;
