mod identity;
mod minter;
mod pool;
mod registry;
mod staking;

pub use identity::*;
pub use minter::*;
pub use pool::*;
pub use registry::*;
pub use staking::*;
