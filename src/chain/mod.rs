//! Chain module - per-network parameters, genesis block, and the registry

mod bundle;
mod checkpoints;
mod encoding;
mod genesis;
mod registry;
pub mod seeds;

pub use bundle::*;
pub use checkpoints::*;
pub use encoding::*;
pub use genesis::*;
pub use registry::*;
