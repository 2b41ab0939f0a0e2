//! Consensus module - block and transaction structures, consensus parameters

mod block;
mod params;
mod script;
mod transaction;

pub use block::*;
pub use params::*;
pub use script::*;
pub use transaction::*;
