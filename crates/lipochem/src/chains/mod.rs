mod chain;
mod chain_set;
mod positions;
mod total_chain;

pub use chain::SPHINGOID_BACKBONE;
