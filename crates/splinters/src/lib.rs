//! Splits a lipid's total composition into individual chains, then places the double bonds and oxidations of those
//! chains in every way consistent with what is already known

mod cache;
mod candidates;
mod distributor;
mod placement;
mod variations;

// External Crate Imports
use lipochem::{AnyChains, Chain, MolecularSpeciesLevelChains, PositionLevelChains, TotalChain};

pub use placement::StandardChainGenerator;
pub use variations::{ChainVariationGenerator, DEFAULT_MIN_LENGTH};

// Public API ==========================================================================================================

/// Decides which chains are chemically reasonable, and where their double bonds (and oxidations) can go
pub trait ChainGenerator {
    #[must_use]
    fn carbon_is_valid(&self, carbon_count: u32) -> bool;

    #[must_use]
    fn double_bond_is_valid(&self, carbon_count: u32, double_bond_count: u32) -> bool;

    /// Every completion of `chain`'s undecided double bonds and oxidations that keeps its fixed positions. A chain
    /// that is already fully decided yields only itself
    fn generate(&self, chain: &Chain) -> impl Iterator<Item = Chain>;
}

pub trait TotalChainVariationGenerator {
    /// Every way of splitting `total_chain` into individual chains, with their positions left undecided
    fn separate(&self, total_chain: &TotalChain) -> impl Iterator<Item = AnyChains>;

    /// Every structural variant of `chains`, ignoring the order of the chains. Yields nothing if `chains` is already
    /// fully decided
    fn permutate(&self, chains: &MolecularSpeciesLevelChains) -> impl Iterator<Item = AnyChains>;

    /// Every structural variant of `chains`, keeping each chain in its sn position. Yields nothing if `chains` is
    /// already fully decided
    fn product(&self, chains: &PositionLevelChains) -> impl Iterator<Item = AnyChains>;
}
