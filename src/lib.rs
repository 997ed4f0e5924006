//! Enumerates every way the chains of a lipid could add up to its total composition, and every place their double
//! bonds could sit
//!
//! This crate just gathers the public API of `lipochem` (chain types, masses, and shorthand notation) and `splinters`
//! (the chain and double-bond generators) in one place.

pub use lipochem::{
    AcylChain, AlkylChain, AnyChains, AverageMass, Chain, ChainExceptionDatabase, ChainKind, DoubleBond,
    LipochemError, Massive, MolecularSpeciesLevelChains, MonoisotopicMass, Oxidized, PositionLevelChains,
    SphingoChain, TotalChain, chains::SPHINGOID_BACKBONE,
};
pub use splinters::{
    ChainGenerator, ChainVariationGenerator, DEFAULT_MIN_LENGTH, StandardChainGenerator,
    TotalChainVariationGenerator,
};

pub mod prelude {
    pub use crate::{
        Chain, ChainExceptionDatabase, ChainGenerator, ChainKind, ChainVariationGenerator, Massive,
        StandardChainGenerator, TotalChain, TotalChainVariationGenerator,
    };
}
