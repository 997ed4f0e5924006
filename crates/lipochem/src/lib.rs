//! Lipid chain value types, shorthand notation, and chain masses

pub mod chains;
pub mod errors;
pub mod exceptions;
mod masses;

// Standard Library Imports
use std::{collections::BTreeSet, sync::Arc};

// External Crate Imports
use derive_more::{Add, Display, From, Into, IsVariant, Sum, Unwrap};
use rust_decimal::Decimal;
use serde::Serialize;

pub use errors::{LipochemError, Result};
pub use exceptions::ChainExceptionDatabase;

// NOTE: Every type in this module is immutable once constructed; generators build new values instead of editing old
// ones, which is what lets chains be shared between threads and cached behind `Arc`s

// Positions ===========================================================================================================

// NOTE: Positions are 1-indexed carbon offsets, counted from the reference end of the chain (the carbonyl carbon for
// acyl chains, the ether-linked carbon for alkyl chains, and C1 of the sphingoid base)
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
pub struct DoubleBond {
    count: u32,
    positions: BTreeSet<u32>,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
pub struct Oxidized {
    count: u32,
    positions: BTreeSet<u32>,
}

// Chains ==============================================================================================================

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct AcylChain {
    carbon_count: u32,
    double_bond: DoubleBond,
    oxidized: Oxidized,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct AlkylChain {
    carbon_count: u32,
    double_bond: DoubleBond,
    oxidized: Oxidized,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct SphingoChain {
    carbon_count: u32,
    double_bond: DoubleBond,
    oxidized: Oxidized,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, From, IsVariant, Unwrap)]
pub enum Chain {
    Acyl(AcylChain),
    Alkyl(AlkylChain),
    Sphingo(SphingoChain),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum ChainKind {
    #[display("acyl")]
    Acyl,
    #[display("alkyl")]
    Alkyl,
    #[display("sphingoid")]
    Sphingo,
}

// Compositions and Chain Sets =========================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct TotalChain {
    carbon_count: u32,
    double_bond_count: u32,
    oxidized_count: u32,
    acyl_chain_count: u32,
    alkyl_chain_count: u32,
    sphingo_chain_count: u32,
}

// NOTE: Chains are reference-counted so that the generator's cache can hand the same chain to every chain set that
// contains it
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct MolecularSpeciesLevelChains(Vec<Arc<Chain>>);

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct PositionLevelChains(Vec<Arc<Chain>>);

#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, From, IsVariant, Unwrap)]
pub enum AnyChains {
    MolecularSpecies(MolecularSpeciesLevelChains),
    Position(PositionLevelChains),
}

// Masses ==============================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Add, Sum, From, Into, Display)]
pub struct MonoisotopicMass(Decimal);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Add, Sum, From, Into, Display)]
pub struct AverageMass(Decimal);

pub trait Massive {
    fn monoisotopic_mass(&self) -> MonoisotopicMass;
    fn average_mass(&self) -> AverageMass;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive + ?Sized> Massive for $ref_type {
                fn monoisotopic_mass(&self) -> MonoisotopicMass {
                    (**self).monoisotopic_mass()
                }

                fn average_mass(&self) -> AverageMass {
                    (**self).average_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, Box<T>, Arc<T>);
