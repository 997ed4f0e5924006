// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::{AnyChains, Chain, ChainKind, MolecularSpeciesLevelChains, PositionLevelChains, TotalChain};

// Public API ==========================================================================================================

macro_rules! chain_set_impls {
    ($($set_type:ident => $separator:literal),+ $(,)?) => {
        $(
            impl $set_type {
                pub fn new(chains: impl IntoIterator<Item = impl Into<Arc<Chain>>>) -> Self {
                    Self(chains.into_iter().map(Into::into).collect())
                }

                #[must_use]
                pub fn chains(&self) -> &[Arc<Chain>] {
                    &self.0
                }

                #[must_use]
                pub fn is_decided(&self) -> bool {
                    self.0.iter().all(|c| c.is_decided())
                }

                /// The composition these chains add up to
                #[must_use]
                pub fn total_chain(&self) -> TotalChain {
                    total_chain(&self.0)
                }
            }

            impl Display for $set_type {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0.iter().join($separator))
                }
            }
        )+
    };
}

chain_set_impls!(MolecularSpeciesLevelChains => "_", PositionLevelChains => "/");

impl MolecularSpeciesLevelChains {
    /// The chains in canonical order; two molecular species are the same lipid iff their canonical chains are equal
    #[must_use]
    pub fn canonical(&self) -> Vec<Arc<Chain>> {
        self.0.iter().cloned().sorted_unstable().collect()
    }
}

impl AnyChains {
    #[must_use]
    pub fn chains(&self) -> &[Arc<Chain>] {
        match self {
            Self::MolecularSpecies(c) => c.chains(),
            Self::Position(c) => c.chains(),
        }
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.chains().iter().all(|c| c.is_decided())
    }

    #[must_use]
    pub fn total_chain(&self) -> TotalChain {
        total_chain(self.chains())
    }
}

// Display Trait Implementations =======================================================================================

impl Display for AnyChains {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MolecularSpecies(c) => c.fmt(f),
            Self::Position(c) => c.fmt(f),
        }
    }
}

// Private Helper Functions ============================================================================================

fn total_chain(chains: &[Arc<Chain>]) -> TotalChain {
    let count_kind = |kind| chains.iter().filter(|c| c.kind() == kind).count() as u32;
    TotalChain::new(
        chains.iter().map(|c| c.carbon_count()).sum(),
        chains.iter().map(|c| c.double_bond().count()).sum(),
        chains.iter().map(|c| c.oxidized().count()).sum(),
        count_kind(ChainKind::Acyl),
        count_kind(ChainKind::Alkyl),
        count_kind(ChainKind::Sphingo),
    )
}

// Module Tests ========================================================================================================
