// Standard Library Imports
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use super::positions::PositionList;
use crate::{
    AcylChain, AlkylChain, Chain, ChainKind, DoubleBond, LipochemError, Oxidized, Result,
    SphingoChain,
};

/// The hydroxyl groups every sphingoid base carries at C1 and C3
pub const SPHINGOID_BACKBONE: [u32; 2] = [1, 3];

// Public API ==========================================================================================================

macro_rules! chain_accessor_impls {
    ($($chain_type:ty),+ $(,)?) => {
        $(
            impl $chain_type {
                #[must_use]
                pub const fn carbon_count(&self) -> u32 {
                    self.carbon_count
                }

                #[must_use]
                pub const fn double_bond(&self) -> &DoubleBond {
                    &self.double_bond
                }

                #[must_use]
                pub const fn oxidized(&self) -> &Oxidized {
                    &self.oxidized
                }

                #[must_use]
                pub fn is_decided(&self) -> bool {
                    self.double_bond.is_decided() && self.oxidized.is_decided()
                }
            }
        )+
    };
}

chain_accessor_impls!(AcylChain, AlkylChain, SphingoChain);

impl AcylChain {
    pub fn new(carbon_count: u32, double_bond: DoubleBond, oxidized: Oxidized) -> Result<Self> {
        check_positions(carbon_count, &double_bond, &oxidized)?;
        Ok(Self {
            carbon_count,
            double_bond,
            oxidized,
        })
    }
}

impl AlkylChain {
    pub fn new(carbon_count: u32, double_bond: DoubleBond, oxidized: Oxidized) -> Result<Self> {
        check_positions(carbon_count, &double_bond, &oxidized)?;
        Ok(Self {
            carbon_count,
            double_bond,
            oxidized,
        })
    }

    /// Alkyl chains carrying a vinyl-ether (Δ1) double bond are plasmalogens
    #[must_use]
    pub fn is_plasmalogen(&self) -> bool {
        self.double_bond.contains(1)
    }
}

impl SphingoChain {
    /// Backbone hydroxyls at C1 and C3 are added to `oxidized` if they aren't already present
    pub fn new(carbon_count: u32, double_bond: DoubleBond, oxidized: Oxidized) -> Result<Self> {
        let count = oxidized.count();
        if count < 2 {
            return Err(Box::new(LipochemError::MissingBackbone(count)));
        }

        let positions = oxidized.positions().iter().copied().chain(SPHINGOID_BACKBONE);
        let oxidized = Oxidized::new(count, positions)?;

        check_positions(carbon_count, &double_bond, &oxidized)?;
        Ok(Self {
            carbon_count,
            double_bond,
            oxidized,
        })
    }

    fn extra_hydroxyls(&self) -> BTreeSet<u32> {
        let backbone = BTreeSet::from(SPHINGOID_BACKBONE);
        self.oxidized.positions() - &backbone
    }
}

// NOTE: There are only three kinds of chain, so a crate like `enum_dispatch` isn't worth the dependency here
macro_rules! dispatch {
    ($self:expr, $method:ident) => {
        match $self {
            Chain::Acyl(c) => c.$method(),
            Chain::Alkyl(c) => c.$method(),
            Chain::Sphingo(c) => c.$method(),
        }
    };
}

impl Chain {
    pub fn new(
        kind: ChainKind,
        carbon_count: u32,
        double_bond: DoubleBond,
        oxidized: Oxidized,
    ) -> Result<Self> {
        Ok(match kind {
            ChainKind::Acyl => AcylChain::new(carbon_count, double_bond, oxidized)?.into(),
            ChainKind::Alkyl => AlkylChain::new(carbon_count, double_bond, oxidized)?.into(),
            ChainKind::Sphingo => SphingoChain::new(carbon_count, double_bond, oxidized)?.into(),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ChainKind {
        match self {
            Self::Acyl(_) => ChainKind::Acyl,
            Self::Alkyl(_) => ChainKind::Alkyl,
            Self::Sphingo(_) => ChainKind::Sphingo,
        }
    }

    #[must_use]
    pub const fn carbon_count(&self) -> u32 {
        dispatch!(self, carbon_count)
    }

    #[must_use]
    pub const fn double_bond(&self) -> &DoubleBond {
        dispatch!(self, double_bond)
    }

    #[must_use]
    pub const fn oxidized(&self) -> &Oxidized {
        dispatch!(self, oxidized)
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        dispatch!(self, is_decided)
    }

    /// Builds a chain of the same kind and length, but with a different set of double bonds and oxidations
    pub fn rebuild(&self, double_bond: DoubleBond, oxidized: Oxidized) -> Result<Self> {
        Self::new(self.kind(), self.carbon_count(), double_bond, oxidized)
    }
}

// Display Trait Implementations =======================================================================================

impl Display for AcylChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.carbon_count, self.double_bond, self.oxidized)
    }
}

// NOTE: The Δ1 double bond of a plasmalogen is folded into the `P-` prefix, so `O-18:1(1)` is written as `P-18:0`
impl Display for AlkylChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            carbon_count,
            ref double_bond,
            ref oxidized,
        } = *self;

        if self.is_plasmalogen() {
            let mut others = double_bond.positions().clone();
            others.remove(&1);
            let count = double_bond.count() - 1;
            write!(f, "P-{carbon_count}:{count}{}{oxidized}", PositionList(&others))
        } else {
            write!(f, "O-{carbon_count}:{double_bond}{oxidized}")
        }
    }
}

impl Display for SphingoChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{};O{}",
            self.carbon_count,
            self.double_bond,
            self.oxidized.count()
        )?;

        let extra_hydroxyls = self.extra_hydroxyls();
        if !extra_hydroxyls.is_empty() {
            let hydroxyls = extra_hydroxyls.iter().map(|p| format!("{p}OH")).join(",");
            write!(f, "({hydroxyls})")?;
        }

        Ok(())
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acyl(c) => c.fmt(f),
            Self::Alkyl(c) => c.fmt(f),
            Self::Sphingo(c) => c.fmt(f),
        }
    }
}

// Private Helper Functions ============================================================================================

fn check_positions(carbon_count: u32, double_bond: &DoubleBond, oxidized: &Oxidized) -> Result<()> {
    // NOTE: A double bond at position `p` joins carbons `p` and `p + 1`, so the last carbon can't start one
    double_bond.check_range(1, carbon_count.saturating_sub(1), carbon_count)?;
    oxidized.check_range(1, carbon_count, carbon_count)
}

// Module Tests ========================================================================================================
