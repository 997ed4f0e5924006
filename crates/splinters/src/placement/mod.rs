//! Where double bonds and oxidations can go on each kind of chain

mod omega;
mod oxidation;
mod sphingoid;

// Standard Library Imports
use std::{collections::BTreeSet, iter};

// External Crate Imports
use itertools::{Either, iproduct};
use lipochem::{Chain, ChainExceptionDatabase, ChainKind};

// Local Crate Imports
use crate::ChainGenerator;

// Public API ==========================================================================================================

/// Places acyl and alkyl double bonds as methylene-interrupted runs counted back from the methyl end (plus any curated
/// exceptions), and sphingoid double bonds at their usual 4, 8, and 14 positions
#[derive(Copy, Clone, Debug)]
pub struct StandardChainGenerator<'e> {
    exceptions: &'e ChainExceptionDatabase,
}

impl<'e> StandardChainGenerator<'e> {
    #[must_use]
    pub const fn new(exceptions: &'e ChainExceptionDatabase) -> Self {
        Self { exceptions }
    }

    #[must_use]
    pub const fn exceptions(&self) -> &'e ChainExceptionDatabase {
        self.exceptions
    }
}

impl ChainGenerator for StandardChainGenerator<'_> {
    fn carbon_is_valid(&self, carbon_count: u32) -> bool {
        carbon_count > 0
    }

    fn double_bond_is_valid(&self, carbon_count: u32, double_bond_count: u32) -> bool {
        double_bond_count
            .checked_add(1)
            .and_then(|n| n.checked_mul(3))
            .is_some_and(|needed| carbon_count >= needed)
    }

    fn generate(&self, chain: &Chain) -> impl Iterator<Item = Chain> {
        if chain.is_decided() {
            return Either::Left(iter::once(chain.clone()));
        }

        let carbon_count = chain.carbon_count();
        let double_bond = chain.double_bond();
        let double_bonds = match chain.kind() {
            ChainKind::Acyl => Either::Left(Either::Left(omega::complete(
                carbon_count,
                double_bond,
                self.exceptions,
            ))),
            ChainKind::Alkyl => Either::Left(Either::Right(omega::complete_ether(
                carbon_count,
                double_bond,
                self.exceptions,
            ))),
            ChainKind::Sphingo => Either::Right(sphingoid::complete(carbon_count, double_bond)),
        };
        let oxidations = oxidation::complete(chain.kind(), carbon_count, chain.oxidized());

        // NOTE: Every completion keeps its positions on the chain, so rebuilding can't actually fail here. Nothing is
        // placed until it's pulled
        Either::Right(
            iproduct!(double_bonds, oxidations).filter_map(move |(db, ox)| chain.rebuild(db, ox).ok()),
        )
    }
}

// Private Helper Functions ============================================================================================

/// A new double bond needs at least one single bond between it and every existing double bond
fn is_spaced_from(position: u32, fixed: &BTreeSet<u32>) -> bool {
    fixed.iter().all(|&f| f.abs_diff(position) >= 2)
}

// Module Tests ========================================================================================================
