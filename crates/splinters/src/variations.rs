// Standard Library Imports
use std::{iter, sync::Arc};

// External Crate Imports
use itertools::{Either, Itertools, iproduct};
use lipochem::{AnyChains, Chain, ChainKind, MolecularSpeciesLevelChains, PositionLevelChains, TotalChain};
use static_assertions::assert_impl_all;

// Local Crate Imports
use crate::{
    ChainGenerator, StandardChainGenerator, TotalChainVariationGenerator,
    cache::ChainCache,
    candidates::{ChainCandidate, ChainShape},
    distributor::{Distribution, distribute},
};

/// The shortest chain `ChainVariationGenerator` will consider, unless told otherwise
pub const DEFAULT_MIN_LENGTH: u32 = 2;

// Public API ==========================================================================================================

#[derive(Debug)]
pub struct ChainVariationGenerator<G> {
    generator: G,
    min_length: u32,
    cache: ChainCache,
}

// One generator (and its cache) can be shared between threads
assert_impl_all!(ChainVariationGenerator<StandardChainGenerator<'static>>: Send, Sync);

impl<G: ChainGenerator> ChainVariationGenerator<G> {
    pub fn new(generator: G, min_length: u32) -> Self {
        log::debug!("building a chain variation generator with a minimum chain length of {min_length}");
        Self {
            generator,
            min_length,
            cache: ChainCache::default(),
        }
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    #[must_use]
    pub const fn min_length(&self) -> u32 {
        self.min_length
    }

    /// The shared chain with this composition, and with its double bonds and extra oxidations left undecided. Every
    /// call with the same arguments returns the same `Arc`
    #[must_use]
    pub fn chain(
        &self,
        kind: ChainKind,
        carbon_count: u32,
        double_bond_count: u32,
        oxidized_count: u32,
    ) -> Option<Arc<Chain>> {
        let shape = ChainShape::new(carbon_count, double_bond_count, oxidized_count);
        self.cache.chain(kind, shape)
    }

    /// Dispatches to `.permutate()` or `.product()`, depending on how much is known about `chains`
    pub fn variations(&self, chains: &AnyChains) -> impl Iterator<Item = AnyChains> {
        match chains {
            AnyChains::MolecularSpecies(c) => Either::Left(self.permutate(c)),
            AnyChains::Position(c) => Either::Right(self.product(c)),
        }
    }

    fn chain_sets(&self, kind: ChainKind, candidate: ChainCandidate) -> Vec<Vec<Arc<Chain>>> {
        candidate
            .split(&self.generator, self.min_length)
            .filter_map(|shapes| {
                shapes
                    .into_iter()
                    .map(|shape| self.cache.chain(kind, shape))
                    .collect()
            })
            .collect()
    }

    fn separate_distribution(&self, distribution: Distribution, has_sphingo: bool) -> impl Iterator<Item = AnyChains> {
        let acyl = self.chain_sets(ChainKind::Acyl, distribution.acyl);
        let alkyl = self.chain_sets(ChainKind::Alkyl, distribution.alkyl);
        let sphingo = self.chain_sets(ChainKind::Sphingo, distribution.sphingo);

        iproduct!(sphingo, acyl, alkyl).map(move |(sphingo, acyl, alkyl)| {
            if has_sphingo {
                PositionLevelChains::new(sphingo.into_iter().chain(acyl).chain(alkyl)).into()
            } else {
                MolecularSpeciesLevelChains::new(alkyl.into_iter().chain(acyl)).into()
            }
        })
    }

    // NOTE: Chains that are already decided are reused as they are, and every other chain is swapped for each of its
    // completions in turn
    fn complete(&self, chains: &[Arc<Chain>]) -> impl Iterator<Item = Vec<Arc<Chain>>> {
        if chains.iter().all(|c| c.is_decided()) {
            return Either::Left(iter::empty());
        }

        let completions = chains.iter().map(|chain| {
            if chain.is_decided() {
                vec![Arc::clone(chain)]
            } else {
                self.generator.generate(chain).map(Arc::new).collect()
            }
        });
        let completions: Vec<Vec<_>> = completions.collect();
        Either::Right(completions.into_iter().multi_cartesian_product())
    }
}

impl<G: ChainGenerator> TotalChainVariationGenerator for ChainVariationGenerator<G> {
    fn separate(&self, total_chain: &TotalChain) -> impl Iterator<Item = AnyChains> {
        let total_chain = *total_chain;
        let has_sphingo = total_chain.sphingo_chain_count() > 0;

        distribute(total_chain, self.min_length).flat_map(move |distribution| {
            log::trace!("separating {total_chain} as {distribution:?}");
            self.separate_distribution(distribution, has_sphingo)
        })
    }

    fn permutate(&self, chains: &MolecularSpeciesLevelChains) -> impl Iterator<Item = AnyChains> {
        self.complete(chains.chains())
            .map(MolecularSpeciesLevelChains::new)
            .unique_by(MolecularSpeciesLevelChains::canonical)
            .map(AnyChains::from)
    }

    fn product(&self, chains: &PositionLevelChains) -> impl Iterator<Item = AnyChains> {
        self.complete(chains.chains())
            .map(PositionLevelChains::new)
            .unique()
            .map(AnyChains::from)
    }
}

// Module Tests ========================================================================================================
