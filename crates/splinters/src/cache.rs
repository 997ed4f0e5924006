// Standard Library Imports
use std::sync::Arc;

// External Crate Imports
use ahash::RandomState;
use dashmap::DashMap;
use lipochem::{Chain, ChainKind, DoubleBond, Oxidized};

// Local Crate Imports
use crate::candidates::ChainShape;

type ChainMap = DashMap<ChainShape, Arc<Chain>, RandomState>;

// Public API ==========================================================================================================

/// Hands out one shared chain per kind and shape, with all of its double bonds and extra oxidations left undecided
#[derive(Debug, Default)]
pub(crate) struct ChainCache {
    acyl: ChainMap,
    alkyl: ChainMap,
    sphingo: ChainMap,
}

impl ChainCache {
    /// Returns `None` for shapes that can't be built as a chain of this kind (like an under-oxidized sphingoid base)
    pub(crate) fn chain(&self, kind: ChainKind, shape: ChainShape) -> Option<Arc<Chain>> {
        let chains = self.chains(kind);
        if let Some(chain) = chains.get(&shape) {
            return Some(Arc::clone(chain.value()));
        }

        // NOTE: Another thread might have beaten us here, in which case `.or_try_insert_with()` keeps its chain
        let chain = chains
            .entry(shape)
            .or_try_insert_with(|| {
                log::trace!("caching new {kind} chain {shape:?}");
                Chain::new(
                    kind,
                    shape.carbon_count,
                    DoubleBond::undecided(shape.double_bond_count),
                    Oxidized::undecided(shape.oxidized_count),
                )
                .map(Arc::new)
            })
            .ok()?;
        Some(Arc::clone(chain.value()))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.acyl.len() + self.alkyl.len() + self.sphingo.len()
    }

    const fn chains(&self, kind: ChainKind) -> &ChainMap {
        match kind {
            ChainKind::Acyl => &self.acyl,
            ChainKind::Alkyl => &self.alkyl,
            ChainKind::Sphingo => &self.sphingo,
        }
    }
}

// Module Tests ========================================================================================================
