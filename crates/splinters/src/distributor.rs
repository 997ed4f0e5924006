// Standard Library Imports
use std::iter;

// External Crate Imports
use itertools::{Either, iproduct};
use lipochem::TotalChain;

// Local Crate Imports
use crate::candidates::ChainCandidate;

/// Every sphingoid base carries at least its C1 and C3 hydroxyls
pub(crate) const SPHINGOID_OXIDIZED_COUNT: u32 = 2;

// Public API ==========================================================================================================

/// One way of sharing a lipid's total composition between its acyl, alkyl, and sphingoid chains
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Distribution {
    pub acyl: ChainCandidate,
    pub alkyl: ChainCandidate,
    pub sphingo: ChainCandidate,
}

pub(crate) fn distribute(total_chain: TotalChain, min_length: u32) -> impl Iterator<Item = Distribution> {
    let counts = [
        total_chain.acyl_chain_count(),
        total_chain.alkyl_chain_count(),
        total_chain.sphingo_chain_count(),
    ];
    let minimum_oxidized = [0, 0, SPHINGOID_OXIDIZED_COUNT];

    // Minimums too large to even count are certainly too large to meet
    let (Some(carbon_minimums), Some(oxidized_minimums)) = (
        minimum_shares(min_length, counts),
        minimum_shares(SPHINGOID_OXIDIZED_COUNT, [0, 0, counts[2]]),
    ) else {
        return Either::Left(iter::empty());
    };

    let carbons = three_way_splits(total_chain.carbon_count(), carbon_minimums, counts);
    let double_bonds = three_way_splits(total_chain.double_bond_count(), [0; 3], counts);
    let oxidized = three_way_splits(total_chain.oxidized_count(), oxidized_minimums, counts);

    Either::Right(iproduct!(carbons, double_bonds, oxidized).map(move |(c, d, o)| {
        let candidate = |i: usize| ChainCandidate::new(counts[i], c[i], d[i], o[i], minimum_oxidized[i]);
        Distribution {
            acyl: candidate(0),
            alkyl: candidate(1),
            sphingo: candidate(2),
        }
    }))
}

// Private Helper Functions ============================================================================================

fn minimum_shares(per_chain: u32, counts: [u32; 3]) -> Option<[u32; 3]> {
    let [a, b, c] = counts.map(|n| per_chain.checked_mul(n));
    Some([a?, b?, c?])
}

// NOTE: Kinds of chain that aren't present in the lipid (a `count` of 0) always get exactly nothing, and the last kind
// present takes whatever the others leave behind
fn three_way_splits(total: u32, minimums: [u32; 3], counts: [u32; 3]) -> impl Iterator<Item = [u32; 3]> + Clone {
    let present = counts.map(|n| n > 0);
    let last = present.iter().rposition(|&p| p);
    let share = move |i: usize, left: u32| {
        if !present[i] {
            0..=0
        } else if last == Some(i) {
            left..=left
        } else {
            minimums[i]..=left
        }
    };

    share(0, total)
        .flat_map(move |a| share(1, total - a).map(move |b| (a, b)))
        .filter_map(move |(a, b)| {
            let split = [a, b, total.checked_sub(a)?.checked_sub(b)?];
            let fits = (0..3).all(|i| if present[i] { split[i] >= minimums[i] } else { split[i] == 0 });
            fits.then_some(split)
        })
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn splits_between_kinds() {
        assert_eq!(
            three_way_splits(5, [2, 0, 0], [1, 1, 0]).collect_vec(),
            vec![[2, 3, 0], [3, 2, 0], [4, 1, 0], [5, 0, 0]]
        );
        assert_eq!(
            three_way_splits(3, [0, 0, 2], [1, 0, 1]).collect_vec(),
            vec![[0, 0, 3], [1, 0, 2]]
        );
        assert_eq!(three_way_splits(4, [0; 3], [0; 3]).count(), 0);
        assert_eq!(three_way_splits(0, [0; 3], [0; 3]).collect_vec(), vec![[0; 3]]);
        // There isn't enough to meet the minimums
        assert_eq!(three_way_splits(5, [4, 4, 0], [1, 1, 0]).count(), 0);
    }

    #[test]
    fn distribute_diacyl() {
        let distributions = distribute(TotalChain::new(36, 2, 0, 2, 0, 0), 6).collect_vec();
        assert_eq!(distributions.len(), 1);

        let Distribution {
            acyl,
            alkyl,
            sphingo,
        } = distributions[0];
        assert_eq!(acyl, ChainCandidate::new(2, 36, 2, 0, 0));
        assert_eq!(alkyl, ChainCandidate::new(0, 0, 0, 0, 0));
        assert_eq!(sphingo, ChainCandidate::new(0, 0, 0, 0, SPHINGOID_OXIDIZED_COUNT));
    }

    #[test]
    fn distribute_ceramide() {
        let distributions = distribute(TotalChain::new(34, 1, 3, 1, 0, 1), 10).collect_vec();
        // 15 ways to share the carbons (10..=24), 2 for the double bond, and 2 for the extra oxidation
        assert_eq!(distributions.len(), 15 * 2 * 2);
        for Distribution { acyl, sphingo, .. } in distributions {
            assert_eq!(acyl.carbon_count + sphingo.carbon_count, 34);
            assert!(sphingo.oxidized_count >= 2);
            assert_eq!(sphingo.minimum_oxidized_count, 2);
            assert_eq!(acyl.minimum_oxidized_count, 0);
        }
    }

    #[test]
    fn distribute_impossible() {
        // Two chains of at least 20 carbons can't add up to 36
        assert_eq!(distribute(TotalChain::new(36, 2, 0, 2, 0, 0), 20).count(), 0);
        // A sphingoid base needs two oxidations
        assert_eq!(distribute(TotalChain::new(34, 1, 1, 1, 0, 1), 2).count(), 0);
        // Nothing can hold leftover carbons
        assert_eq!(distribute(TotalChain::new(36, 0, 0, 0, 0, 0), 2).count(), 0);
    }

    #[test]
    fn distribute_absurd_counts() {
        // The minimum length of all these chains doesn't fit in a `u32`
        let total_chain = TotalChain::new(u32::MAX, 0, 0, 3_000_000_000, 0, 0);
        assert_eq!(distribute(total_chain, 2).count(), 0);
        let total_chain = TotalChain::new(u32::MAX, 0, u32::MAX, 1, 0, 3_000_000_000);
        assert_eq!(distribute(total_chain, 0).count(), 0);

        // A single chain takes everything, however much that is
        let total_chain = TotalChain::new(18, 2_000_000_000, 0, 1, 0, 0);
        let distributions = distribute(total_chain, 2).collect_vec();
        assert_eq!(distributions.len(), 1);
        assert_eq!(distributions[0].acyl, ChainCandidate::new(1, 18, 2_000_000_000, 0, 0));
        assert_eq!(
            three_way_splits(u32::MAX, [0; 3], [1, 0, 0]).collect_vec(),
            vec![[u32::MAX, 0, 0]]
        );
    }
}
