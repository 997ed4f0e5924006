// Standard Library Imports
use std::iter;

// External Crate Imports
use derive_more::Constructor;

// Local Crate Imports
use crate::ChainGenerator;

// Public API ==========================================================================================================

/// The combined composition of every chain of one kind, before it's been split between those chains
#[derive(Copy, Clone, Eq, PartialEq, Debug, Constructor)]
pub(crate) struct ChainCandidate {
    pub chain_count: u32,
    pub carbon_count: u32,
    pub double_bond_count: u32,
    pub oxidized_count: u32,
    pub minimum_oxidized_count: u32,
}

/// The composition of a single chain, ordered by carbons, then double bonds, then oxidations
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Constructor)]
pub(crate) struct ChainShape {
    pub carbon_count: u32,
    pub double_bond_count: u32,
    pub oxidized_count: u32,
}

impl ChainCandidate {
    /// Every split of this candidate into individual chains, each sorted in non-decreasing order
    pub(crate) fn split<G: ChainGenerator>(
        self,
        generator: &G,
        min_length: u32,
    ) -> impl Iterator<Item = Vec<ChainShape>> {
        let splitter = Splitter {
            generator,
            min_length,
            minimum_oxidized: self.minimum_oxidized_count,
        };
        let prefix = Vec::new();
        splitter.split(Remainder::from(self), ChainShape::default(), prefix)
    }
}

// Private Types =======================================================================================================

struct Splitter<'g, G> {
    generator: &'g G,
    min_length: u32,
    minimum_oxidized: u32,
}

// NOTE: A derived `Copy` would needlessly require `G: Copy`
impl<G> Clone for Splitter<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Splitter<'_, G> {}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Remainder {
    chains: u32,
    carbons: u32,
    double_bonds: u32,
    oxidized: u32,
}

impl From<ChainCandidate> for Remainder {
    fn from(candidate: ChainCandidate) -> Self {
        Self {
            chains: candidate.chain_count,
            carbons: candidate.carbon_count,
            double_bonds: candidate.double_bond_count,
            oxidized: candidate.oxidized_count,
        }
    }
}

impl Remainder {
    const fn is_empty(self) -> bool {
        self.carbons == 0 && self.double_bonds == 0 && self.oxidized == 0
    }

    // NOTE: Only ever called with shapes from `Splitter::next_shapes()`, which never overdraw the remainder
    const fn take(self, shape: ChainShape) -> Self {
        Self {
            chains: self.chains - 1,
            carbons: self.carbons - shape.carbon_count,
            double_bonds: self.double_bonds - shape.double_bond_count,
            oxidized: self.oxidized - shape.oxidized_count,
        }
    }
}

// Recursive Splitting =================================================================================================

type Splits<'g> = Box<dyn Iterator<Item = Vec<ChainShape>> + 'g>;

impl<'g, G: ChainGenerator> Splitter<'g, G> {
    // NOTE: Chains are chosen in non-decreasing order (each new chain is at least `floor`), so every multiset of chains
    // is reached exactly once. Every level clones its own `prefix`, so yielded `Vec`s never alias one another
    fn split(self, remainder: Remainder, floor: ChainShape, prefix: Vec<ChainShape>) -> Splits<'g> {
        if remainder.chains == 0 {
            return if remainder.is_empty() {
                Box::new(iter::once(prefix))
            } else {
                Box::new(iter::empty())
            };
        }

        // Every chain left to place still needs its minimum length and oxidation
        let falls_short = |per_chain: u32, available: u32| {
            per_chain.checked_mul(remainder.chains).is_none_or(|needed| available < needed)
        };
        let too_short = falls_short(self.min_length, remainder.carbons);
        let under_oxidized = falls_short(self.minimum_oxidized, remainder.oxidized);
        if too_short || under_oxidized {
            return Box::new(iter::empty());
        }

        // The last chain has to take whatever is left, so there's no need to search for it
        if remainder.chains == 1 {
            let last = ChainShape::new(remainder.carbons, remainder.double_bonds, remainder.oxidized);
            return if last >= floor && self.is_valid(last) {
                let mut chains = prefix;
                chains.push(last);
                Box::new(iter::once(chains))
            } else {
                Box::new(iter::empty())
            };
        }

        Box::new(self.next_shapes(remainder, floor).flat_map(move |shape| {
            let mut chains = prefix.clone();
            chains.push(shape);
            self.split(remainder.take(shape), shape, chains)
        }))
    }

    fn next_shapes(self, remainder: Remainder, floor: ChainShape) -> impl Iterator<Item = ChainShape> + 'g {
        let Remainder {
            chains,
            carbons,
            double_bonds,
            oxidized,
        } = remainder;
        // Every chain after this one is at least as long, and needs its own share of the oxidation
        let longest = carbons / chains;
        let most_oxidized = oxidized - self.minimum_oxidized * (chains - 1);

        (floor.carbon_count.max(self.min_length)..=longest)
            .filter(move |&c| self.generator.carbon_is_valid(c))
            .flat_map(move |c| {
                let fewest = if c == floor.carbon_count {
                    floor.double_bond_count
                } else {
                    0
                };
                (fewest..=double_bonds)
                    .filter(move |&d| self.generator.double_bond_is_valid(c, d))
                    .map(move |d| (c, d))
            })
            .flat_map(move |(c, d)| {
                let fewest = if (c, d) == (floor.carbon_count, floor.double_bond_count) {
                    floor.oxidized_count.max(self.minimum_oxidized)
                } else {
                    self.minimum_oxidized
                };
                (fewest..=most_oxidized).map(move |o| ChainShape::new(c, d, o))
            })
    }

    fn is_valid(&self, shape: ChainShape) -> bool {
        let ChainShape {
            carbon_count,
            double_bond_count,
            oxidized_count,
        } = shape;
        carbon_count >= self.min_length
            && oxidized_count >= self.minimum_oxidized
            && self.generator.carbon_is_valid(carbon_count)
            && self.generator.double_bond_is_valid(carbon_count, double_bond_count)
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use lipochem::Chain;

    use super::*;

    // Accepts every chain with at least one carbon, and any number of double bonds that fit
    struct Permissive;

    impl ChainGenerator for Permissive {
        fn carbon_is_valid(&self, carbon_count: u32) -> bool {
            carbon_count > 0
        }

        fn double_bond_is_valid(&self, carbon_count: u32, double_bond_count: u32) -> bool {
            double_bond_count < carbon_count
        }

        fn generate(&self, chain: &Chain) -> impl Iterator<Item = Chain> {
            iter::once(chain.clone())
        }
    }

    // The usual "every third carbon" rule
    struct Omega;

    impl ChainGenerator for Omega {
        fn carbon_is_valid(&self, carbon_count: u32) -> bool {
            carbon_count > 0
        }

        fn double_bond_is_valid(&self, carbon_count: u32, double_bond_count: u32) -> bool {
            u64::from(carbon_count) >= 3 * u64::from(double_bond_count) + 3
        }

        fn generate(&self, chain: &Chain) -> impl Iterator<Item = Chain> {
            iter::once(chain.clone())
        }
    }

    fn splits(generator: &impl ChainGenerator, candidate: ChainCandidate, min_length: u32) -> Vec<String> {
        candidate
            .split(generator, min_length)
            .map(|shapes| {
                shapes
                    .iter()
                    .map(|s| format!("{}:{};{}", s.carbon_count, s.double_bond_count, s.oxidized_count))
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn empty_candidates() {
        let nothing = ChainCandidate::new(0, 0, 0, 0, 0);
        assert_eq!(nothing.split(&Permissive, 2).collect_vec(), vec![Vec::new()]);

        let leftovers = ChainCandidate::new(0, 18, 0, 0, 0);
        assert_eq!(leftovers.split(&Permissive, 2).count(), 0);
        let leftovers = ChainCandidate::new(0, 0, 1, 0, 0);
        assert_eq!(leftovers.split(&Permissive, 2).count(), 0);
    }

    #[test]
    fn single_chains() {
        assert_eq!(splits(&Omega, ChainCandidate::new(1, 18, 2, 0, 0), 2), vec!["18:2;0"]);
        assert_eq!(splits(&Omega, ChainCandidate::new(1, 18, 2, 3, 2), 2), vec!["18:2;3"]);
        // Too unsaturated, too short, and under-oxidized
        assert!(splits(&Omega, ChainCandidate::new(1, 8, 3, 0, 0), 2).is_empty());
        assert!(splits(&Omega, ChainCandidate::new(1, 4, 0, 0, 0), 6).is_empty());
        assert!(splits(&Omega, ChainCandidate::new(1, 18, 1, 1, 2), 2).is_empty());
    }

    #[test]
    fn canonical_pairs() {
        let pairs = splits(&Omega, ChainCandidate::new(2, 12, 1, 0, 0), 4);
        assert_eq!(
            pairs,
            vec![
                "4:0;0 8:1;0",
                "5:0;0 7:1;0",
                "6:0;0 6:1;0",
            ]
        );

        let pairs = splits(&Permissive, ChainCandidate::new(2, 4, 0, 1, 0), 2);
        assert_eq!(pairs, vec!["2:0;0 2:0;1"]);
    }

    #[test]
    fn oxidation_minimums() {
        let pairs = splits(&Omega, ChainCandidate::new(2, 36, 0, 5, 2), 18);
        assert_eq!(pairs, vec!["18:0;2 18:0;3"]);

        assert!(splits(&Omega, ChainCandidate::new(2, 36, 0, 3, 2), 18).is_empty());
    }

    #[test]
    fn absurd_candidates() {
        assert!(splits(&Omega, ChainCandidate::new(1, 18, 2_000_000_000, 0, 0), 2).is_empty());
        assert!(splits(&Omega, ChainCandidate::new(3_000_000_000, u32::MAX, 0, 0, 0), 2).is_empty());
        assert!(splits(&Omega, ChainCandidate::new(3_000_000_000, 36, 0, u32::MAX, 2), 0).is_empty());
        assert_eq!(
            splits(&Omega, ChainCandidate::new(1, u32::MAX, 0, 0, 0), u32::MAX),
            vec![format!("{}:0;0", u32::MAX)]
        );
    }

    #[test]
    fn no_repeated_multisets() {
        let triples = ChainCandidate::new(3, 30, 2, 1, 0).split(&Permissive, 2).collect_vec();
        assert!(!triples.is_empty());
        for chains in &triples {
            assert_eq!(chains.len(), 3);
            assert!(chains.iter().tuple_windows().all(|(a, b)| a <= b));
            assert_eq!(chains.iter().map(|s| s.carbon_count).sum::<u32>(), 30);
            assert_eq!(chains.iter().map(|s| s.double_bond_count).sum::<u32>(), 2);
            assert_eq!(chains.iter().map(|s| s.oxidized_count).sum::<u32>(), 1);
        }
        assert!(triples.iter().all_unique());
    }
}
