// Standard Library Imports
use std::iter;

// External Crate Imports
use itertools::{Either, Itertools};
use lipochem::{ChainExceptionDatabase, DoubleBond};

// Local Crate Imports
use super::is_spaced_from;

/// The double bond that turns an ether lipid into a plasmalogen
const VINYL_ETHER_POSITION: u32 = 1;

// Public API ==========================================================================================================

// NOTE: Undecided bonds are placed as a single run, each bond three carbons from the last. The run slides back from the
// methyl end one step at a time (with its top bond at `carbon_count - 3`, then `- 6`, ...), stopping as soon as its
// lowest bond would have to fall below C3
pub(super) fn complete<'e>(
    carbon_count: u32,
    double_bond: &DoubleBond,
    exceptions: &'e ChainExceptionDatabase,
) -> impl Iterator<Item = DoubleBond> + Clone + use<'e> {
    let undecided = double_bond.undecided_count();
    if undecided == 0 {
        return Either::Left(iter::once(double_bond.clone()));
    }

    let count = double_bond.count();
    let fixed = double_bond.positions().clone();

    let runs = (1..)
        .map_while(move |step| lowest_in_run(carbon_count, undecided, step))
        .map(move |lowest| (0..undecided).map(move |i| lowest + 3 * i))
        .filter({
            let fixed = fixed.clone();
            move |run| run.clone().all(|p| is_spaced_from(p, &fixed))
        })
        .filter_map({
            let fixed = fixed.clone();
            move |run| DoubleBond::new(count, fixed.iter().copied().chain(run)).ok()
        });

    let exceptions = exceptions
        .lookup(carbon_count, count)
        .iter()
        .filter(move |db| db.positions().is_superset(&fixed))
        .cloned();

    Either::Right(runs.chain(exceptions).unique())
}

/// Ether chains can be completed like any other chain, or as plasmalogens with one of their double bonds at C1
pub(super) fn complete_ether<'e>(
    carbon_count: u32,
    double_bond: &DoubleBond,
    exceptions: &'e ChainExceptionDatabase,
) -> impl Iterator<Item = DoubleBond> + Clone + use<'e> {
    let ethers = complete(carbon_count, double_bond, exceptions);
    if double_bond.is_decided() || double_bond.contains(VINYL_ETHER_POSITION) {
        return Either::Left(ethers);
    }

    // NOTE: This fails (and there are no plasmalogens) if C2 already carries a double bond
    let vinyl_ether = DoubleBond::new(
        double_bond.count(),
        double_bond.positions().iter().copied().chain([VINYL_ETHER_POSITION]),
    );
    let plasmalogens = vinyl_ether
        .ok()
        .into_iter()
        .flat_map(move |db| complete(carbon_count, &db, exceptions));

    Either::Right(ethers.chain(plasmalogens).unique())
}

// Private Helper Functions ============================================================================================

/// The lowest bond of the `step`th run, or `None` once that would fall below C3 (or the run can't fit at all)
fn lowest_in_run(carbon_count: u32, undecided: u32, step: u32) -> Option<u32> {
    let offset = step.checked_add(undecided - 1)?.checked_mul(3)?;
    carbon_count.checked_sub(offset).filter(|&lowest| lowest >= 3)
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<ChainExceptionDatabase> = Lazy::new(ChainExceptionDatabase::default);
    static NO_EXCEPTIONS: Lazy<ChainExceptionDatabase> =
        Lazy::new(|| ChainExceptionDatabase::new("empty.kdl", "").unwrap());

    fn positions(double_bonds: impl Iterator<Item = DoubleBond>) -> Vec<Vec<u32>> {
        double_bonds
            .map(|db| db.positions().iter().copied().collect())
            .collect()
    }

    #[test]
    fn methylene_interrupted_runs() {
        let complete = |carbons, count| positions(complete(carbons, &DoubleBond::undecided(count), &NO_EXCEPTIONS));

        assert_eq!(complete(18, 1), vec![vec![15], vec![12], vec![9], vec![6], vec![3]]);
        assert_eq!(
            complete(18, 2),
            vec![vec![12, 15], vec![9, 12], vec![6, 9], vec![3, 6]]
        );
        assert_eq!(complete(18, 3), vec![vec![9, 12, 15], vec![6, 9, 12], vec![3, 6, 9]]);
        assert_eq!(
            complete(20, 4),
            vec![vec![8, 11, 14, 17], vec![5, 8, 11, 14]]
        );
        // The lowest bond can't fall below C3, so the run stops early on chains that aren't a multiple of three
        assert_eq!(complete(17, 1), vec![vec![14], vec![11], vec![8], vec![5]]);
        assert_eq!(complete(6, 1), vec![vec![3]]);
        assert!(complete(5, 1).is_empty());
        assert!(complete(14, 4).is_empty());
        // Runs that could never fit are rejected without overflowing
        assert!(complete(18, 2_000_000_000).is_empty());
        assert!(complete(u32::MAX, u32::MAX).is_empty());

        let mut longest = super::complete(u32::MAX, &DoubleBond::undecided(1), &NO_EXCEPTIONS);
        let top = longest.next().map(|db| db.positions().iter().copied().collect_vec());
        assert_eq!(top, Some(vec![u32::MAX - 3]));
    }

    #[test]
    fn fixed_positions_are_kept() {
        let partial = DoubleBond::new(3, [5]).unwrap();
        let completions = positions(complete(20, &partial, &NO_EXCEPTIONS));
        assert_eq!(
            completions,
            vec![vec![5, 14, 17], vec![5, 11, 14], vec![5, 8, 11]]
        );

        // The run can't end up right next to the bond that's already at C16
        let crowded = DoubleBond::new(3, [16]).unwrap();
        let completions = positions(complete(20, &crowded, &NO_EXCEPTIONS));
        assert_eq!(
            completions,
            vec![vec![11, 14, 16], vec![8, 11, 16], vec![5, 8, 16]]
        );
    }

    #[test]
    fn curated_exceptions() {
        let oleoyl = positions(complete(18, &DoubleBond::undecided(1), &DB));
        assert_eq!(oleoyl.last(), Some(&vec![11]));
        assert_eq!(oleoyl.len(), 6);

        // Exceptions must contain every fixed position
        let partial = DoubleBond::new(2, [12]).unwrap();
        let completions = positions(complete(18, &partial, &DB));
        assert_eq!(
            completions,
            vec![vec![12, 15], vec![9, 12], vec![6, 12], vec![3, 12], vec![10, 12]]
        );
    }

    #[test]
    fn ether_completions() {
        let ethers = positions(complete_ether(12, &DoubleBond::undecided(2), &NO_EXCEPTIONS));
        assert_eq!(
            ethers,
            vec![vec![6, 9], vec![3, 6], vec![1, 9], vec![1, 6], vec![1, 3]]
        );

        let fixed = DoubleBond::new(2, [1]).unwrap();
        let plasmalogens = positions(complete_ether(12, &fixed, &NO_EXCEPTIONS));
        assert_eq!(plasmalogens, vec![vec![1, 9], vec![1, 6], vec![1, 3]]);

        // A double bond at C2 rules out plasmalogens entirely
        let blocked = DoubleBond::new(2, [2]).unwrap();
        let ethers = positions(complete_ether(12, &blocked, &NO_EXCEPTIONS));
        assert_eq!(ethers, vec![vec![2, 9], vec![2, 6]]);
    }
}
