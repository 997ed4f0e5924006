// External Crate Imports
use itertools::{Either, Itertools};
use lipochem::{ChainKind, Oxidized};

// Public API ==========================================================================================================

// NOTE: C1 of an acyl chain is the carbonyl carbon, and C1 and C3 of a sphingoid base are already hydroxylated
const fn first_oxidizable(kind: ChainKind) -> u32 {
    match kind {
        ChainKind::Acyl | ChainKind::Alkyl => 2,
        ChainKind::Sphingo => 4,
    }
}

pub(super) fn complete(
    kind: ChainKind,
    carbon_count: u32,
    oxidized: &Oxidized,
) -> impl Iterator<Item = Oxidized> + Clone + use<> {
    let undecided = oxidized.undecided_count() as usize;
    let first = first_oxidizable(kind);
    let fixed = oxidized.positions().clone();

    // NOTE: `.combinations()` allocates an index for every site it picks, so requests that can't be met stop here
    let site_count = carbon_count.checked_sub(first).map_or(0, |n| n as usize + 1);
    let open_site_count = site_count.saturating_sub(fixed.range(first..).count());
    if undecided == 0 || undecided > open_site_count {
        let decided = (undecided == 0).then(|| oxidized.clone());
        return Either::Left(decided.into_iter());
    }

    let count = oxidized.count();
    let open_sites = (first..=carbon_count).filter({
        let fixed = fixed.clone();
        move |p| !fixed.contains(p)
    });
    Either::Right(
        open_sites
            .combinations(undecided)
            .filter_map(move |extra| Oxidized::new(count, fixed.iter().copied().chain(extra)).ok()),
    )
}

// Module Tests ========================================================================================================
