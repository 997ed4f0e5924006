// Standard Library Imports
use std::{collections::BTreeSet, iter};

// External Crate Imports
use itertools::{Either, Itertools};
use lipochem::DoubleBond;

// Local Crate Imports
use super::is_spaced_from;

/// Where sphingoid bases usually carry their double bonds
const ANCHORS: [u32; 3] = [4, 8, 14];

/// Once every anchor is taken, further double bonds go on even carbons from here on
const FIRST_EXTRA_POSITION: u32 = 6;

// Public API ==========================================================================================================

pub(super) fn complete(
    carbon_count: u32,
    double_bond: &DoubleBond,
) -> impl Iterator<Item = DoubleBond> + Clone + use<> {
    let undecided = double_bond.undecided_count() as usize;
    if undecided == 0 {
        return Either::Left(iter::once(double_bond.clone()));
    }

    let count = double_bond.count();
    let fixed = double_bond.positions().clone();
    let open_anchors = ANCHORS.into_iter().filter({
        let fixed = fixed.clone();
        move |&a| a < carbon_count && is_spaced_from(a, &fixed)
    });

    let completions = open_anchors
        .powerset()
        .take_while(move |anchors| anchors.len() <= undecided)
        .flat_map(move |anchors| {
            let mut positions = fixed.clone();
            positions.extend(&anchors);
            extend_past_anchors(carbon_count, positions, undecided - anchors.len())
        })
        .filter_map(move |positions| DoubleBond::new(count, positions).ok())
        .unique();
    Either::Right(completions)
}

// Private Helper Functions ============================================================================================

fn extend_past_anchors(
    carbon_count: u32,
    positions: BTreeSet<u32>,
    remaining: usize,
) -> impl Iterator<Item = BTreeSet<u32>> + Clone {
    if remaining == 0 {
        return Either::Left(Some(positions).into_iter());
    }

    // Without all of the anchors, there's nowhere else for the remaining double bonds to go
    if !ANCHORS.iter().all(|a| positions.contains(a)) {
        return Either::Left(None.into_iter());
    }

    let extras = (FIRST_EXTRA_POSITION..carbon_count)
        .step_by(2)
        .filter(|&p| is_spaced_from(p, &positions))
        .collect_vec();
    // NOTE: `.combinations()` allocates an index for every position it picks, so requests that can't be met stop here
    if remaining > extras.len() {
        return Either::Left(None.into_iter());
    }

    Either::Right(extras.into_iter().combinations(remaining).map(move |extra| {
        let mut positions = positions.clone();
        positions.extend(extra);
        positions
    }))
}

// Module Tests ========================================================================================================
