// Standard Library Imports
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::{DoubleBond, LipochemError, Oxidized, Result};

// Public API ==========================================================================================================

// NOTE: `DoubleBond` and `Oxidized` are both "partially known" sets of positions: a total count, plus however many of
// those positions have actually been pinned down. This macro keeps the shared half of their APIs DRY
macro_rules! position_set_impls {
    ($($set_type:ident => $kind:literal),+ $(,)?) => {
        $(
            impl $set_type {
                #[must_use]
                pub const fn undecided(count: u32) -> Self {
                    Self {
                        count,
                        positions: BTreeSet::new(),
                    }
                }

                #[must_use]
                pub const fn count(&self) -> u32 {
                    self.count
                }

                #[must_use]
                pub const fn positions(&self) -> &BTreeSet<u32> {
                    &self.positions
                }

                #[must_use]
                pub fn undecided_count(&self) -> u32 {
                    // NOTE: Construction guarantees that there are never more positions than `count`
                    self.count - self.positions.len() as u32
                }

                #[must_use]
                pub fn is_decided(&self) -> bool {
                    self.undecided_count() == 0
                }

                #[must_use]
                pub fn contains(&self, position: u32) -> bool {
                    self.positions.contains(&position)
                }

                fn with_checked_count(count: u32, positions: BTreeSet<u32>) -> Result<Self> {
                    if positions.len() > count as usize {
                        return Err(LipochemError::too_many_positions($kind, count, positions.len()));
                    }

                    Ok(Self { count, positions })
                }

                pub(crate) fn check_range(&self, lowest: u32, highest: u32, carbons: u32) -> Result<()> {
                    match self.positions.iter().find(|&&p| p < lowest || p > highest) {
                        Some(&position) => {
                            Err(LipochemError::position_out_of_range($kind, position, carbons))
                        }
                        None => Ok(()),
                    }
                }
            }
        )+
    };
}

position_set_impls!(DoubleBond => "double bond", Oxidized => "oxidation");

impl DoubleBond {
    pub fn new(count: u32, positions: impl IntoIterator<Item = u32>) -> Result<Self> {
        let positions: BTreeSet<_> = positions.into_iter().collect();

        if let Some((a, b)) = positions.iter().tuple_windows().find(|&(a, b)| b - a < 2) {
            return Err(Box::new(LipochemError::CumulatedDoubleBonds(*a, *b)));
        }

        Self::with_checked_count(count, positions)
    }
}

impl Oxidized {
    pub fn new(count: u32, positions: impl IntoIterator<Item = u32>) -> Result<Self> {
        Self::with_checked_count(count, positions.into_iter().collect())
    }
}

// Display Trait Implementations =======================================================================================

pub(crate) struct PositionList<'s>(pub(crate) &'s BTreeSet<u32>);

impl Display for PositionList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.0.is_empty() {
            write!(f, "({})", self.0.iter().join(","))?;
        }
        Ok(())
    }
}

impl Display for DoubleBond {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, PositionList(&self.positions))
    }
}

// NOTE: Unlike double bonds, hydroxyl positions are only written out once all of them are known, as `;O2` is far more
// common in the literature than some half-way mix like `;9OH;O2`
impl Display for Oxidized {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.count {
            0 => Ok(()),
            _ if self.is_decided() => {
                let hydroxyls = self.positions.iter().map(|p| format!("{p}OH")).join(",");
                write!(f, ";{hydroxyls}")
            }
            1 => write!(f, ";O"),
            count => write!(f, ";O{count}"),
        }
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecided_counts() {
        let linoleic = DoubleBond::new(2, [9, 12]).unwrap();
        assert_eq!(linoleic.count(), 2);
        assert_eq!(linoleic.undecided_count(), 0);
        assert!(linoleic.is_decided());
        assert!(linoleic.contains(9));
        assert!(!linoleic.contains(10));

        let partial = DoubleBond::new(4, [5]).unwrap();
        assert_eq!(partial.undecided_count(), 3);
        assert!(!partial.is_decided());

        let unknown = Oxidized::undecided(2);
        assert_eq!(unknown.undecided_count(), 2);
        assert!(unknown.positions().is_empty());
    }

    #[test]
    fn positions_are_sets() {
        // Order and repetition don't matter, only which carbons are involved
        let a = DoubleBond::new(2, [12, 9]).unwrap();
        let b = DoubleBond::new(2, [9, 12, 9]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.positions().iter().copied().collect_vec(), vec![9, 12]);
    }

    #[test]
    fn rejects_invalid_positions() {
        assert_eq!(
            *DoubleBond::new(1, [9, 12]).unwrap_err(),
            LipochemError::TooManyPositions {
                kind: "double bond",
                count: 1,
                positions: 2
            }
        );
        assert_eq!(
            *DoubleBond::new(2, [9, 10]).unwrap_err(),
            LipochemError::CumulatedDoubleBonds(9, 10)
        );
        assert_eq!(
            *Oxidized::new(0, [2]).unwrap_err(),
            LipochemError::TooManyPositions {
                kind: "oxidation",
                count: 0,
                positions: 1
            }
        );
        // Neighbouring hydroxyl groups are perfectly fine
        assert!(Oxidized::new(2, [9, 10]).is_ok());
    }

    #[test]
    fn check_ranges() {
        let bonds = DoubleBond::new(2, [1, 17]).unwrap();
        assert!(bonds.check_range(1, 17, 18).is_ok());
        assert_eq!(
            *bonds.check_range(1, 16, 17).unwrap_err(),
            LipochemError::PositionOutOfRange {
                kind: "double bond",
                position: 17,
                carbons: 17
            }
        );
    }

    #[test]
    fn display_positions() {
        assert_eq!(DoubleBond::undecided(0).to_string(), "0");
        assert_eq!(DoubleBond::undecided(2).to_string(), "2");
        assert_eq!(DoubleBond::new(2, [9, 12]).unwrap().to_string(), "2(9,12)");
        assert_eq!(DoubleBond::new(3, [5]).unwrap().to_string(), "3(5)");

        assert_eq!(Oxidized::undecided(0).to_string(), "");
        assert_eq!(Oxidized::undecided(1).to_string(), ";O");
        assert_eq!(Oxidized::undecided(3).to_string(), ";O3");
        assert_eq!(Oxidized::new(2, [9]).unwrap().to_string(), ";O2");
        assert_eq!(Oxidized::new(2, [9, 12]).unwrap().to_string(), ";9OH,12OH");
    }
}
