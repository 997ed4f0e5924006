//! A table of curated, non-methylene-interrupted double-bond patterns, keyed by chain length and unsaturation

// Standard Library Imports
use std::collections::{hash_map::Entry, BTreeSet};

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use knuffel::{span::Span, Decode};
use miette::{Diagnostic, LabeledSpan, NamedSource, Result};
use thiserror::Error;

// Local Crate Imports
use crate::{DoubleBond, LipochemError};

/// The chain exception table bundled with this crate
pub const DEFAULT_KDL: &str = include_str!("../data/chain_exceptions.kdl");

// Public API ==========================================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ChainExceptionDatabase {
    entries: HashMap<(u32, u32), Vec<DoubleBond>>,
}

impl ChainExceptionDatabase {
    pub fn new(file_name: impl AsRef<str>, kdl_text: impl AsRef<str>) -> Result<Self> {
        let parsed_db: ChainExceptionsKdl = knuffel::parse(file_name.as_ref(), kdl_text.as_ref())?;
        let db = parsed_db
            .validate()
            .map_err(|e| e.finalize(file_name.as_ref(), kdl_text))?;

        log::debug!(
            "loaded {} chain exception entries from {}",
            db.len(),
            file_name.as_ref()
        );
        Ok(db)
    }

    /// Every curated double-bond pattern for a chain with `carbon_count` carbons and `double_bond_count` double bonds
    #[must_use]
    pub fn lookup(&self, carbon_count: u32, double_bond_count: u32) -> &[DoubleBond] {
        self.entries
            .get(&(carbon_count, double_bond_count))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChainExceptionDatabase {
    fn default() -> Self {
        // SAFETY: The bundled table is parsed by the `bundled_exceptions` test, so this `.unwrap()` can never panic
        Self::new("chain_exceptions.kdl", DEFAULT_KDL).unwrap()
    }
}

// KDL File Schema =====================================================================================================

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct ChainExceptionsKdl {
    #[knuffel(children(name = "chain"))]
    chains: Vec<ChainKdl>,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct ChainKdl {
    #[knuffel(span)]
    span: Span,
    #[knuffel(property)]
    carbons: u32,
    #[knuffel(property(name = "double-bonds"))]
    double_bonds: u32,
    #[knuffel(children(name = "positions", non_empty))]
    positions: Vec<PositionsKdl>,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct PositionsKdl {
    #[knuffel(span)]
    span: Span,
    #[knuffel(arguments)]
    positions: Vec<u32>,
}

// Chain Exception Validation ==========================================================================================

type ExceptionResult<T> = std::result::Result<T, ChainExceptionErrorKind>;

impl ChainExceptionsKdl {
    fn validate(self) -> ExceptionResult<ChainExceptionDatabase> {
        let mut seen_chains = HashMap::with_capacity(self.chains.len());

        for chain in self.chains {
            let key = (chain.carbons, chain.double_bonds);
            match seen_chains.entry(key) {
                Entry::Occupied(e) => {
                    let (first_defined_at, _) = e.remove();
                    return Err(ChainExceptionErrorKind::DuplicateChain(
                        first_defined_at,
                        chain.span,
                        key.0,
                        key.1,
                    ));
                }
                Entry::Vacant(e) => {
                    let span = chain.span;
                    e.insert((span, chain.validate()?));
                }
            };
        }

        let entries = seen_chains
            .into_iter()
            .map(|(k, (_, v))| (k, v))
            .collect();
        Ok(ChainExceptionDatabase { entries })
    }
}

impl ChainKdl {
    fn validate(self) -> ExceptionResult<Vec<DoubleBond>> {
        let mut seen_sets: Vec<(DoubleBond, Span)> = Vec::with_capacity(self.positions.len());

        for positions in self.positions {
            let span = positions.span;
            let double_bond = positions.validate(self.carbons, self.double_bonds)?;

            if let Some((_, first_defined_at)) = seen_sets.iter().find(|(db, _)| db == &double_bond) {
                return Err(ChainExceptionErrorKind::DuplicatePositions(
                    *first_defined_at,
                    span,
                ));
            }
            seen_sets.push((double_bond, span));
        }

        Ok(seen_sets.into_iter().map(|(db, _)| db).collect())
    }
}

impl PositionsKdl {
    fn validate(self, carbons: u32, double_bonds: u32) -> ExceptionResult<DoubleBond> {
        let span = self.span;
        let found = self.positions.len();
        if found != double_bonds as usize {
            return Err(ChainExceptionErrorKind::WrongBondCount(span, double_bonds, found));
        }

        let mut unique_positions = BTreeSet::new();
        for position in self.positions {
            if !unique_positions.insert(position) {
                return Err(ChainExceptionErrorKind::RepeatedPosition(span, position));
            }
            if !(1..carbons).contains(&position) {
                return Err(ChainExceptionErrorKind::PositionOutOfRange(span, position, carbons));
            }
        }

        DoubleBond::new(double_bonds, unique_positions)
            .map_err(|e| ChainExceptionErrorKind::InvalidPositions(span, *e))
    }
}

// Validation Error Types and Trait Implementations  ===================================================================

#[derive(Debug, Error)]
#[error("failed to validate chain exception file")]
struct ChainExceptionError {
    kdl: NamedSource<String>,
    #[source]
    kind: ChainExceptionErrorKind,
}

// NOTE: One validation error can point at several KDL nodes (both copies of a duplicated `chain`, for example), and how
// many depends on `self.kind`. `#[derive(Diagnostic)]` only supports a fixed set of `#[label]` fields, so the labels
// are collected from `ChainExceptionErrorKind::labels()` here instead
impl Diagnostic for ChainExceptionError {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.kdl)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(self.kind.labels().into_iter().map(|(s, l)| {
            LabeledSpan::new_with_span(Some(l.to_owned()), *s)
        })))
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Some(&self.kind)
    }
}

#[derive(Clone, Debug, Diagnostic, Error)]
enum ChainExceptionErrorKind {
    #[error("exceptions for {2}:{3} chains have already been defined")]
    #[diagnostic(help("merge the position sets of both entries into a single `chain` node"))]
    DuplicateChain(Span, Span, u32, u32),

    #[error("expected {1} double bond positions, but found {2}")]
    #[diagnostic(help("every position set must place all of the chain's double bonds"))]
    WrongBondCount(Span, u32, usize),

    #[error("the double bond position {1} was listed more than once")]
    #[diagnostic(help("double-check for typos, or remove the repeated position"))]
    RepeatedPosition(Span, u32),

    #[error("the double bond position {1} does not fit on a chain of {2} carbons")]
    #[diagnostic(help("double bond positions must fall between 1 and one less than the number of carbons"))]
    PositionOutOfRange(Span, u32, u32),

    #[error("this set of double bond positions has already been listed")]
    #[diagnostic(help("remove the duplicate position set"))]
    DuplicatePositions(Span, Span),

    #[error("chain exception file contained an invalid set of double bond positions")]
    InvalidPositions(
        Span,
        #[source]
        #[diagnostic_source]
        LipochemError,
    ),
}

impl ChainExceptionErrorKind {
    fn labels(&self) -> Vec<(&Span, &'static str)> {
        match self {
            Self::DuplicateChain(s1, s2, _, _) | Self::DuplicatePositions(s1, s2) => {
                vec![(s1, "first defined here"), (s2, "then again here")]
            }
            Self::WrongBondCount(s, _, _) => vec![(s, "wrong number of positions")],
            Self::RepeatedPosition(s, _) => vec![(s, "repeated position")],
            Self::PositionOutOfRange(s, _, _) => vec![(s, "position out of range")],
            Self::InvalidPositions(s, _) => vec![(s, "invalid positions")],
        }
    }

    fn finalize(self, file_name: impl AsRef<str>, kdl: impl AsRef<str>) -> ChainExceptionError {
        let kdl = NamedSource::new(file_name, kdl.as_ref().to_owned());
        ChainExceptionError { kdl, kind: self }
    }
}

// Module Tests ========================================================================================================
