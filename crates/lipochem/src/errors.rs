use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Box<LipochemError>> = std::result::Result<T, E>;

// FIXME: Maybe just rename this to be `Error`?
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum LipochemError {
    #[diagnostic(help("remove some of the fixed positions, or raise the total number of {kind}s"))]
    #[error("{positions} {kind} positions were fixed, but only {count} {kind}s are present")]
    TooManyPositions {
        kind: &'static str,
        count: u32,
        positions: usize,
    },

    #[diagnostic(help("positions are numbered from 1 and must fall on a carbon of the chain"))]
    #[error("the {kind} position {position} does not fit on a chain of {carbons} carbons")]
    PositionOutOfRange {
        kind: &'static str,
        position: u32,
        carbons: u32,
    },

    #[diagnostic(help("double bonds must be separated by at least one single bond"))]
    #[error("the double bonds at positions {0} and {1} are cumulated")]
    CumulatedDoubleBonds(u32, u32),

    #[diagnostic(help(
        "sphingoid bases carry hydroxyl groups at carbons 1 and 3, so need an oxidation count of at least 2"
    ))]
    #[error("a sphingoid base needs at least 2 oxidations, but only {0} were given")]
    MissingBackbone(u32),
}

impl LipochemError {
    pub(crate) fn too_many_positions(kind: &'static str, count: u32, positions: usize) -> Box<Self> {
        Box::new(Self::TooManyPositions {
            kind,
            count,
            positions,
        })
    }

    pub(crate) fn position_out_of_range(kind: &'static str, position: u32, carbons: u32) -> Box<Self> {
        Box::new(Self::PositionOutOfRange {
            kind,
            position,
            carbons,
        })
    }
}
