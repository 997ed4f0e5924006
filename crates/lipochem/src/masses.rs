// External Crate Imports
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Local Crate Imports
use crate::{
    AcylChain, AlkylChain, AnyChains, AverageMass, Chain, Massive, MolecularSpeciesLevelChains,
    MonoisotopicMass, PositionLevelChains, SphingoChain,
};

// Element Masses ======================================================================================================

// Masses taken from https://www.ciaaw.org/atomic-masses.htm and https://www.ciaaw.org/atomic-weights.htm
struct ElementMasses {
    carbon: Decimal,
    hydrogen: Decimal,
    nitrogen: Decimal,
    oxygen: Decimal,
}

const MONOISOTOPIC: ElementMasses = ElementMasses {
    carbon: dec!(12),
    hydrogen: dec!(1.00782503207),
    nitrogen: dec!(14.0030740048),
    oxygen: dec!(15.99491461956),
};

const AVERAGE: ElementMasses = ElementMasses {
    carbon: dec!(12.0107),
    hydrogen: dec!(1.00794),
    nitrogen: dec!(14.0067),
    oxygen: dec!(15.9994),
};

// NOTE: Every chain is some CcHhNnOo moiety, so this is all the chemistry needed for now. If other elements start
// showing up (phosphorus in the headgroups?), it's probably time to pull in a proper `ChemicalComposition`
#[derive(Copy, Clone, Debug)]
struct Formula {
    carbons: u32,
    hydrogens: i64,
    nitrogens: u32,
    oxygens: u32,
}

impl Formula {
    fn mass(self, masses: &ElementMasses) -> Decimal {
        Decimal::from(self.carbons) * masses.carbon
            + Decimal::from(self.hydrogens) * masses.hydrogen
            + Decimal::from(self.nitrogens) * masses.nitrogen
            + Decimal::from(self.oxygens) * masses.oxygen
    }
}

// Chain Formulae ======================================================================================================

// NOTE: Chains are weighed as they're bound in an intact lipid: acyl chains as R-CO, alkyl chains as R (the ether
// oxygen belongs to the backbone), and sphingoid bases with one amide hydrogen already given up to their N-acyl chain
trait ChainFormula {
    fn formula(&self) -> Formula;
}

fn unsaturated_hydrogens(carbon_count: u32, double_bond_count: u32, offset: i64) -> i64 {
    2 * i64::from(carbon_count) - 2 * i64::from(double_bond_count) + offset
}

impl ChainFormula for AcylChain {
    fn formula(&self) -> Formula {
        Formula {
            carbons: self.carbon_count(),
            hydrogens: unsaturated_hydrogens(self.carbon_count(), self.double_bond().count(), -1),
            nitrogens: 0,
            oxygens: 1 + self.oxidized().count(),
        }
    }
}

impl ChainFormula for AlkylChain {
    fn formula(&self) -> Formula {
        Formula {
            carbons: self.carbon_count(),
            hydrogens: unsaturated_hydrogens(self.carbon_count(), self.double_bond().count(), 1),
            nitrogens: 0,
            oxygens: self.oxidized().count(),
        }
    }
}

impl ChainFormula for SphingoChain {
    fn formula(&self) -> Formula {
        Formula {
            carbons: self.carbon_count(),
            hydrogens: unsaturated_hydrogens(self.carbon_count(), self.double_bond().count(), 2),
            nitrogens: 1,
            oxygens: self.oxidized().count(),
        }
    }
}

// Massive Trait Implementations =======================================================================================

macro_rules! massive_chain_impls {
    ($($chain_type:ty),+ $(,)?) => {
        $(
            impl Massive for $chain_type {
                fn monoisotopic_mass(&self) -> MonoisotopicMass {
                    self.formula().mass(&MONOISOTOPIC).into()
                }

                fn average_mass(&self) -> AverageMass {
                    self.formula().mass(&AVERAGE).into()
                }
            }
        )+
    };
}

massive_chain_impls!(AcylChain, AlkylChain, SphingoChain);

impl Massive for Chain {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        match self {
            Self::Acyl(c) => c.monoisotopic_mass(),
            Self::Alkyl(c) => c.monoisotopic_mass(),
            Self::Sphingo(c) => c.monoisotopic_mass(),
        }
    }

    fn average_mass(&self) -> AverageMass {
        match self {
            Self::Acyl(c) => c.average_mass(),
            Self::Alkyl(c) => c.average_mass(),
            Self::Sphingo(c) => c.average_mass(),
        }
    }
}

macro_rules! massive_chain_set_impls {
    ($($set_type:ty),+ $(,)?) => {
        $(
            impl Massive for $set_type {
                fn monoisotopic_mass(&self) -> MonoisotopicMass {
                    self.chains().iter().map(Massive::monoisotopic_mass).sum()
                }

                fn average_mass(&self) -> AverageMass {
                    self.chains().iter().map(Massive::average_mass).sum()
                }
            }
        )+
    };
}

massive_chain_set_impls!(MolecularSpeciesLevelChains, PositionLevelChains);

impl Massive for AnyChains {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        match self {
            Self::MolecularSpecies(c) => c.monoisotopic_mass(),
            Self::Position(c) => c.monoisotopic_mass(),
        }
    }

    fn average_mass(&self) -> AverageMass {
        match self {
            Self::MolecularSpecies(c) => c.average_mass(),
            Self::Position(c) => c.average_mass(),
        }
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{DoubleBond, Oxidized};

    use super::*;

    fn mono(mass: Decimal) -> MonoisotopicMass {
        MonoisotopicMass::from(mass)
    }

    #[test]
    fn acyl_chain_masses() {
        let palmitoyl =
            AcylChain::new(16, DoubleBond::undecided(0), Oxidized::undecided(0)).unwrap();
        assert_eq!(palmitoyl.monoisotopic_mass(), mono(dec!(239.23749061373)));
        assert_eq!(
            palmitoyl.average_mass(),
            AverageMass::from(dec!(239.41674))
        );

        let oleoyl = AcylChain::new(18, DoubleBond::new(1, [9]).unwrap(), Oxidized::undecided(0));
        assert_eq!(oleoyl.unwrap().monoisotopic_mass(), mono(dec!(265.25314067787)));

        let hydroxy_oleoyl = AcylChain::new(18, DoubleBond::undecided(1), Oxidized::undecided(1));
        assert_eq!(
            hydroxy_oleoyl.unwrap().monoisotopic_mass(),
            mono(dec!(281.24805529743))
        );
    }

    #[test]
    fn alkyl_chain_masses() {
        let hexadecyl = AlkylChain::new(16, DoubleBond::undecided(0), Oxidized::undecided(0));
        assert_eq!(hexadecyl.unwrap().monoisotopic_mass(), mono(dec!(225.25822605831)));

        // The vinyl-ether double bond is still a double bond, so the `P-18:0` and `O-18:1` masses agree
        let plasmalogen = AlkylChain::new(18, DoubleBond::new(1, [1]).unwrap(), Oxidized::undecided(0));
        let ether = AlkylChain::new(18, DoubleBond::undecided(1), Oxidized::undecided(0));
        assert_eq!(plasmalogen.unwrap().monoisotopic_mass(), mono(dec!(251.27387612245)));
        assert_eq!(ether.unwrap().monoisotopic_mass(), mono(dec!(251.27387612245)));
    }

    #[test]
    fn ceramide_masses() {
        let sphingosine =
            SphingoChain::new(18, DoubleBond::undecided(1), Oxidized::undecided(2)).unwrap();
        assert_eq!(sphingosine.monoisotopic_mass(), mono(dec!(298.27460439844)));
        assert_eq!(sphingosine.average_mass(), AverageMass::from(dec!(298.48394)));

        let palmitoyl =
            AcylChain::new(16, DoubleBond::undecided(0), Oxidized::undecided(0)).unwrap();
        // Cer 18:1;O2/16:0 is C34H67NO3
        let ceramide = PositionLevelChains::new([Chain::from(sphingosine), palmitoyl.into()]);
        assert_eq!(ceramide.monoisotopic_mass(), mono(dec!(537.51209501217)));
        assert_eq!(
            AnyChains::from(ceramide).monoisotopic_mass(),
            mono(dec!(537.51209501217))
        );
    }
}
