// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// Local Crate Imports
use crate::TotalChain;

// Public API ==========================================================================================================

impl TotalChain {
    #[must_use]
    pub const fn new(
        carbon_count: u32,
        double_bond_count: u32,
        oxidized_count: u32,
        acyl_chain_count: u32,
        alkyl_chain_count: u32,
        sphingo_chain_count: u32,
    ) -> Self {
        Self {
            carbon_count,
            double_bond_count,
            oxidized_count,
            acyl_chain_count,
            alkyl_chain_count,
            sphingo_chain_count,
        }
    }

    #[must_use]
    pub const fn carbon_count(&self) -> u32 {
        self.carbon_count
    }

    #[must_use]
    pub const fn double_bond_count(&self) -> u32 {
        self.double_bond_count
    }

    #[must_use]
    pub const fn oxidized_count(&self) -> u32 {
        self.oxidized_count
    }

    #[must_use]
    pub const fn acyl_chain_count(&self) -> u32 {
        self.acyl_chain_count
    }

    #[must_use]
    pub const fn alkyl_chain_count(&self) -> u32 {
        self.alkyl_chain_count
    }

    #[must_use]
    pub const fn sphingo_chain_count(&self) -> u32 {
        self.sphingo_chain_count
    }

    #[must_use]
    pub const fn chain_count(&self) -> u32 {
        self.acyl_chain_count + self.alkyl_chain_count + self.sphingo_chain_count
    }
}

// Display Trait Implementations =======================================================================================

impl Display for TotalChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.carbon_count, self.double_bond_count)?;
        match self.oxidized_count {
            0 => Ok(()),
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
    fn total_chain_counts() {
        let ceramide = TotalChain::new(34, 1, 2, 1, 0, 1);
        assert_eq!(ceramide.carbon_count(), 34);
        assert_eq!(ceramide.double_bond_count(), 1);
        assert_eq!(ceramide.oxidized_count(), 2);
        assert_eq!(ceramide.acyl_chain_count(), 1);
        assert_eq!(ceramide.alkyl_chain_count(), 0);
        assert_eq!(ceramide.sphingo_chain_count(), 1);
        assert_eq!(ceramide.chain_count(), 2);

        assert_eq!(TotalChain::default().chain_count(), 0);
    }

    #[test]
    fn total_chain_display() {
        assert_eq!(TotalChain::new(36, 2, 0, 2, 0, 0).to_string(), "36:2");
        assert_eq!(TotalChain::new(36, 2, 1, 2, 0, 0).to_string(), "36:2;O");
        assert_eq!(TotalChain::new(34, 1, 2, 1, 0, 1).to_string(), "34:1;O2");
    }
}
