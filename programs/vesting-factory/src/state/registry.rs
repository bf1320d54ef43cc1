use anchor_lang::prelude::*;

use crate::constants::{MAX_SCHEDULES, MAX_SCHEDULES_PER_BENEFICIARY};
use crate::error::VestingError;

/// Append-only ledger of every schedule ever created, in creation order.
/// Entries are never removed or deduplicated.
#[account]
pub struct Registry {
    pub schedules: Vec<Pubkey>,
}

impl Registry {
    pub const fn space() -> usize {
        8 + 4 + 32 * MAX_SCHEDULES
    }

    pub fn record(&mut self, schedule: Pubkey) -> Result<()> {
        require!(
            self.schedules.len() < MAX_SCHEDULES,
            VestingError::RegistryFull
        );
        self.schedules.push(schedule);
        Ok(())
    }
}

/// Per-beneficiary lookup PDA listing that beneficiary's schedules in
/// creation order.
#[account]
pub struct BeneficiaryIndex {
    pub beneficiary: Pubkey,
    pub schedules: Vec<Pubkey>,
}

impl BeneficiaryIndex {
    pub const fn space() -> usize {
        8 + 32 + 4 + 32 * MAX_SCHEDULES_PER_BENEFICIARY
    }

    pub fn record(&mut self, schedule: Pubkey) -> Result<()> {
        require!(
            self.schedules.len() < MAX_SCHEDULES_PER_BENEFICIARY,
            VestingError::BeneficiaryIndexFull
        );
        self.schedules.push(schedule);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn registry_keeps_creation_order() {
        let mut registry = Registry {
            schedules: Vec::new(),
        };
        registry.record(key(1)).unwrap();
        registry.record(key(2)).unwrap();
        registry.record(key(3)).unwrap();
        assert_eq!(registry.schedules, vec![key(1), key(2), key(3)]);
    }

    #[test]
    fn registry_capacity_is_enforced() {
        let mut registry = Registry {
            schedules: Vec::new(),
        };
        for n in 0..MAX_SCHEDULES {
            registry.record(key(n as u8)).unwrap();
        }
        assert!(registry.record(key(255)).is_err());
    }

    #[test]
    fn beneficiary_lists_repeat_grants_in_order() {
        let mut index = BeneficiaryIndex {
            beneficiary: key(9),
            schedules: Vec::new(),
        };
        index.record(key(1)).unwrap();
        index.record(key(2)).unwrap();
        assert_eq!(index.schedules, vec![key(1), key(2)]);
    }

    #[test]
    fn beneficiary_index_capacity_is_enforced() {
        let mut index = BeneficiaryIndex {
            beneficiary: key(9),
            schedules: Vec::new(),
        };
        for n in 0..MAX_SCHEDULES_PER_BENEFICIARY {
            index.record(key(n as u8)).unwrap();
        }
        assert!(index.record(key(255)).is_err());
    }
}
