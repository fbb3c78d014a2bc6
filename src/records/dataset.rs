use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entities::{Account, Center, Function, Prospect, Service, Tech};
use crate::types::identifiers::AccountName;

/// The complete in-memory collections handed over by the retrieval side.
///
/// Read only: nothing in this crate mutates a `Dataset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub accounts: Vec<Account>,
    pub centers: Vec<Center>,
    pub functions: Vec<Function>,
    pub services: Vec<Service>,
    pub prospects: Vec<Prospect>,
    pub tech: Vec<Tech>,
}

impl Dataset {
    /// Distinct non-empty account names, in first-seen order.
    pub fn account_names(&self) -> Vec<&AccountName> {
        let mut seen = BTreeSet::new();
        self.accounts
            .iter()
            .map(|account| &account.account_global_legal_name)
            .filter(|name| !name.is_empty() && seen.insert(*name))
            .collect()
    }
}
