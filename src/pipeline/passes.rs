//! The narrowing passes of one pipeline run.
//!
//! Each pass maps the current rows / identifier sets to the next ones and
//! touches nothing else, so the run in `pipeline::run` reads top to bottom.

use std::collections::BTreeSet;

use super::index::SoftwareIndex;
use super::predicates::{AccountPredicate, CenterPredicate, FunctionPredicate, ProspectPredicate};
use crate::records::{Account, AccountName, Center, CenterKey, Function, Prospect, Service};

pub type AccountNames<'a> = BTreeSet<&'a AccountName>;
pub type CenterKeys<'a> = BTreeSet<&'a CenterKey>;

pub fn account_names<'a>(accounts: &[&'a Account]) -> AccountNames<'a> {
    accounts
        .iter()
        .map(|account| &account.account_global_legal_name)
        .collect()
}

/// Account names referenced by centers; the closing pass keeps exactly these.
pub fn center_account_names<'a>(centers: &[&'a Center]) -> AccountNames<'a> {
    centers
        .iter()
        .map(|center| &center.account_global_legal_name)
        .collect()
}

pub fn prospect_account_names<'a>(prospects: &[&'a Prospect]) -> AccountNames<'a> {
    prospects
        .iter()
        .map(|prospect| &prospect.account_global_legal_name)
        .collect()
}

pub fn center_keys<'a>(centers: &[&'a Center]) -> CenterKeys<'a> {
    centers.iter().map(|center| &center.cn_unique_key).collect()
}

pub fn select_accounts<'a>(accounts: &'a [Account], predicate: &AccountPredicate<'_>) -> Vec<&'a Account> {
    accounts
        .iter()
        .filter(|account| predicate.accepts(account))
        .collect()
}

/// `allowed` is `None` when account-level filters are inactive; the
/// account-name join is skipped then.
pub fn select_centers<'a>(
    centers: &'a [Center],
    allowed: Option<&AccountNames<'_>>,
    predicate: &CenterPredicate<'_>,
    software: &SoftwareIndex<'_>,
) -> Vec<&'a Center> {
    centers
        .iter()
        .filter(|center| allowed.map_or(true, |names| names.contains(&center.account_global_legal_name)))
        .filter(|center| predicate.accepts(center, software))
        .collect()
}

pub struct FunctionPass<'a> {
    pub rows: Vec<&'a Function>,
    /// Centers with at least one matching function, present only when a
    /// function filter is set.
    pub matched_centers: Option<CenterKeys<'a>>,
}

pub fn select_functions<'a>(
    functions: &'a [Function],
    centers: &CenterKeys<'_>,
    predicate: Option<&FunctionPredicate<'_>>,
) -> FunctionPass<'a> {
    let rows: Vec<&'a Function> = functions
        .iter()
        .filter(|function| centers.contains(&function.cn_unique_key))
        .filter(|function| predicate.map_or(true, |p| p.accepts(function)))
        .collect();
    let matched_centers = predicate.map(|_| rows.iter().map(|function| &function.cn_unique_key).collect());

    FunctionPass { rows, matched_centers }
}

pub fn select_prospects<'a>(
    prospects: &'a [Prospect],
    allowed: Option<&AccountNames<'_>>,
    predicate: Option<&ProspectPredicate<'_>>,
) -> Vec<&'a Prospect> {
    prospects
        .iter()
        .filter(|prospect| allowed.map_or(true, |names| names.contains(&prospect.account_global_legal_name)))
        .filter(|prospect| predicate.map_or(true, |p| p.accepts(prospect)))
        .collect()
}

pub fn select_services<'a>(services: &'a [Service], centers: &CenterKeys<'_>) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|service| centers.contains(&service.cn_unique_key))
        .collect()
}

pub fn retain_accounts<'a>(accounts: Vec<&'a Account>, names: &AccountNames<'_>) -> Vec<&'a Account> {
    accounts
        .into_iter()
        .filter(|account| names.contains(&account.account_global_legal_name))
        .collect()
}

pub fn retain_centers_by_key<'a>(centers: Vec<&'a Center>, keys: &CenterKeys<'_>) -> Vec<&'a Center> {
    centers
        .into_iter()
        .filter(|center| keys.contains(&center.cn_unique_key))
        .collect()
}

pub fn retain_centers_by_account<'a>(centers: Vec<&'a Center>, names: &AccountNames<'_>) -> Vec<&'a Center> {
    centers
        .into_iter()
        .filter(|center| names.contains(&center.account_global_legal_name))
        .collect()
}

pub fn retain_functions<'a>(functions: Vec<&'a Function>, keys: &CenterKeys<'_>) -> Vec<&'a Function> {
    functions
        .into_iter()
        .filter(|function| keys.contains(&function.cn_unique_key))
        .collect()
}

pub fn retain_prospects<'a>(prospects: Vec<&'a Prospect>, names: &AccountNames<'_>) -> Vec<&'a Prospect> {
    prospects
        .into_iter()
        .filter(|prospect| names.contains(&prospect.account_global_legal_name))
        .collect()
}
