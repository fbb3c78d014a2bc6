//! Cross-entity filter pipeline.

pub mod index;
pub mod passes;
pub mod predicates;

use tracing::debug;

use crate::filters::FilterSpec;
use crate::records::Dataset;
use crate::types::FilteredData;

pub use index::SoftwareIndex;
pub use predicates::{AccountPredicate, CenterPredicate, FunctionPredicate, ProspectPredicate};

/// Whether a run materializes the service collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRows {
    Keep,
    Skip,
}

/// Filter every collection of `data` against `spec`.
///
/// The result satisfies the cross-entity post-conditions: every center's
/// account survives, every function/service references a surviving center,
/// every prospect references a surviving account, and every surviving
/// account has at least one surviving center.
pub fn filter_dataset<'a>(data: &'a Dataset, spec: &FilterSpec) -> FilteredData<'a> {
    run(data, spec, ServiceRows::Keep)
}

pub fn run<'a>(data: &'a Dataset, spec: &FilterSpec, services: ServiceRows) -> FilteredData<'a> {
    let account_predicate = AccountPredicate::new(spec);
    let center_predicate = CenterPredicate::new(spec);
    let function_predicate = FunctionPredicate::new(spec);
    let prospect_predicate = ProspectPredicate::new(spec);
    let software = SoftwareIndex::build(&data.tech);

    // 1. Accounts on their own attributes
    let mut accounts = passes::select_accounts(&data.accounts, &account_predicate);
    let account_gate = spec
        .has_account_filters()
        .then(|| passes::account_names(&accounts));

    // 2. Centers: account join, own attributes, software text
    let mut centers = passes::select_centers(
        &data.centers,
        account_gate.as_ref(),
        &center_predicate,
        &software,
    );

    // 3. Functions; a function filter keeps only centers with a match
    let function_pass = passes::select_functions(
        &data.functions,
        &passes::center_keys(&centers),
        function_predicate.as_ref(),
    );
    if let Some(matched) = &function_pass.matched_centers {
        centers = passes::retain_centers_by_key(centers, matched);
    }

    // 4. Prospects; a prospect filter keeps only accounts (and their centers)
    // with a matching prospect
    let mut prospects = passes::select_prospects(
        &data.prospects,
        account_gate.as_ref(),
        prospect_predicate.as_ref(),
    );
    if prospect_predicate.is_some() {
        let with_prospects = passes::prospect_account_names(&prospects);
        accounts = passes::retain_accounts(accounts, &with_prospects);
        centers = passes::retain_centers_by_account(centers, &with_prospects);
    }
    let center_keys = passes::center_keys(&centers);

    // 5. Services ride on center membership
    let services = match services {
        ServiceRows::Keep => passes::select_services(&data.services, &center_keys),
        ServiceRows::Skip => Vec::new(),
    };

    // 6. Closing pass: accounts need a surviving center
    let final_names = passes::center_account_names(&centers);
    let accounts = passes::retain_accounts(accounts, &final_names);
    let functions = passes::retain_functions(function_pass.rows, &center_keys);
    prospects = passes::retain_prospects(prospects, &final_names);

    debug!(
        accounts = accounts.len(),
        centers = centers.len(),
        functions = functions.len(),
        services = services.len(),
        prospects = prospects.len(),
        software_indexed = software.len(),
        "filter pipeline complete"
    );

    FilteredData {
        accounts,
        centers,
        functions,
        services,
        prospects,
    }
}
