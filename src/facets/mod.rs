//! Facet option calculator: per facet, the values still reachable when only
//! that facet's own selector is cleared.

pub mod counting;
pub mod keys;

use std::collections::BTreeMap;

use tracing::debug;

use crate::filters::FilterSpec;
use crate::pipeline::{self, ServiceRows};
use crate::records::Dataset;
use crate::types::{AvailableOptions, FilteredData};

pub use counting::{count_values, facet_options};
pub use keys::{FacetEntity, FacetKey, FacetKeyError};

/// Compute the option list with counts for every facet.
///
/// Facets whose selector is empty share one base run with the full spec;
/// each facet with a selector gets its own run with that selector cleared.
/// Service rows are never materialized here.
pub fn available_options(data: &Dataset, spec: &FilterSpec) -> AvailableOptions {
    let base = pipeline::run(data, spec, ServiceRows::Skip);
    let scoped = scoped_runs(data, spec);

    let entries = FacetKey::ALL
        .into_iter()
        .map(|key| {
            let source = scoped.get(&key).unwrap_or(&base);
            (key, facet_options(key, source))
        })
        .collect();

    debug!(
        spec = %spec.fingerprint().map(|f| f.to_string()).unwrap_or_default(),
        scoped_runs = scoped.len(),
        "facet options computed"
    );

    AvailableOptions::new(entries)
}

fn active_facets(spec: &FilterSpec) -> Vec<FacetKey> {
    FacetKey::ALL
        .into_iter()
        .filter(|key| !key.selector(spec).is_empty())
        .collect()
}

// Call-scoped memo: one recomputation per active facet, dropped on return.
#[cfg(not(feature = "parallel"))]
fn scoped_runs<'a>(data: &'a Dataset, spec: &FilterSpec) -> BTreeMap<FacetKey, FilteredData<'a>> {
    active_facets(spec)
        .into_iter()
        .map(|key| (key, pipeline::run(data, &spec.without(key), ServiceRows::Skip)))
        .collect()
}

#[cfg(feature = "parallel")]
fn scoped_runs<'a>(data: &'a Dataset, spec: &FilterSpec) -> BTreeMap<FacetKey, FilteredData<'a>> {
    use rayon::prelude::*;

    active_facets(spec)
        .into_par_iter()
        .map(|key| (key, pipeline::run(data, &spec.without(key), ServiceRows::Skip)))
        .collect()
}
