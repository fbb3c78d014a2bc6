use std::collections::HashMap;

use super::keys::{FacetEntity, FacetKey};
use crate::types::{FilterOption, FilteredData};

/// Occurrence counts in first-seen order, then stably sorted by descending
/// count so ties keep first-seen order.
pub fn count_values<'r, I>(values: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = &'r str>,
{
    let mut positions: HashMap<&'r str, usize> = HashMap::new();
    let mut options: Vec<FilterOption> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&at) => options[at].count += 1,
            None => {
                positions.insert(value, options.len());
                options.push(FilterOption {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    options.sort_by(|a, b| b.count.cmp(&a.count));
    options
}

/// Options for one facet, counted over the collection the facet belongs to.
pub fn facet_options(key: FacetKey, data: &FilteredData<'_>) -> Vec<FilterOption> {
    match key.entity() {
        FacetEntity::Account => count_values(
            data.accounts
                .iter()
                .map(|account| key.account_value(account).unwrap_or("")),
        ),
        FacetEntity::Center => count_values(
            data.centers
                .iter()
                .map(|center| key.center_value(center).unwrap_or("")),
        ),
        FacetEntity::Function => count_values(
            data.functions
                .iter()
                .map(|function| key.function_value(function).unwrap_or("")),
        ),
        FacetEntity::Prospect => count_values(
            data.prospects
                .iter()
                .map(|prospect| key.prospect_value(prospect).unwrap_or("")),
        ),
    }
}
