use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facets::FacetKey;
use crate::filters::NumericRange;
use crate::records::{Account, Center, Dataset, Function, Prospect, Service, Tech};

/// The mutually consistent filtered view of every collection.
///
/// Rows are borrowed from the input [`Dataset`] in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredData<'a> {
    pub accounts: Vec<&'a Account>,
    pub centers: Vec<&'a Center>,
    pub functions: Vec<&'a Function>,
    pub services: Vec<&'a Service>,
    pub prospects: Vec<&'a Prospect>,
}

impl<'a> FilteredData<'a> {
    /// Owned copy of the surviving rows. Tech is not filtered, so the caller
    /// supplies the rows to carry over.
    pub fn to_dataset(&self, tech: &[Tech]) -> Dataset {
        Dataset {
            accounts: self.accounts.iter().map(|row| (*row).clone()).collect(),
            centers: self.centers.iter().map(|row| (*row).clone()).collect(),
            functions: self.functions.iter().map(|row| (*row).clone()).collect(),
            services: self.services.iter().map(|row| (*row).clone()).collect(),
            prospects: self.prospects.iter().map(|row| (*row).clone()).collect(),
            tech: tech.to_vec(),
        }
    }
}

/// One selectable value of a facet and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub count: usize,
}

/// Option lists for every facet, keyed in facet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableOptions {
    entries: BTreeMap<FacetKey, Vec<FilterOption>>,
}

impl AvailableOptions {
    pub fn new(entries: BTreeMap<FacetKey, Vec<FilterOption>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: FacetKey) -> &[FilterOption] {
        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count for one value, `0` when the value is not available.
    pub fn count_of(&self, key: FacetKey, value: &str) -> usize {
        self.get(key)
            .iter()
            .find(|option| option.value == value)
            .map_or(0, |option| option.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FacetKey, &Vec<FilterOption>)> {
        self.entries.iter()
    }
}

/// `{min, max}` pair handed to a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub const FALLBACK: ValueBounds = ValueBounds {
        min: 0.0,
        max: 1_000_000.0,
    };

    pub fn as_range(&self) -> NumericRange {
        NumericRange(self.min, self.max)
    }
}

/// Slider bounds spanning the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRanges {
    pub revenue: ValueBounds,
    pub years_in_india: ValueBounds,
    pub center_inc_year: ValueBounds,
}

impl Default for BaseRanges {
    fn default() -> Self {
        Self {
            revenue: ValueBounds::FALLBACK,
            years_in_india: ValueBounds::FALLBACK,
            center_inc_year: ValueBounds::FALLBACK,
        }
    }
}
