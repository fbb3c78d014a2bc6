pub mod identifiers;
pub mod result_bundle;

pub use identifiers::{AccountName, CenterKey, SpecFingerprint};
pub use result_bundle::{AvailableOptions, BaseRanges, FilterOption, FilteredData, ValueBounds};
