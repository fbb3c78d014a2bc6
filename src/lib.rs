//! Cross-entity faceted filtering for account and delivery-center datasets.
//!
//! `facet-core` takes the complete in-memory collections (accounts, centers,
//! functions, services, prospects, tech) and a [`FilterSpec`], and produces
//! either a mutually consistent filtered view of every collection or, per
//! facet, the values that remain available with their counts. Every call is a
//! pure function of its inputs: nothing is cached between calls and inputs
//! are never mutated.

pub mod facets;
pub mod filters;
pub mod matching;
pub mod pipeline;
pub mod ranges;
pub mod records;
pub mod types;

pub use facets::{available_options, FacetKey};
pub use filters::FilterSpec;
pub use pipeline::filter_dataset;
pub use ranges::{base_ranges, clamp_revenue_range, dynamic_revenue_range};
pub use records::Dataset;
