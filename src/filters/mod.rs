pub mod defaults;
pub mod spec;

pub use spec::{FilterSpec, FilterSpecError, NumericRange, SelectorMode, SelectorTerm};
