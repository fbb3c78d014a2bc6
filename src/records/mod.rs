pub mod dataset;
pub mod entities;
pub mod value;

pub use crate::types::identifiers::{AccountName, CenterKey};
pub use dataset::Dataset;
pub use entities::{Account, Center, Function, Prospect, Service, Tech};
pub use value::LooseValue;
