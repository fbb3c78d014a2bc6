//! Values a freshly reset dashboard starts from.

use super::spec::NumericRange;

pub const DEFAULT_REVENUE_RANGE: NumericRange = NumericRange(0.0, 1_000_000.0);
pub const DEFAULT_YEARS_IN_INDIA_RANGE: NumericRange = NumericRange(0.0, 1_000_000.0);
pub const DEFAULT_CENTER_INC_YEAR_RANGE: NumericRange = NumericRange(0.0, 1_000_000.0);

/// Largest integer a double represents exactly (2^53 - 1). A range whose
/// upper bound sits at or above this is treated as open-ended.
pub const UNBOUNDED_MAX: f64 = 9_007_199_254_740_991.0;

pub const DEFAULT_INCLUDE_NULL: bool = true;
