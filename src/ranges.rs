//! Slider bounds derived from the data.

use crate::filters::{FilterSpec, NumericRange};
use crate::matching::{normalize_number, parse_revenue};
use crate::pipeline::AccountPredicate;
use crate::records::{Account, Dataset};
use crate::types::{BaseRanges, ValueBounds};

fn positive_bounds(values: impl IntoIterator<Item = f64>) -> ValueBounds {
    values
        .into_iter()
        .filter(|value| *value > 0.0)
        .fold(None, |bounds: Option<ValueBounds>, value| {
            Some(match bounds {
                None => ValueBounds {
                    min: value,
                    max: value,
                },
                Some(b) => ValueBounds {
                    min: b.min.min(value),
                    max: b.max.max(value),
                },
            })
        })
        .unwrap_or(ValueBounds::FALLBACK)
}

/// Revenue bounds of the accounts passing every account-level condition
/// except revenue itself and the name keywords.
///
/// Only positive parsed revenues count; with none left the bounds are
/// `{0, 1000000}`.
pub fn dynamic_revenue_range(accounts: &[Account], spec: &FilterSpec) -> ValueBounds {
    let predicate = AccountPredicate::for_revenue_bounds(spec);
    positive_bounds(
        accounts
            .iter()
            .filter(|account| predicate.accepts(account))
            .map(|account| parse_revenue(account.account_hq_revenue.as_ref())),
    )
}

/// Bounds of every numeric slider over the unfiltered data.
pub fn base_ranges(data: &Dataset) -> BaseRanges {
    BaseRanges {
        revenue: positive_bounds(
            data.accounts
                .iter()
                .map(|account| parse_revenue(account.account_hq_revenue.as_ref())),
        ),
        years_in_india: positive_bounds(
            data.accounts
                .iter()
                .map(|account| normalize_number(account.years_in_india.as_ref())),
        ),
        center_inc_year: positive_bounds(
            data.centers
                .iter()
                .map(|center| normalize_number(center.center_inc_year.as_ref())),
        ),
    }
}

/// New revenue selection after the dynamic bounds moved.
///
/// An untouched (auto) slider follows the bounds; a range the user set is
/// intersected with them.
pub fn clamp_revenue_range(current: NumericRange, bounds: ValueBounds, auto: bool) -> NumericRange {
    if auto {
        return bounds.as_range();
    }
    NumericRange(current.min().max(bounds.min), current.max().min(bounds.max))
}
