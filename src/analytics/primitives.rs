//! Stateless statistic primitives used by the aggregation helpers.
//!
//! Undefined inputs are modelled as `None` and skipped, mirroring how a
//! dataframe mean ignores missing values. An input with no defined value has
//! no mean.

use std::collections::BTreeMap;

/// Arithmetic mean of the finite values. `None` when there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Groups values by key, averages each group, then averages the group means.
///
/// Undefined values are skipped inside a group; a group whose values are all
/// undefined contributes nothing to the outer mean.
pub fn mean_of_group_means<K, I>(pairs: I) -> Option<f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, Option<f64>)>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (key, value) in pairs {
        let group = groups.entry(key).or_default();
        if let Some(value) = value {
            group.push(value);
        }
    }

    mean(groups.into_values().filter_map(mean))
}

/// Largest finite value, `None` when there is none.
pub fn max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |best: Option<f64>, value| {
            Some(best.map_or(value, |current| current.max(value)))
        })
}
