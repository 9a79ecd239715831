// ============================================================
// Layer 4 — Field Merge / Split
// ============================================================
// Reshape the split map in place:
//
//   merge_fields : target = concat(source_1, source_2, ...)
//   split_field  : carve one field into several by proportion
//
// Splitting shuffles the remaining pool before each cut with a
// ChaCha8 RNG seeded from the dataset seed, so the same seed
// always yields the same partition. Sources are never removed.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::error::{DatasetError, Result};
use crate::domain::record::{Record, SplitMap};

/// Concatenate `fields` (in the order given) into `target`.
/// An existing `target` is replaced.
pub fn merge_fields(data: &mut SplitMap, fields: &[String], target: &str) -> Result<()> {
    if fields.is_empty() {
        return Err(DatasetError::config("no fields given to merge"));
    }

    let mut merged: Vec<Record> = Vec::new();
    for name in fields {
        let records = data
            .get(name)
            .ok_or_else(|| DatasetError::missing_split(name.as_str()))?;
        merged.extend(records.iter().cloned());
    }

    tracing::debug!("Merged {:?} into '{}' ({} records)", fields, target, merged.len());
    data.insert(target.to_string(), merged);
    Ok(())
}

/// Target and proportion counts agree and every proportion is in (0, 1).
pub fn check_split_shape(source: &str, targets: &[String], proportions: &[f64]) -> Result<()> {
    if targets.len() < 2 {
        return Err(DatasetError::config(format!(
            "splitting '{source}' needs at least two target fields, got {}",
            targets.len()
        )));
    }
    if proportions.len() != targets.len() - 1 {
        return Err(DatasetError::config(format!(
            "{} target fields need {} split proportions, got {}",
            targets.len(),
            targets.len() - 1,
            proportions.len()
        )));
    }
    if let Some(&bad) = proportions.iter().find(|&&p| !(p > 0.0 && p < 1.0)) {
        return Err(DatasetError::InvalidProportion(bad));
    }
    Ok(())
}

/// Partition `source` into `targets` by `proportions`.
///
/// `proportions` has one entry per target except the last; each is a
/// fraction of the source's full length, rounded to the nearest record.
/// The last target receives whatever is left.
///
/// # Example
/// ```ignore
/// // 100 records, proportions [0.2, 0.3] → 20 / 30 / 50
/// split_field(&mut data, "train", &names(["a", "b", "c"]), &[0.2, 0.3], Some(42))?;
/// ```
pub fn split_field(
    data:        &mut SplitMap,
    source:      &str,
    targets:     &[String],
    proportions: &[f64],
    seed:        Option<u64>,
) -> Result<()> {
    check_split_shape(source, targets, proportions)?;

    let mut pool = data
        .get(source)
        .ok_or_else(|| DatasetError::missing_split(source))?
        .clone();
    let total = pool.len();

    let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

    let (last, carved) = targets.split_last().ok_or_else(|| DatasetError::config("no split targets"))?;
    for (target, &proportion) in carved.iter().zip(proportions) {
        let take = ((total as f64) * proportion).round() as usize;
        let take = take.min(pool.len());

        pool.shuffle(&mut rng);
        let rest = pool.split_off(take);

        tracing::debug!("Split '{}' → '{}' ({} records)", source, target, pool.len());
        data.insert(target.clone(), std::mem::replace(&mut pool, rest));
    }

    tracing::debug!("Split '{}' → '{}' ({} records, remainder)", source, last, pool.len());
    data.insert(last.clone(), pool);
    Ok(())
}
