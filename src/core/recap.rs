//! Per-block aggregation over the archive.

use crate::models::record::ArchivedRecord;

/// Mean completion percentage per block, in first-seen order over the
/// archive. Blocks are grouped by exact string equality (no trimming).
pub fn block_averages(archive: &[ArchivedRecord]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for rec in archive {
        match groups.iter_mut().find(|(block, ..)| *block == rec.block) {
            Some((_, sum, count)) => {
                *sum += f64::from(rec.percent);
                *count += 1;
            }
            None => groups.push((rec.block.clone(), f64::from(rec.percent), 1)),
        }
    }

    groups
        .into_iter()
        .map(|(block, sum, count)| (block, sum / count as f64))
        .collect()
}

/// Mean of the per-block means. Every block weighs the same regardless of
/// how many entries it has.
pub fn overall_average(averages: &[(String, f64)]) -> f64 {
    if averages.is_empty() {
        return 0.0;
    }

    let sum: f64 = averages.iter().map(|(_, avg)| avg).sum();
    sum / averages.len() as f64
}
