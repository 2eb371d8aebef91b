/// ID for a new item: one past the highest ID in use, or `1` when empty.
///
/// Once the highest ID is `u64::MAX` the lowest unused ID is handed out
/// instead, so saved data can never make allocation overflow.
pub(crate) fn next_free_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut used: Vec<u64> = ids.into_iter().collect();

    match used.iter().copied().max() {
        None => 1,
        Some(max) => match max.checked_add(1) {
            Some(id) => id,
            None => {
                used.sort_unstable();
                used.dedup();
                let id = lowest_unused(&used);
                tracing::warn!("ID space exhausted at {}, reusing free ID {}", max, id);
                id
            }
        },
    }
}

/// Smallest ID >= 1 missing from sorted, deduplicated `used`
fn lowest_unused(used: &[u64]) -> u64 {
    let mut candidate = 1;
    for &id in used {
        if id < candidate {
            continue;
        }
        if id > candidate {
            break;
        }
        candidate = id.saturating_add(1);
    }
    candidate
}
