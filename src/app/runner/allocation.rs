/// Splits `total` requests across `workers`: every worker gets `total / workers`
/// and the first `total % workers` workers get one more. The result always sums
/// to `total` and entries differ by at most one.
#[must_use]
pub fn allocate_requests(total: u64, workers: usize) -> Vec<u64> {
    let Ok(workers) = u64::try_from(workers) else {
        return Vec::new();
    };
    let base = total.checked_div(workers).unwrap_or(0);
    let extra = total.checked_rem(workers).unwrap_or(0);
    (0..workers)
        .map(|index| {
            if index < extra {
                base.saturating_add(1)
            } else {
                base
            }
        })
        .collect()
}
