/// Next id for a store: 1 when empty, otherwise the current maximum plus one.
///
/// Ids freed by deleting the maximum holder are handed out again.
pub fn next_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    existing.into_iter().max().map_or(1, |max| max + 1)
}
