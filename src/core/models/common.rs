// src/core/models/common.rs

/// Anything stored in a collection under a numeric identifier.
pub trait Record {
    fn id(&self) -> u64;
}

/// Next identifier for a collection: `max(existing ids) + 1`, or `1` when
/// the collection is empty. Ids freed by deletion are never handed out
/// again because the maximum never decreases below a previously used id.
pub fn next_id<T: Record>(records: &[T]) -> u64 {
    records
        .iter()
        .map(Record::id)
        .max()
        .map_or(1, |max| max + 1)
}
