// Resume draft store: append-only versions of the editor's record.
// Only resumes are persisted; analyses are always computed fresh.

pub mod handlers;
pub mod versioning;
