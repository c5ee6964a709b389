/// Entity identifiers are opaque strings (UUIDs for generated rows).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
