pub mod announcement;
pub mod comment;
pub mod idempotency;
pub mod reaction;
