pub mod idempotency_sweep;
