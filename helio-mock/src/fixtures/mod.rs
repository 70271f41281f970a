//! Deterministic fixture sources for tests and examples.

/// Canned 3-hourly Kp sources reproducing a standard/recent/forecast hand-off.
pub mod kp;

/// Canned daily F10.7 sources with a block-chunked standard store.
pub mod f107;
