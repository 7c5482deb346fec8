//! Benchmark support crate for `wolfdata-rs`.
//!
//! The benchmarks themselves live under `benches/`; this library only
//! exists so the member has a build target.
