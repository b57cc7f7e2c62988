//! # Integration Tests
//!
//! Drive the inbox through its public API against the in-memory adapters.

pub mod inbox_flows;
