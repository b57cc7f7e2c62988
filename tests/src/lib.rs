//! # Quantum-Chain Test Suite
//!
//! Cross-module scenarios for the cross-layer inbox.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end inbox flows
//!     └── inbox_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//! cargo test -p qc-tests integration::
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
