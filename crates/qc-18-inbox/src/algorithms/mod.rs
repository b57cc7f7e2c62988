//! # Algorithms Module
//!
//! Pure encoding and digest logic. No I/O, no state.

pub mod encoding;
pub mod fingerprint;

pub use encoding::{InboxRequest, PackedEncoder, SUB_KIND_LEN, WORD_LEN};
pub use fingerprint::{fingerprint, keccak256};
