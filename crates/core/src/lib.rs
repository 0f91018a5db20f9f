//! carhub_core - Record types shared across the CarHub data-access layer.
//!
//! Dealers and reviews are transient read-only projections of JSON documents
//! served by external cloud-function endpoints. This crate holds the types
//! and the serde helpers needed to read those documents; it performs no I/O.

pub mod dealer;
pub mod review;
pub mod serde;

pub use dealer::Dealer;
pub use review::{Review, Sentiment};
