//! Utilities module aggregator.

pub mod error;
