//! Remote service adapters.

pub mod prediction;
