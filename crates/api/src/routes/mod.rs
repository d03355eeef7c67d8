//! Route handlers grouped by resource

pub mod escrow;
