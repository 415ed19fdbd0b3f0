// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod dataset;
pub mod export;
pub mod fake;
pub mod fields;
pub mod generator;
pub mod normalize;
pub mod nulls;
pub mod schema;
