mod chunk;
mod cmp;
mod fmt;
mod normalize;

pub use cmp::{compare, compare_sources};
pub(crate) use normalize::normalized_count;
