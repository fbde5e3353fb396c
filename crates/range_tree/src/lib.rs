mod error;
mod monoid;
mod tree;
mod util;

pub use error::{RangeTreeError, Result};
pub use monoid::{FnMonoid, Max, Min, Monoid, Sum};
pub use tree::RangeTree;
