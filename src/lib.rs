#![doc = "Exhaustive enumeration of balanced, contiguous graph partitions"]
mod error;
mod graph;
mod partition;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use graph::Graph;

#[doc(inline)]
pub use partition::{Limits, Partition, Partitions, enumerate_partitions, partitions};
