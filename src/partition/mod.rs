mod balance;
mod contiguity;
mod enumerate;
mod partition;

pub use balance::Limits;
pub use enumerate::{Partitions, enumerate_partitions, partitions};
pub use partition::Partition;
