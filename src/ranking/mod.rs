pub mod pool;
pub mod sort;

pub use pool::{Standing, rank_pool};
pub use sort::{SortKey, resort};
