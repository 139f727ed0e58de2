pub mod sqlite;
pub mod watchlists;

pub use sqlite::{create_pool, run_migrations};
#[doc(hidden)]
pub use sqlite::memory_pool;
