//! Repository Layer
//!
//! Versioned database handles, record operations and the view refresh cycle.

mod db;
mod handle;
mod refresh;
mod todo_repo;
mod traits;


pub use db::{Database, DB_NAME, SCHEMA_VERSION};
pub use handle::Handle;
pub use refresh::{Refresh, Refresher};
pub use todo_repo::TodoRepository;
pub use traits::{RecordSource, RecordStore, ViewSink};
