pub mod bfs;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use utils::{PathResult, PathStep};
