//! Directory scanning
//!
//! - `DirectoryWalker`: lazy pre-order enumeration of every directory under a root
//! - `list_directory`: sorted children of one directory, hidden entries filtered

mod config;
mod listing;
mod utils;
mod walker;

pub use config::ScanConfig;
pub use listing::{ChildRecord, DirectoryListing, list_directory};
pub use utils::{base_name, glob_match, is_hidden};
pub use walker::{DirectoryEntry, DirectoryWalker};
