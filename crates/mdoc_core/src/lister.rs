//! Documentation directory listing.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{DocError, DocResult};

/// Lists the entries of the documentation directory.
pub struct DocLister;

impl DocLister {
    /// Return the sorted names of all direct entries of `dir`.
    ///
    /// Files and subdirectories are both listed; nothing is filtered by
    /// extension here.
    pub fn list(dir: impl AsRef<Path>) -> DocResult<BTreeSet<String>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DocError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut names = BTreeSet::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }

        debug!("Found {} entries in {:?}", names.len(), dir);
        Ok(names)
    }
}
