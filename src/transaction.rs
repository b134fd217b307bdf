//! Transaction support for scaffold writes
//!
//! Tracks files and directories created while writing a scaffold so that a
//! failure partway through the sequence leaves nothing behind. Rollback runs
//! automatically on drop unless the transaction was committed.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//!
//! // Perform writes...
//! transaction.track_file_created(path);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```

use std::fs;
use std::path::PathBuf;

/// A transaction for all-or-nothing file creation
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: Vec<PathBuf>,

    /// Directories created during this transaction
    created_dirs: Vec<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a file that was created during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.push(path.into());
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        self.created_dirs.push(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    fn rollback(&mut self) {
        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        // Remove created directories deepest-first, and only if empty
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for path in dirs {
            if path.is_dir()
                && fs::read_dir(path)
                    .map(|mut d| d.next().is_none())
                    .unwrap_or(false)
            {
                let _ = fs::remove_dir(path);
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}
