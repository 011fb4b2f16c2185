//! Migration file discovery.
//!
//! Files come from one directory and are ordered by file name, so
//! Laravel's timestamp-prefixed names replay chronologically.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use dartgen_core::extract::extract_operations;
use dartgen_core::state::SchemaState;

use crate::error::{GenerateError, Result};

/// One migration file's name and source text.
#[derive(Debug, Clone)]
pub struct MigrationFile {
    /// File name, used for ordering and progress output.
    pub name: String,
    /// Raw source text.
    pub source: String,
}

/// Lists `.php` files in `dir` in lexical file-name order and reads
/// them. A file that cannot be read is skipped with a warning; a
/// missing directory is an error.
pub fn discover_migrations(dir: &Path) -> Result<Vec<MigrationFile>> {
    if !dir.is_dir() {
        return Err(GenerateError::MigrationsDirNotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "php"))
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!("discovered migration {}", name);
                files.push(MigrationFile { name, source });
            }
            Err(err) => warn!("cannot read migration {}: {}", path.display(), err),
        }
    }
    Ok(files)
}

/// Replays discovered files into a schema: file order first, textual
/// order within each file.
#[must_use]
pub fn reconstruct_schema(files: &[MigrationFile]) -> SchemaState {
    let mut state = SchemaState::new();
    for file in files {
        let operations = extract_operations(&file.source);
        debug!("{}: {} operations", file.name, operations.len());
        for operation in &operations {
            state.apply(operation);
        }
    }
    state
}
