//! Model file output.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use dartgen_core::codegen::render_model;
use dartgen_core::naming;
use dartgen_core::state::SchemaState;

use crate::error::{GenerateError, Result};

/// Writes one generated Dart model per table.
pub struct ModelWriter {
    output_dir: PathBuf,
    dry_run: bool,
}

impl ModelWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// In dry-run mode, models are printed instead of written.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Renders every table and writes (or prints) its model file.
    /// Returns the target paths in schema order.
    pub fn write_models(&self, state: &SchemaState) -> Result<Vec<PathBuf>> {
        if !self.dry_run {
            fs::create_dir_all(&self.output_dir).map_err(|source| GenerateError::OutputDir {
                path: self.output_dir.clone(),
                source,
            })?;
        }

        let mut written = Vec::with_capacity(state.len());
        for (table, definition) in state.tables() {
            let path = self.output_dir.join(naming::model_file_name(table));
            let model = render_model(table, definition);
            if self.dry_run {
                println!("// {}", path.display());
                println!("{model}");
            } else {
                fs::write(&path, &model)?;
                info!("wrote {} ({} columns)", path.display(), definition.len());
            }
            written.push(path);
        }
        Ok(written)
    }
}
