use std::path::PathBuf;

use listing_ingest::IngestOptions;
use listing_model::{CleaningReport, PipelineArtifacts, ProcessingOptions};

/// Raw listings export read when no input is given.
pub const DEFAULT_INPUT: &str = "./data/raw/AB_NYC_2019.csv";

/// Destination of the processed table when no output is given.
pub const DEFAULT_OUTPUT: &str = "./data/processed/preprocessing_data.csv";

/// Where a run reads from and writes to.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON manifest of the fitted artifacts.
    pub artifacts: Option<PathBuf>,
    pub ingest: IngestOptions,
    pub options: ProcessingOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            artifacts: None,
            ingest: IngestOptions::default(),
            options: ProcessingOptions::listings(),
        }
    }

    #[must_use]
    pub fn with_artifacts(mut self, path: Option<PathBuf>) -> Self {
        self.artifacts = path;
        self
    }

    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct PipelineResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub artifacts_path: Option<PathBuf>,
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: Vec<String>,
    /// False when a lenient schema policy kept the source names.
    pub renamed: bool,
    pub report: CleaningReport,
    pub artifacts: PipelineArtifacts,
    pub duration_ms: u128,
}
