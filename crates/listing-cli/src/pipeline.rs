//! Pipeline orchestration.
//!
//! Stages run strictly in order, each inside its own span:
//! load, rename, clean, encode, scale, check, write. The first failure aborts
//! the run with the stage name as error context. The table and the manifest
//! are staged together, so a failed write leaves both destinations as they
//! were.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use listing_common::{non_numeric_columns, total_null_count};
use listing_ingest::read_listings;
use listing_model::{
    CleaningReport, ListingField, PipelineArtifacts, ProcessingOptions, SCALE_SUFFIX,
};
use listing_output::write_outputs;
use listing_transform::{clean, one_hot_encode, ordinal_encode, rename_to_listing_schema, scale_column};

use crate::types::{PipelineConfig, PipelineResult};

/// In-memory result of the transformation stages.
#[derive(Debug, Clone)]
pub struct Processed {
    pub frame: DataFrame,
    pub renamed: bool,
    pub report: CleaningReport,
    pub artifacts: PipelineArtifacts,
}

/// Runs rename, clean, encode and scale on a loaded table, then checks that
/// the result is fully numeric and free of nulls.
pub fn process_frame(df: &DataFrame, options: &ProcessingOptions) -> Result<Processed> {
    let renamed = info_span!("rename").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let renamed =
            rename_to_listing_schema(df, options.schema_policy).context("rename")?;
        debug!(
            applied = renamed.applied,
            duration_ms = start.elapsed().as_millis(),
            "rename complete"
        );
        Ok(renamed)
    })?;

    let cleaned = info_span!("clean").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let cleaned = clean(&renamed.frame, &options.clean).context("clean")?;
        debug!(
            input_rows = cleaned.report.input_rows,
            output_rows = cleaned.report.output_rows,
            duration_ms = start.elapsed().as_millis(),
            "clean complete"
        );
        Ok(cleaned)
    })?;

    let mut artifacts = PipelineArtifacts::default();
    let encoded = info_span!("encode").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let encode = &options.encode;
        let (frame, ordinal) =
            ordinal_encode(&cleaned.frame, &encode.ordinal_columns).context("encode")?;
        let (frame, one_hot) = one_hot_encode(
            &frame,
            &encode.one_hot_column,
            &encode.one_hot_prefix,
            encode.cardinality_warning,
        )
        .context("encode")?;
        artifacts.ordinal = ordinal;
        artifacts.one_hot.push(one_hot);
        debug!(
            columns = frame.width(),
            duration_ms = start.elapsed().as_millis(),
            "encode complete"
        );
        Ok(frame)
    })?;

    let scaled = info_span!("scale").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let mut frame = encoded;
        for column in &options.scale_columns {
            let (next, factor) = scale_column(&frame, column).context("scale")?;
            frame = next;
            artifacts.scale.push(factor);
        }
        debug!(
            columns = frame.width(),
            duration_ms = start.elapsed().as_millis(),
            "scale complete"
        );
        Ok(frame)
    })?;

    info_span!("check").in_scope(|| check_output(&scaled)).context("check")?;

    Ok(Processed {
        frame: scaled,
        renamed: renamed.applied,
        report: cleaned.report,
        artifacts,
    })
}

/// Fails unless every column is numeric and no value is missing.
pub fn check_output(df: &DataFrame) -> Result<()> {
    let nulls = total_null_count(df);
    if nulls > 0 {
        bail!("output contains {nulls} missing values");
    }
    let text = non_numeric_columns(df);
    if !text.is_empty() {
        bail!("output has non-numeric columns: {}", text.join(", "));
    }
    Ok(())
}

/// Loads the input, processes it and writes the processed table, plus the
/// artifact manifest when one is configured.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineResult> {
    let pipeline_span = info_span!("pipeline", input = %config.input.display());
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    if config.artifacts.as_deref() == Some(config.output.as_path()) {
        bail!(
            "artifact manifest path is the same as the output path: {}",
            config.output.display()
        );
    }

    let raw = info_span!("load").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let raw = read_listings(&config.input, &config.ingest).context("load")?;
        debug!(
            rows = raw.height(),
            columns = raw.width(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(raw)
    })?;

    let processed = process_frame(&raw, &config.options)?;

    info_span!("write").in_scope(|| -> Result<()> {
        let start = Instant::now();
        let manifest = config
            .artifacts
            .as_deref()
            .map(|path| (&processed.artifacts, path));
        write_outputs(&processed.frame, &config.output, manifest).context("write")?;
        debug!(duration_ms = start.elapsed().as_millis(), "write complete");
        Ok(())
    })?;

    let output_columns: Vec<String> = processed
        .frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let duration_ms = pipeline_start.elapsed().as_millis();
    info!(
        rows = processed.frame.height(),
        columns = output_columns.len(),
        rows_removed = processed.report.rows_removed(),
        duration_ms,
        "pipeline complete"
    );

    Ok(PipelineResult {
        input: config.input.clone(),
        output: config.output.clone(),
        artifacts_path: config.artifacts.clone(),
        input_rows: raw.height(),
        input_columns: raw.width(),
        output_rows: processed.frame.height(),
        output_columns,
        renamed: processed.renamed,
        report: processed.report,
        artifacts: processed.artifacts,
        duration_ms,
    })
}

/// What the configured run does to `field`, in stage order.
pub fn field_fate(field: ListingField, options: &ProcessingOptions) -> String {
    let name = field.name();
    let listed = |columns: &[String]| columns.iter().any(|column| column == name);

    if listed(&options.clean.drop_columns) {
        return "dropped".to_string();
    }
    let mut steps = Vec::new();
    if listed(&options.clean.zero_fill_columns) {
        steps.push("missing -> 0".to_string());
    }
    if listed(&options.encode.ordinal_columns) {
        steps.push("ordinal".to_string());
    }
    if options.encode.one_hot_column == name {
        steps.push(format!("one-hot -> {}<value>", options.encode.one_hot_prefix));
    }
    if listed(&options.scale_columns) {
        steps.push(format!("scaled -> {name}{SCALE_SUFFIX}"));
    }
    if steps.is_empty() {
        "kept".to_string()
    } else {
        steps.join(", ")
    }
}
