use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use listing_cli::pipeline::{field_fate, run_pipeline};
use listing_cli::types::{PipelineConfig, PipelineResult};
use listing_ingest::{IngestOptions, profile_columns, read_listings, read_schema};
use listing_model::{EncodeOptions, ListingField, ProcessingOptions, SchemaPolicy};

use crate::cli::{InspectArgs, RunArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run(args: &RunArgs) -> Result<PipelineResult> {
    let policy = if args.lenient_schema {
        SchemaPolicy::Lenient
    } else {
        SchemaPolicy::Strict
    };
    let options = ProcessingOptions::listings()
        .with_schema_policy(policy)
        .with_encode(EncodeOptions::default().with_cardinality_warning(args.one_hot_warning));
    let config = PipelineConfig::new(&args.input, &args.output)
        .with_artifacts(args.artifacts.clone())
        .with_ingest(IngestOptions::default().with_delimiter(args.delimiter))
        .with_options(options);
    run_pipeline(&config)
}

pub fn run_schema() -> Result<()> {
    let options = ProcessingOptions::listings();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source"),
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Pipeline"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for field in ListingField::ALL {
        table.add_row(vec![
            dim_cell(field.position() + 1),
            Cell::new(field.description()),
            Cell::new(field.name()),
            Cell::new(field.kind()),
            Cell::new(field_fate(field, &options)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let path = &args.input;
    let ingest = IngestOptions::default().with_delimiter(args.delimiter);
    let headers = read_schema(path, &ingest)
        .with_context(|| format!("read header of {}", path.display()))?;
    let df = read_listings(path, &ingest).with_context(|| format!("load {}", path.display()))?;
    info!(rows = df.height(), columns = df.width(), "inspected file");

    println!("File: {}", path.display());
    println!("Rows: {}", df.height());
    let expected = ListingField::ALL.len();
    if headers.len() == expected {
        println!("Columns: {} (matches the listing schema)", headers.len());
    } else {
        println!(
            "Columns: {} (listing schema expects {expected})",
            headers.len()
        );
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Renamed to"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let aligned = headers.len() == expected;
    for (index, profile) in profile_columns(&df).into_iter().enumerate() {
        let field = if aligned {
            ListingField::ALL.get(index).copied()
        } else {
            ListingField::from_name(&profile.name)
        };
        let renamed = field.map_or_else(|| "-".to_string(), |field| field.name().to_string());
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(profile.name),
            dim_cell(renamed),
            Cell::new(profile.dtype),
            Cell::new(profile.nulls),
            Cell::new(format!("{:.2}", profile.missing_percent)),
        ]);
    }
    println!("{table}");
    Ok(())
}
