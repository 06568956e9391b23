use std::io;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use survey_ingest::{AgeRange, IngestOptions, ParseOutcome, parse_with_options, read_survey_text};
use survey_report::{build_dashboard, write_records_csv, write_records_csv_file};

use survey_cli::render::{render_facets, summaries};

use crate::cli::{InputArgs, OutputFormatArg, ParseArgs};
use crate::summary::print_dimension_summary;
use crate::types::ParseResult;

pub fn run_parse(args: &ParseArgs) -> Result<ParseResult> {
    let (outcome, encoding) = load(&args.input)?;
    let data = build_dashboard(&outcome.records);

    match (args.format, &args.out) {
        (OutputFormatArg::Json, Some(path)) => data.write_json_file(path)?,
        (OutputFormatArg::Json, None) => data.write_json(io::stdout().lock())?,
        (OutputFormatArg::Csv, Some(path)) => write_records_csv_file(path, &data.records)?,
        (OutputFormatArg::Csv, None) => write_records_csv(io::stdout().lock(), &data.records)?,
    }

    Ok(ParseResult {
        input: args.input.file.clone(),
        encoding,
        stats: outcome.stats,
        records: outcome.records.len(),
        output: args.out.clone(),
    })
}

pub fn run_summary(args: &InputArgs) -> Result<()> {
    let (outcome, _) = load(args)?;
    for summary in summaries(&outcome.records) {
        print_dimension_summary(&summary);
    }
    Ok(())
}

pub fn run_facets(args: &InputArgs) -> Result<()> {
    let (outcome, _) = load(args)?;
    let data = build_dashboard(&outcome.records);
    print!("{}", render_facets(&data.facets));
    Ok(())
}

fn ingest_options(args: &InputArgs) -> Result<IngestOptions> {
    if args.min_age > args.max_age {
        bail!(
            "--min-age ({}) must not exceed --max-age ({})",
            args.min_age,
            args.max_age
        );
    }
    if args.delimiter == '"' || args.delimiter == '\n' {
        bail!("unsupported delimiter {:?}", args.delimiter);
    }
    Ok(IngestOptions::new()
        .with_delimiter(args.delimiter)
        .with_header_lines(args.header_lines)
        .with_age_range(AgeRange::new(args.min_age, args.max_age)))
}

fn load(args: &InputArgs) -> Result<(ParseOutcome, survey_ingest::SourceEncoding)> {
    let span = info_span!("survey", path = %args.file.display());
    let _guard = span.enter();
    let options = ingest_options(args)?;
    let decoded = read_survey_text(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let outcome = parse_with_options(&decoded.text, &options);
    info!(
        records = outcome.records.len(),
        rejected = outcome.stats.rejected,
        "loaded survey"
    );
    Ok((outcome, decoded.encoding))
}
