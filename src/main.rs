//! reportgen — render report files as plain text, HTML or any registered format.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `reportgen -f html < groceries.txt`
//! - **file mode**: `reportgen -f html -o out/ reports/*.txt reports/*.json`

use anyhow::{Context, Result};
use clap::Parser;
use reportgen::source;
use reportgen::{Renderer, RendererRegistry, Report};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "reportgen",
    about = "Render a titled list of items as plain text, HTML or another registered format"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: plain (default), html, html-escaped
    #[arg(short = 'f', long, default_value = "plain")]
    format: String,

    /// Print the registered formats and exit
    #[arg(long)]
    list_formats: bool,
}

/// Run configuration for [`stdin_mode`] and [`file_mode`].
struct RunConfig<'a> {
    registry: &'a RendererRegistry,
    format: &'a str,
    output_dir: Option<&'a Path>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            let code = e
                .downcast_ref::<reportgen::Error>()
                .map(reportgen::Error::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// Log filter comes from `REPORTGEN_LOG`, e.g. `REPORTGEN_LOG=debug`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("REPORTGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let registry = RendererRegistry::with_defaults()?;

    if cli.list_formats {
        for name in registry.formats() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = RunConfig {
        registry: &registry,
        format: &cli.format,
        output_dir: cli.output.as_deref(),
    };

    if cli.files.is_empty() {
        return stdin_mode(&config);
    }

    file_mode(&cli.files, &config)
}

/// stdin mode: read one text report from stdin, write the rendering to stdout.
fn stdin_mode(config: &RunConfig) -> Result<()> {
    let renderer = config.registry.resolve(config.format)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let data = source::parse_text(&input).context("failed to parse stdin")?;
    println!("{}", Report::new(data, renderer.as_ref()).render());
    Ok(())
}

/// file mode: render every input file into the output directory.
fn file_mode(patterns: &[String], config: &RunConfig) -> Result<()> {
    let output_dir = config
        .output_dir
        .context("--output is required when files are given")?;

    let renderer = config.registry.resolve(config.format)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_inputs(patterns)?;

    // Output path → the input that produced it. Two inputs sharing a stem
    // (groceries.txt, groceries.json) would otherwise overwrite each other.
    let mut written: HashMap<PathBuf, &Path> = HashMap::new();

    for path in &input_files {
        let out_path = output_dir.join(output_file_name(path, renderer.as_ref()));
        if let Some(first) = written.get(&out_path) {
            tracing::warn!(
                file = %path.display(),
                output = %out_path.display(),
                first = %first.display(),
                "skipping report source: output already written by another input"
            );
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let data = match source::parse_file(path, &content) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping report source");
                continue;
            }
        };

        let mut output = Report::new(data, renderer.as_ref()).render();
        output.push('\n');

        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(input = %path.display(), output = %out_path.display(), "rendered report");
        written.insert(out_path, path);
    }

    Ok(())
}

/// Resolve CLI inputs to report files, sorted and deduplicated.
///
/// Each input is an existing file, a directory (its supported report sources,
/// non-recursive) or a glob pattern.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.insert(path.to_path_buf());
            continue;
        }

        let (glob_pattern, only_sources) = if path.is_dir() {
            (path.join("*").to_string_lossy().into_owned(), true)
        } else {
            (pattern.clone(), false)
        };

        let mut matched = 0;
        for candidate in glob::glob(&glob_pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && (!only_sources || source::is_supported(p)))
        {
            matched += 1;
            files.insert(candidate);
        }
        if matched == 0 {
            tracing::warn!(pattern = %pattern, "no report sources matched");
        }
    }
    Ok(files.into_iter().collect())
}

/// "reports/groceries.txt" rendered as html → "groceries.html"
fn output_file_name(source: &Path, renderer: &dyn Renderer) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    format!("{}.{}", stem, renderer.file_extension())
}
