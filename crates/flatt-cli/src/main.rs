//! flatt - Turn compiled FlatBuffers schemas into JSON documents
//!
//! This tool reads binary schemas (`.bfbs`), either directly or by running
//! `flatc` on a `.fbs` source, and emits the reflection document that code
//! generation templates consume.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, ValueEnum};
use flatt_core::{Reflector, ReflectorConfig, Schema, StatsVisitor};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Turn compiled FlatBuffers schemas into JSON documents
#[derive(Parser, Debug)]
#[command(name = "flatt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Output directory for the generated documents (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Path to the flatc executable used with --schema
    #[arg(long, env = "FLATC", default_value = "flatc")]
    flatc: PathBuf,

    /// Include directories passed to flatc
    #[arg(short = 'I', long = "include")]
    include: Vec<PathBuf>,

    /// Reject binary schemas without the BFBS file identifier
    #[arg(long)]
    require_identifier: bool,

    /// Leave RPC services out of the document
    #[arg(long)]
    skip_services: bool,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,

    /// Only list found schemas without reflecting them
    #[arg(long)]
    list_only: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputMode {
    /// Path to a single binary schema (.bfbs)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory searched recursively for .bfbs files
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Path to a schema source (.fbs), compiled with flatc first
    #[arg(short, long)]
    schema: Option<PathBuf>,
}

/// Output format for reflected schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Compact,
    /// Declaration counts, one line per schema
    Summary,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Compact => "json",
            OutputFormat::Summary => "txt",
        }
    }
}

/// Tracks written documents so same-named inputs do not clobber each other
#[derive(Default)]
struct OutputRegistry {
    /// Maps output file name -> content hashes already written under it
    seen: HashMap<String, Vec<String>>,
    stats: RegistryStats,
}

#[derive(Default)]
struct RegistryStats {
    reflected: usize,
    failed: usize,
    duplicates_skipped: usize,
    conflicts_renamed: usize,
    written: usize,
}

impl OutputRegistry {
    fn new() -> Self {
        Self::default()
    }

    /// Compute a short hash of the content (first 8 chars of blake3)
    fn content_hash(content: &[u8]) -> String {
        let hash = blake3::hash(content);
        hash.to_hex()[..8].to_string()
    }

    /// Register a document and return where it should be written, or
    /// `None` if identical content was already written under this name
    fn register(&mut self, file_name: &str, content_hash: &str, output_dir: &Path) -> Option<PathBuf> {
        let variants = self.seen.entry(file_name.to_string()).or_default();

        if variants.iter().any(|h| h == content_hash) {
            debug!("Skipping duplicate: {} (hash: {})", file_name, content_hash);
            self.stats.duplicates_skipped += 1;
            return None;
        }

        let resolved = if variants.is_empty() {
            file_name.to_string()
        } else {
            let renamed = Self::add_suffix(file_name, &format!("~{}", content_hash));
            info!("Conflict resolved: {} -> {} (content differs)", file_name, renamed);
            self.stats.conflicts_renamed += 1;
            renamed
        };

        variants.push(content_hash.to_string());
        Some(output_dir.join(resolved))
    }

    /// Add a suffix before the extension
    fn add_suffix(file_name: &str, suffix: &str) -> String {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}{}.{}", stem, suffix, ext),
            None => format!("{}{}", file_name, suffix),
        }
    }

    fn print_summary(&self) {
        info!(
            "Summary: {} reflected, {} failed, {} duplicates skipped, {} conflicts renamed, {} written",
            self.stats.reflected,
            self.stats.failed,
            self.stats.duplicates_skipped,
            self.stats.conflicts_renamed,
            self.stats.written
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reflector = Reflector::with_config(
        ReflectorConfig::new()
            .require_identifier(cli.require_identifier)
            .skip_services(cli.skip_services),
    );
    let mut registry = OutputRegistry::new();

    // Dispatch based on input mode
    if let Some(ref file) = cli.input.file {
        process_single_file(&cli, &reflector, file, &mut registry)?;
    } else if let Some(ref directory) = cli.input.directory {
        process_directory(&cli, &reflector, directory, &mut registry)?;
    } else if let Some(ref schema) = cli.input.schema {
        process_source(&cli, &reflector, schema, &mut registry)?;
    } else {
        bail!("One of --file, --directory or --schema must be specified")
    }

    if cli.output.is_some() && !cli.list_only {
        registry.print_summary();
    }
    Ok(())
}

/// Process a single binary schema
fn process_single_file(
    cli: &Cli,
    reflector: &Reflector,
    file: &Path,
    registry: &mut OutputRegistry,
) -> Result<()> {
    if !file.is_file() {
        bail!("Input file does not exist or is not a file: {}", file.display());
    }
    let data = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    process_buffer(cli, reflector, file, &data, registry)
}

/// Process every `.bfbs` file below a directory, returning how many were
/// reflected
fn process_directory(
    cli: &Cli,
    reflector: &Reflector,
    directory: &Path,
    registry: &mut OutputRegistry,
) -> Result<usize> {
    if !directory.is_dir() {
        bail!("Directory does not exist or is not a directory: {}", directory.display());
    }

    info!("Scanning directory: {}", directory.display());
    let mut processed = 0;

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_binary_schema(path) {
            trace!("Skipping: {}", path.display());
            continue;
        }

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                continue;
            }
        };

        debug!("Processing schema: {}", path.display());
        match process_buffer(cli, reflector, path, &data, registry) {
            Ok(()) => processed += 1,
            // Log format errors but continue with other files
            Err(e) => match e.downcast_ref::<flatt_core::Error>() {
                Some(inner) if inner.is_recoverable() => {
                    warn!("Skipping {}: {}", path.display(), inner);
                    registry.stats.failed += 1;
                }
                _ => return Err(e),
            },
        }
    }

    info!("Processed {} schemas", processed);
    Ok(processed)
}

/// Compile a `.fbs` source with flatc into a scoped temporary directory and
/// process the result
fn process_source(
    cli: &Cli,
    reflector: &Reflector,
    source: &Path,
    registry: &mut OutputRegistry,
) -> Result<()> {
    if !source.is_file() {
        bail!("Schema source does not exist: {}", source.display());
    }
    let source = source
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", source.display()))?;

    // Removed on drop, including on every early return below
    let scratch = tempfile::tempdir().context("Failed to create temporary directory")?;

    let mut command = Command::new(&cli.flatc);
    command.args(flatc_arguments(&source, scratch.path(), &cli.include));
    debug!("Running {:?}", command);

    let status = command
        .status()
        .with_context(|| format!("Failed to run {}", cli.flatc.display()))?;
    if !status.success() {
        bail!(
            "{} failed on {} ({})",
            cli.flatc.display(),
            source.display(),
            status
        );
    }

    let compiled = compiled_path(&source, scratch.path())?;
    let data = fs::read(&compiled)
        .with_context(|| format!("flatc produced no output at {}", compiled.display()))?;

    process_buffer(cli, reflector, &source, &data, registry)
}

/// Where flatc writes the binary schema for `source`: the full stem plus
/// `.bfbs`, so `game.v2.fbs` becomes `game.v2.bfbs`
fn compiled_path(source: &Path, out_dir: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .context("Schema source has no file name")?;
    Ok(out_dir.join(format!("{}.bfbs", stem.to_string_lossy())))
}

/// Arguments for `flatc` to emit a binary schema with comments and the
/// include graph
fn flatc_arguments(source: &Path, out_dir: &Path, include: &[PathBuf]) -> Vec<String> {
    let project_root = source
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    let mut args = vec![
        "--binary".to_string(),
        "--schema".to_string(),
        "--bfbs-comments".to_string(),
        "--bfbs-builtins".to_string(),
        "--bfbs-filenames".to_string(),
        project_root,
        "-o".to_string(),
        out_dir.display().to_string(),
    ];
    for dir in include {
        args.push("-I".to_string());
        args.push(dir.display().to_string());
    }
    args.push(source.display().to_string());
    args
}

/// Returns true for files with a `.bfbs` extension
fn is_binary_schema(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("bfbs"))
        .unwrap_or(false)
}

/// Reflect over one buffer and emit the result
fn process_buffer(
    cli: &Cli,
    reflector: &Reflector,
    origin: &Path,
    data: &[u8],
    registry: &mut OutputRegistry,
) -> Result<()> {
    if cli.list_only {
        println!(
            "{}\t{}\t{} bytes",
            origin.display(),
            OutputRegistry::content_hash(data),
            data.len()
        );
        return Ok(());
    }

    let schema = reflector.reflect(data)?;
    registry.stats.reflected += 1;
    let content = render(&schema, origin, cli.format)?;

    let Some(ref output_dir) = cli.output else {
        println!("{}", content);
        return Ok(());
    };

    let stem = origin
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schema");
    let file_name = format!("{}.{}", stem, cli.format.extension());
    let hash = OutputRegistry::content_hash(content.as_bytes());

    if let Some(output_path) = registry.register(&file_name, &hash, output_dir) {
        write_output_file(&output_path, &content, cli.force)?;
        println!("Wrote {}", output_path.display());
        registry.stats.written += 1;
    }
    Ok(())
}

/// Render a schema in the requested format
fn render(schema: &Schema, origin: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(schema).context("Failed to serialize schema")
        }
        OutputFormat::Compact => serde_json::to_string(schema).context("Failed to serialize schema"),
        OutputFormat::Summary => {
            let stats = StatsVisitor::collect(schema);
            Ok(format!(
                "{}: {} tables, {} structs, {} fields ({} deprecated), {} enums, {} unions, {} services, {} calls, {} files",
                origin.display(),
                stats.table_count,
                stats.struct_count,
                stats.field_count,
                stats.deprecated_count,
                stats.enum_count,
                stats.union_count,
                stats.service_count,
                stats.call_count,
                stats.file_count
            ))
        }
    }
}

/// Write a document to disk
fn write_output_file(output_path: &Path, content: &str, force: bool) -> Result<()> {
    // Create parent directories
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Check if file exists
    if output_path.exists() && !force {
        bail!(
            "File already exists: {} (use --force to overwrite)",
            output_path.display()
        );
    }

    let mut file = fs::File::create(output_path)
        .with_context(|| format!("Failed to create file: {}", output_path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    Ok(())
}
