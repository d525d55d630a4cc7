//! gqlinline - inline GraphQL codegen call sites ahead of the bundler

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use gqlinline::adapter::{load_artifact, transform_module, ModuleFilter};
use gqlinline_core::RewriteOptions;

#[derive(Parser)]
#[command(name = "gqlinline")]
#[command(about = "Inline GraphQL codegen call sites into precompiled artifact references")]
#[command(version)]
struct Cli {
    /// Modules to transform
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Artifact directory holding the generated document module
    #[arg(long, value_name = "DIR")]
    artifact_dir: String,

    /// JSON manifest mapping document names to precompiled documents;
    /// when given, documents are inlined instead of imported
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Glob pattern of files to include (repeatable; default: **/*.ts, **/*.tsx)
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Glob pattern of files to exclude (repeatable; default: **/node_modules/**)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Query-definition function name
    #[arg(long, default_value = "graphql")]
    definition_function: String,

    /// Fragment-binding function name
    #[arg(long, default_value = "useFragment")]
    binding_function: String,

    /// Rewrite files in place instead of printing to stdout
    #[arg(long)]
    write: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let filter = ModuleFilter::new(&cli.include, &cli.exclude)?;
    let artifact = load_artifact(&cli.artifact_dir, cli.manifest.as_deref())?;
    let options = RewriteOptions {
        definition_function: cli.definition_function,
        binding_function: cli.binding_function,
    };

    let mut rewritten = 0usize;
    for path in &cli.files {
        if !filter.matches(path) {
            debug!(path = %path.display(), "filtered out");
            continue;
        }

        let source = fs::read_to_string(path)
            .context(format!("failed to read {}", path.display()))?;

        let Some(output) = transform_module(path, &source, &artifact, &options)? else {
            continue;
        };

        if cli.write {
            fs::write(path, &output.text)
                .context(format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "rewritten in place");
        } else {
            print!("{}", output.text);
        }
        rewritten += 1;
    }

    info!(rewritten, total = cli.files.len(), "done");
    Ok(())
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "gqlinline={level},gqlinline_core={level},gqlinline_rewriter={level}"
        ))
        .init();
}
