mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use cli::Args;
use error::{AppError, ExitCode};
use output::{display_preview, display_preview_simple, should_use_colors};
use renamepipe::config::config_from_env;
use renamepipe::{read_preset, scan_files, OperationKind, PipelineStore, ScanOptions};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            std::process::exit(code.into());
        }
    };

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

/// Split `KIND[=JSON]` into the kind and an optional config patch
fn parse_op_arg(spec: &str) -> Result<(OperationKind, Option<serde_json::Value>), AppError> {
    let (kind, patch) = match spec.split_once('=') {
        Some((kind, patch)) => (kind.trim(), Some(patch)),
        None => (spec.trim(), None),
    };

    let kind: OperationKind = kind.parse().map_err(|e: renamepipe::operation::UnknownKind| {
        AppError::InvalidOperation {
            spec: spec.to_string(),
            message: e.to_string(),
        }
    })?;

    let patch = patch
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .map_err(|e| AppError::InvalidOperation {
            spec: spec.to_string(),
            message: format!("Invalid JSON: {}", e),
        })?;

    Ok((kind, patch))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = config_from_env();
    debug!(?config, "Configuration loaded");

    let mut store = PipelineStore::new();

    // Step 1: Queue files
    let files = scan_files(
        &args.target_dir,
        ScanOptions {
            include_hidden: args.include_hidden,
        },
    )?;
    info!("Found {} files in {:?}", files.len(), args.target_dir);
    store.ingest(files);

    // Step 2: Build the pipeline
    if let Some(preset_arg) = &args.preset {
        let path = config.resolve_preset(preset_arg);
        let preset = read_preset(&path).map_err(|e| AppError::from_preset(path.clone(), e))?;
        store.apply_preset(&preset);
    }

    for spec in &args.operations {
        let (kind, patch) = parse_op_arg(spec)?;
        let id = store.add_operation(kind);
        if let Some(patch) = patch {
            store
                .update_operation(id, &patch)
                .map_err(|e| AppError::from_store(spec, e))?;
        }
    }

    // Step 3: Show the preview
    let rows = store.preview();
    let mut stdout = std::io::stdout();
    let written = if args.simple {
        display_preview_simple(&rows, &mut stdout)
    } else {
        display_preview(&rows, store.operations(), should_use_colors(), &mut stdout)
    };
    written.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    let invalid: Vec<String> = rows
        .iter()
        .filter(|r| !r.is_valid)
        .map(|r| {
            let reason = r.issue.map(|i| i.to_string()).unwrap_or_default();
            format!("{} -> {} ({})", r.original, r.proposed, reason)
        })
        .collect();

    if args.strict && !invalid.is_empty() {
        return Err(AppError::InvalidNames {
            count: invalid.len(),
            examples: invalid,
        });
    }

    Ok(())
}
