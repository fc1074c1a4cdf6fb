//! One translation run: models in, `.aidl` files and a conversion log out.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use hidl2aidl_ast::{Ast, DeclId};
use hidl2aidl_emitter::{AidlEmitter, EmitError, EmitOptions};

use crate::args::CliArgs;
use crate::config::resolve_options;
use crate::coordinator::{expand_targets, load_models};
use crate::output::DirectoryOutput;

pub const CONVERSION_LOG: &str = "conversion.log";

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Files written, relative to the output directory, in target order.
    pub files: Vec<PathBuf>,
    pub notes_path: PathBuf,
}

/// What one target produced.
struct TargetOutput {
    files: Vec<PathBuf>,
    notes: Vec<u8>,
}

pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let options = resolve_options(args)?;
    let ast = load_models(&args.models).context("failed to load models")?;
    let targets = expand_targets(&ast, &args.targets)?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let output = DirectoryOutput::new(&args.output);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.unwrap_or(0))
        .build()
        .context("failed to start worker threads")?;

    let results: Vec<Result<TargetOutput, EmitError>> = pool.install(|| {
        targets
            .par_iter()
            .map(|&id| translate(&ast, &options, &output, id))
            .collect()
    });

    let mut summary = RunSummary {
        notes_path: args.output.join(CONVERSION_LOG),
        ..RunSummary::default()
    };
    let mut notes = Vec::new();
    let mut failure = None;
    for result in results {
        match result {
            Ok(target) => {
                summary.files.extend(target.files);
                notes.extend(target.notes);
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    fs::write(&summary.notes_path, &notes)
        .with_context(|| format!("failed to write {}", summary.notes_path.display()))?;

    if let Some(err) = failure {
        return Err(err).context("translation failed");
    }
    tracing::info!(files = summary.files.len(), "translation finished");
    Ok(summary)
}

fn translate(
    ast: &Ast,
    options: &EmitOptions,
    output: &DirectoryOutput,
    id: DeclId,
) -> Result<TargetOutput, EmitError> {
    let mut notes = Vec::new();
    let files = AidlEmitter::new(ast, options, output, &mut notes).emit(id)?;
    Ok(TargetOutput { files, notes })
}
