//! Main workflow orchestration logic
//!
//! Runs one bump pass against a repository: classify HEAD, bump the manifest,
//! stage it and amend the commit. Kept apart from `main.rs` so the workflow
//! can be driven programmatically with any [`Repository`].

use semver::Version;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::analyzer::classify;
use crate::config::load_config;
use crate::domain::{format_new_header, CommitMessage, NoBumpReason, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use crate::manifest::Manifest;

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Directory to start the manifest search from; the working tree root by default
    pub start_dir: Option<PathBuf>,

    /// Preview mode - compute everything, write nothing
    pub dry_run: bool,
}

/// Result of a bump workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// The manifest was bumped and the commit amended
    Bumped {
        bump: VersionBump,
        from: Version,
        to: Version,
        message: String,
        staged: Vec<PathBuf>,
    },

    /// Dry run: what would have happened
    DryRun {
        bump: VersionBump,
        from: Version,
        to: Version,
        message: String,
    },

    /// The commit does not call for a bump
    Skipped(NoBumpReason),
}

/// Main bump workflow
///
/// 1. Locate the project manifest
/// 2. Load keyword and tag configuration
/// 3. Classify the HEAD commit message
/// 4. Bump the manifest version and stage changed files
/// 5. Amend HEAD with the version tag in its header
pub fn run_bump<R: Repository>(repo: &R, args: &BumpWorkflowArgs) -> Result<BumpOutcome> {
    let workdir = canonical(repo.workdir()?);
    let start = match &args.start_dir {
        Some(dir) => canonical(dir.clone()),
        None => workdir.clone(),
    };
    // a manifest above the working tree belongs to another project
    let manifest = Manifest::discover(&start, Some(workdir.as_path()))?;
    debug!(root = %manifest.root().display(), kind = ?manifest.kind(), "found manifest");

    let config = load_config(args.config_path.as_deref(), manifest.root())?;

    let raw_message = repo.head_message()?;
    let commit = CommitMessage::parse(&raw_message);
    let decision = classify(&commit, &config.keyword_set(), &config.skip);

    let bump = match decision.into_bump() {
        Ok(bump) => bump,
        Err(reason) => {
            info!(%reason, header = commit.header(), "bump not needed");
            return Ok(BumpOutcome::Skipped(reason));
        }
    };

    let style = config.tag_style();

    if args.dry_run {
        let from = manifest.version()?;
        let to = manifest.next_version(bump)?;
        let message = format_new_header(&commit, &to.to_string(), &style).to_string();
        return Ok(BumpOutcome::DryRun {
            bump,
            from,
            to,
            message,
        });
    }

    let bumped = manifest.bump(bump)?;
    repo.stage_paths(&bumped.changed)?;

    let message = format_new_header(&commit, &bumped.current.to_string(), &style).to_string();
    repo.amend_head_message(&message)?;
    info!(%bump, from = %bumped.previous, to = %bumped.current, "amended commit");

    Ok(BumpOutcome::Bumped {
        bump,
        from: bumped.previous,
        to: bumped.current,
        message,
        staged: bumped.changed,
    })
}

fn canonical(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}
