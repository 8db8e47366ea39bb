use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fist_bump::cli::{run_bump, BumpOutcome, BumpWorkflowArgs};
use fist_bump::git::{Git2Repository, Repository};
use fist_bump::hooks::{self, HookInstall, HookUninstall};
use fist_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "fist-bump",
    about = "Bump the project version from keywords in the latest commit message"
)]
struct Args {
    #[arg(short = 'I', long, help = "Install the post-commit git hook")]
    install: bool,

    #[arg(
        short = 'U',
        long,
        conflicts_with = "install",
        help = "Uninstall the post-commit git hook"
    )]
    uninstall: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview the bump without changing any file or commit")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.version {
        println!("fist-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    if args.install {
        match hooks::install_hook(&repo.git_dir()) {
            Ok(HookInstall::Installed { .. }) => ui::display_success("Git hook installed successfully."),
            Ok(HookInstall::InstalledWithBackup { backup, .. }) => ui::display_success(&format!(
                "Git hook installed successfully. Previous hook saved to {}",
                backup.display()
            )),
            Ok(HookInstall::AlreadyInstalled { .. }) => {
                ui::display_status("Git hook is already installed.")
            }
            Err(e) => {
                ui::display_error(&format!("Failed to install git hook. {}", e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if args.uninstall {
        match hooks::uninstall_hook(&repo.git_dir()) {
            Ok(HookUninstall::Removed { .. }) => {
                ui::display_success("Git hook uninstalled successfully.")
            }
            Ok(HookUninstall::Restored { .. }) => ui::display_success(
                "Git hook uninstalled successfully. Previous hook restored.",
            ),
            Ok(HookUninstall::NotInstalled) => ui::display_status("Git hook is not installed."),
            Ok(HookUninstall::NotOurs { path }) => ui::display_warning(&format!(
                "{} was not installed by fist-bump, leaving it in place.",
                path.display()
            )),
            Err(e) => {
                ui::display_error(&format!("Failed to uninstall git hook. {}", e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let workflow_args = BumpWorkflowArgs {
        config_path: args.config,
        start_dir: std::env::current_dir().ok(),
        dry_run: args.dry_run,
    };

    match run_bump(&repo, &workflow_args) {
        Ok(BumpOutcome::Bumped { to, .. }) => {
            ui::display_success(&format!("Bumped version to {}", to));
        }
        Ok(BumpOutcome::DryRun {
            bump,
            from,
            to,
            message,
        }) => {
            ui::display_status(&format!("Dry run: {} bump {} -> {}", bump, from, to));
            ui::display_status(&format!("New commit message: {}", message));
        }
        Ok(BumpOutcome::Skipped(reason)) => {
            ui::display_warning(&format!("Bump not needed ({})", reason));
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
