//! CLI entry point for autodoc

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use autodoc::output::DEFAULT_BASE_NAME;
use autodoc::registry::builtin;
use autodoc::{ExportConfig, ModuleInfo, Session, SessionConfig};
use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "autodoc")]
#[command(about = "Browse a module's types and export method override records to CSV")]
#[command(version)]
struct Args {
    /// Module manifest to inspect (defaults to autodoc's own types)
    #[arg(short = 'm', long = "manifest", value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Directory the CSV file is written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// CSV file name without extension
    #[arg(short = 'n', long = "base-name", value_name = "NAME", default_value = DEFAULT_BASE_NAME)]
    base_name: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Show parameter lists and method properties
    #[arg(short = 'd', long = "details")]
    details: bool,

    /// Document every type without prompting, then exit
    #[arg(short = 'a', long = "all")]
    all: bool,
}

/// Install a stderr tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: Args) -> autodoc::Result<()> {
    let module = match &args.manifest {
        Some(path) => ModuleInfo::load(path)?,
        None => builtin::self_module()?,
    };

    let export = ExportConfig {
        directory: args.output_dir,
        base_name: args.base_name,
    };
    let log = export.open_log();
    log.reset()?;
    debug!(path = %log.path().display(), module = %module.name, "starting session");

    let config = SessionConfig {
        use_color: should_use_color(args.color),
        details: args.details,
    };
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let stdin = io::stdin().lock();
    let stdout = StandardStream::stdout(choice);
    let all = args.all;

    let mut session = Session::new(&module, log, config, stdin, stdout);
    if all {
        session.export_all()?;
    } else {
        session.run()?;
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("autodoc: {}", e);
        process::exit(1);
    }
}
