use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cs_driver::rewrite_tree;
use cs_manifest::{unify_file, unify_move_file, Layout, Plan};
use cs_rules::{Transform, Variant};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "cppsweep", about = "Batch rewrites for the Generals C++ tree")]
struct Cli {
    /// Repository root containing Core/, Generals/ and GeneralsMD/.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip `\n"` / `\r\n"` escapes from logging macro strings.
    LogNewlines,
    /// Rewrite `obj->deleteInstance()` into `MemoryPoolObject::deleteInstance(obj)`.
    DeleteInstance,
    /// Drop `#ifdef RTS_INTERNAL` blocks and fold RTS_DEBUG/RTS_INTERNAL conditions.
    RemoveRtsInternal,
    /// Strip trailing whitespace and terminate the last line of every file.
    TrimWhitespace,
    /// Move one file from a game into Core and update the CMakeLists.txt entries.
    Unify {
        /// Game the file is taken from.
        #[arg(long, value_enum)]
        from: GameArg,
        /// Path inside the game's Code folder, e.g. GameEngine/Include/Common/crc.h.
        from_file: String,
        /// Path inside Core (defaults to FROM_FILE).
        to_file: Option<String>,
        /// The file exists in this game only; leave the other game untouched.
        #[arg(long)]
        move_only: bool,
    },
    /// Run the unify/move operations listed in a JSON plan.
    Apply {
        plan: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GameArg {
    /// Generals/Code
    Generals,
    /// GeneralsMD/Code
    #[value(alias = "zh", alias = "generals-md")]
    ZeroHour,
}

impl From<GameArg> for Variant {
    fn from(game: GameArg) -> Self {
        match game {
            GameArg::Generals => Variant::Generals,
            GameArg::ZeroHour => Variant::ZeroHour,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::LogNewlines => run_transform(&cli.root, Transform::LogNewlines)?,
        Commands::DeleteInstance => run_transform(&cli.root, Transform::DeleteInstance)?,
        Commands::RemoveRtsInternal => run_transform(&cli.root, Transform::RemoveRtsInternal)?,
        Commands::TrimWhitespace => run_transform(&cli.root, Transform::TrimWhitespace)?,
        Commands::Unify {
            from,
            from_file,
            to_file,
            move_only,
        } => {
            let layout = Layout::new(&cli.root);
            let to_file = to_file.as_deref().unwrap_or(&from_file);
            if move_only {
                unify_move_file(&layout, from.into(), &from_file, Variant::Core, to_file)?;
            } else {
                unify_file(&layout, from.into(), &from_file, Variant::Core, to_file)?;
            }
        }
        Commands::Apply { plan } => {
            let layout = Layout::new(&cli.root);
            let plan = Plan::from_path(&plan)
                .with_context(|| format!("failed to load plan {}", plan.display()))?;
            let done = plan.apply(&layout)?;
            tracing::info!("applied {done} relocation(s)");
        }
    }

    Ok(())
}

fn run_transform(root: &Path, transform: Transform) -> Result<()> {
    let report = rewrite_tree(root, transform)
        .with_context(|| format!("{transform} failed under {}", root.display()))?;
    tracing::info!("{report}");
    Ok(())
}
