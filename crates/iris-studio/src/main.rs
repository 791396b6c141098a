//! Terminal workbench for CSS linear gradients: live preview, stop
//! editing, derived CSS / Tailwind output, and a saved-gradient library
//! persisted under a local store directory.

mod editor;
mod logging;
mod render;
mod theme;
mod tour;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use iris_store::{FileStore, GradientLibrary, SessionPrefs};

use crate::editor::Editor;
use crate::logging::LoggingConfig;
use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(name = "iris-studio", version, about = "A CSS linear-gradient workbench for the terminal")]
struct Args {
    /// Directory session state (gradients, theme, tour flag) lives under
    #[arg(long, default_value = ".iris")]
    store_dir: PathBuf,

    /// Theme id to switch to at startup (persists, like choosing it inside)
    #[arg(long)]
    theme: Option<String>,

    /// Disable ANSI color output
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. "debug" or "iris_store=debug"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(LoggingConfig { filter: args.log.clone(), color: !args.no_color });

    fs::create_dir_all(&args.store_dir)
        .with_context(|| format!("cannot create store directory {}", args.store_dir.display()))?;

    let library = GradientLibrary::new(FileStore::new(&args.store_dir));
    let mut prefs = SessionPrefs::new(FileStore::new(&args.store_dir));
    let theme = resolve_theme(args.theme.as_deref(), &mut prefs);

    banner(theme);

    let mut editor = Editor::new(library, prefs, theme, !args.no_color);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    editor.run(&mut input, &mut output)?;
    Ok(())
}

/// Picks the session theme: the `--theme` flag wins (and persists, same as
/// choosing it interactively), then the stored choice, then the default.
/// Unknown ids fall through rather than fail.
fn resolve_theme(cli: Option<&str>, prefs: &mut SessionPrefs<FileStore>) -> &'static Theme {
    if let Some(id) = cli {
        match theme::find(id) {
            Some(chosen) => {
                prefs.set_theme(chosen.id);
                return chosen;
            }
            None => log::warn!("unknown theme {id:?}; keeping the stored choice"),
        }
    }
    prefs.theme().and_then(|id| theme::find(&id)).unwrap_or_else(theme::default_theme)
}

fn banner(theme: &Theme) {
    println!();
    println!("  ╔════════════════════════════════════════════╗");
    println!("  ║        IRIS GRADIENT WORKBENCH v0.1        ║");
    println!("  ║   live preview  ·  css + tailwind output   ║");
    println!("  ╚════════════════════════════════════════════╝");
    println!();
    println!("  theme: {}  ·  `help` lists commands, `quit` leaves", theme.name);
}
