use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use overkill_gui::actions::files;
use overkill_gui::actions::pump::READ_BUFFER_CAPACITY;
use overkill_gui::actions::stream::Peer;
use overkill_gui::config::ConfigPaths;
use overkill_gui::data::state::AppState;
use overkill_gui::ui;

/// Terminal chat window for a peer process's stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "overkill-gui")]
#[command(version, about, long_about = None)]
struct Args {
    /// Layout description (default: $OVERKILL_LAYOUT or gui/lib/starter.layout.ron)
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Theme file (default: $OVERKILL_THEME or gui/lib/starter.theme.ron)
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Write starter layout and theme files into DIR and exit
    #[arg(long, value_name = "DIR")]
    init: Option<PathBuf>,

    /// Bytes drained from the peer per idle cycle
    #[arg(long, value_name = "BYTES", default_value_t = READ_BUFFER_CAPACITY)]
    read_buffer: usize,

    /// Append diagnostics to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Spawn this peer instead of using our own stdin/stdout
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    let args = Args::parse();

    // Handle --init flag: write templates and exit
    if let Some(dir) = args.init {
        match files::create_templates(&dir) {
            Ok((layout, theme)) => {
                println!("Created {} and {}", layout.display(), theme.display());
                return;
            }
            Err(e) => {
                eprintln!("Error creating templates: {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error opening log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let paths = ConfigPaths::resolve(args.layout, args.theme);
    tracing::info!(layout = %paths.layout.display(), theme = %paths.theme.display(), "loading UI files");

    let layout = match files::load_layout(&paths.layout) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error loading layout: {}", e);
            std::process::exit(1);
        }
    };
    let palette = match files::load_theme(&paths.theme) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error loading theme: {}", e);
            std::process::exit(1);
        }
    };

    let peer = match args.command.split_first() {
        Some((program, rest)) => Peer::spawn(program, rest),
        None => Peer::from_stdio(),
    };
    let mut peer = match peer {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error attaching peer: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = AppState::new(layout, palette);
    if let Err(e) = ui::app::run(&mut state, &mut peer, args.read_buffer) {
        tracing::error!(error = %e, "UI failed");
        eprintln!("Error running UI: {}", e);
        std::process::exit(1);
    }
}

/// Send tracing output to `path`; stdout belongs to the peer.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
