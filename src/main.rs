use anyhow::{anyhow, Context, Result as AnyhowResult};
use clap::Parser;
use codeview::app::App;
use codeview::config::Config;
use codeview::file_tree::template::{load_nodes, parse_nodes};
use codeview::file_tree::FileTree;
use codeview::library::TemplateLibrary;
use codeview::playback::{Snippet, TypingPlayback};
use codeview::services::time_source::RealTimeSource;
use codeview::services::{log_dirs, tracing_setup};
use codeview::ui;
use codeview::ui::playback::PlaybackRenderer;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Tree shown when no tree file or library is given
const DEMO_TREE: &str = include_str!("../demos/portfolio.json");

/// How long to wait for input before redrawing the viewer
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Frame interval while typing playback runs
const PLAYBACK_FRAME: Duration = Duration::from_millis(20);

/// A read-only code viewer for authored file trees
#[derive(Parser, Debug)]
#[command(name = "codeview")]
#[command(about = "Browse a tree of folders and files in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// JSON tree template to open (defaults to a bundled demo)
    #[arg(value_name = "TREE")]
    tree: Option<PathBuf>,

    /// Title shown above the viewer
    #[arg(long)]
    title: Option<String>,

    /// Directory of JSON tree templates
    #[arg(long, value_name = "DIR", requires = "project")]
    library: Option<PathBuf>,

    /// Template to open from --library, by file stem
    #[arg(long, value_name = "NAME", requires = "library")]
    project: Option<String>,

    /// Type out every file of TREE instead of opening the viewer
    #[arg(long, value_name = "TREE", conflicts_with_all = ["tree", "library"])]
    preview: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: per-process file in the state directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!(
            "Warning: logging disabled, cannot open {}: {}",
            log_file.display(),
            e
        );
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("codeview {} starting", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.preview {
        let tree = load_tree_file(path)?;
        let snippets = Snippet::from_tree(&tree);
        let playback = TypingPlayback::new(snippets, &config.playback, RealTimeSource::shared())
            .ok_or_else(|| anyhow!("{} has no files to preview", path.display()))?;
        return with_terminal(|terminal| run_preview(terminal, playback));
    }

    let (tree, title) = resolve_tree(&args)?;
    let mut app = App::new(config, tree, title);
    let result = with_terminal(|terminal| run_viewer(terminal, &mut app));
    tracing::info!("codeview exiting");
    result
}

/// Pick the tree to open and its title from the command line
fn resolve_tree(args: &Args) -> AnyhowResult<(Arc<FileTree>, String)> {
    if let (Some(dir), Some(project)) = (&args.library, &args.project) {
        let library = TemplateLibrary::load_dir(dir)
            .with_context(|| format!("Failed to load template library {}", dir.display()))?;
        let tree = library.get(project).ok_or_else(|| {
            let known: Vec<&str> = library.names().collect();
            anyhow!(
                "No template named {:?} in {} (available: {})",
                project,
                dir.display(),
                known.join(", ")
            )
        })?;
        let title = args.title.clone().unwrap_or_else(|| project.clone());
        return Ok((tree, title));
    }

    if let Some(path) = &args.tree {
        let tree = load_tree_file(path)?;
        let title = args.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });
        return Ok((Arc::new(tree), title));
    }

    let nodes = parse_nodes(DEMO_TREE).context("Bundled demo tree is invalid")?;
    let title = args.title.clone().unwrap_or_else(|| "Demo".to_string());
    Ok((Arc::new(FileTree::from_nodes(nodes)), title))
}

fn load_tree_file(path: &Path) -> AnyhowResult<FileTree> {
    let nodes =
        load_nodes(path).with_context(|| format!("Failed to load tree {}", path.display()))?;
    Ok(FileTree::from_nodes(nodes))
}

/// Run `f` inside the alternate screen with mouse and focus reporting enabled,
/// restoring the terminal afterwards even if `f` fails
fn with_terminal<F>(f: F) -> AnyhowResult<()>
where
    F: FnOnce(&mut DefaultTerminal) -> AnyhowResult<()>,
{
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange) {
        tracing::warn!("Failed to enable mouse capture: {}", e);
    }

    let result = f(&mut terminal);

    if let Err(e) = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture) {
        tracing::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    result
}

fn run_viewer(terminal: &mut DefaultTerminal, app: &mut App) -> AnyhowResult<()> {
    loop {
        app.process_close_notifications();
        if app.should_quit() {
            return Ok(());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(IDLE_POLL)? {
            continue;
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            CrosstermEvent::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

fn run_preview(terminal: &mut DefaultTerminal, mut playback: TypingPlayback) -> AnyhowResult<()> {
    loop {
        playback.update();
        terminal.draw(|frame| {
            let area = frame.area();
            PlaybackRenderer::render(&playback, frame, area);
        })?;

        if !event::poll(PLAYBACK_FRAME)? {
            continue;
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Char(' ') => playback.set_in_view(!playback.is_in_view()),
                _ => {}
            },
            CrosstermEvent::FocusLost => playback.set_in_view(false),
            CrosstermEvent::FocusGained => playback.set_in_view(true),
            _ => {}
        }
    }
}
