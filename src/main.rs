use anyhow::Context;
use clap::Parser;
use drawcmd::config::{ColorChoice, Config};
use drawcmd::draw::CairoCanvas;
use drawcmd::input::{History, InterpreterState};
use drawcmd::ui;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drawcmd")]
#[command(version, about = "Line-command interpreter for 2D shape drawing")]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DRAWCMD_GIT_HASH"), ")"))]
#[command(after_help = "Commands (color is optional and defaults to black):
  line x1 y1 x2 y2 [color]
  circle|fcircle x y radius [color]
  rectangle|frectangle x y width height [color]
  square|fsquare x y side [color]
  triangle|ftriangle x1 y1 x2 y2 x3 y3 [color]
  trapezoid|ftrapezoid x1 y1 x2 y2 x3 y3 x4 y4 [color]
  background color")]
struct Cli {
    /// Read commands from FILE instead of standard input
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Load configuration from FILE instead of ~/.config/drawcmd/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// When to highlight rejected commands (auto, always, never)
    #[arg(long, value_name = "WHEN")]
    color: Option<ColorChoice>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let stdout = io::stdout();
    let color = cli
        .color
        .unwrap_or(config.ui.color)
        .enabled(stdout.is_terminal());

    let canvas = CairoCanvas::new(
        config.canvas.width,
        config.canvas.height,
        &config.canvas.background,
    )
    .context("Failed to create drawing canvas")?;
    log::info!(
        "Canvas {}x{} ready (background {})",
        canvas.width(),
        canvas.height(),
        config.canvas.background
    );

    let interactive = cli.script.is_none() && io::stdin().is_terminal();
    let mut reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut state = InterpreterState::new(canvas, History::new());
    let mut out = stdout.lock();

    loop {
        if interactive {
            write!(out, "{}", config.ui.prompt)?;
            out.flush()?;
        }
        let Some(line) = read_command_line(&mut reader).context("Failed to read command line")?
        else {
            break;
        };

        state.submit(&line);
        if let Some(entry) = state.history().last() {
            writeln!(out, "{}", ui::format_history_entry(entry, color))?;
        }
    }

    let history = state.history();
    log::info!(
        "Session finished: {} commands ({} valid, {} invalid), {} shapes on canvas",
        history.len(),
        history.valid_count(),
        history.invalid_count(),
        state.surface.frame().len()
    );

    Ok(())
}

/// Reads one line without its terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line becomes an invalid command instead of ending the session.
fn read_command_line(reader: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    if std::str::from_utf8(&buf).is_err() {
        log::warn!("Replacing invalid UTF-8 in input line");
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
