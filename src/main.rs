use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use floodgrid::input::BoardGeometry;
use floodgrid::{GameConfig, GameSession, Palette};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "floodgrid", about = "Flood-fill puzzle demo")]
struct Args {
    /// TOML game config; built-in defaults when omitted
    config: Option<PathBuf>,

    /// Print the final board as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    println!("FLOODGRID: make the board one color");
    println!("====================================\n");

    let legend: Vec<String> = config
        .palette
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}={}", i, e.name))
        .collect();
    println!("palette: {}\n", legend.join(" "));

    let mut session = GameSession::new(config)?;
    session.start(None)?;
    show(&session, "start")?;

    play_script(&mut session)?;

    if args.json {
        println!("\n{}", serde_json::to_string_pretty(session.current_grid()?)?);
    }
    Ok(())
}

// Stand-in for a real UI: pointer positions on a 450px canvas, routed through
// the same pixel-to-cell conversion a renderer would use.
fn play_script(session: &mut GameSession) -> anyhow::Result<()> {
    let geometry = BoardGeometry::new(450.0, 450.0, session.size());
    let names: Vec<String> = session.palette().entries().iter().map(|e| e.name.clone()).collect();
    let clicks = [(10.0, 10.0), (200.0, 40.0), (440.0, 440.0), (90.0, 300.0)];

    for (i, &(x, y)) in clicks.iter().enumerate() {
        let name = &names[(i + 1) % names.len()];
        session.select_named_color(name)?;
        let cell = geometry.cell_at(x, y);
        let changed = session.click(cell)?;
        show(session, &format!("{} at ({}, {}) changed={}", name, cell.row, cell.col, changed))?;
    }

    let undone = session.undo()?;
    show(session, &format!("undo (undone={})", undone))?;

    session.rotate()?;
    show(session, "rotate")?;

    session.restart()?;
    show(session, "restart")?;
    Ok(())
}

fn show(session: &GameSession, label: &str) -> anyhow::Result<()> {
    let grid = session.current_grid()?;
    println!("--- {} ---", label);
    print_board(grid, session.palette());
    println!(
        "  score {} | history {} | solved {}\n",
        session.current_score(),
        session.history_len(),
        session.is_solved()?
    );
    Ok(())
}

fn print_board(grid: &floodgrid::Grid, palette: &Palette) {
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|&c| match palette.colors().position(|p| p == c) {
                Some(i) => i.to_string(),
                None => "?".to_string(),
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}
