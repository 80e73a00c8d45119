//! Shared helpers for the `tower-defense` and `tictactoe` binaries.

use std::path::Path;

use gamesearch_core::Point;
use gamesearch_paths::{GridConfig, PathFollower, TileGrid, TileState};

/// Initialize `env_logger`. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

/// Parse a `row,col` tile coordinate.
pub fn parse_tile(s: &str) -> Result<Point, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {s:?}"))?;
    let row = r.trim().parse::<i32>().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse::<i32>().map_err(|e| format!("bad col {c:?}: {e}"))?;
    Ok(Point::at(row, col))
}

/// Read a [`GridConfig`] from a JSON file. Missing fields keep their
/// defaults.
pub fn load_grid_config(path: &Path) -> Result<GridConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Draw the grid as text, one line per row.
///
/// `S` start, `B` base, `#` obstacle, `*` path, `@` a follower, `.` free.
pub fn render_grid(grid: &TileGrid, followers: &[PathFollower]) -> String {
    let rng = grid.range();
    let mut cells: Vec<char> = grid
        .tiles()
        .iter()
        .map(|t| {
            if t.is_blocked() {
                return '#';
            }
            match t.state() {
                TileState::Start => 'S',
                TileState::Base => 'B',
                TileState::Path => '*',
                TileState::Default => '.',
            }
        })
        .collect();
    for f in followers.iter().filter(|f| !f.has_arrived()) {
        if let Some(i) = grid.tile_at_world(f.position()).and_then(|p| rng.index_of(p)) {
            cells[i] = '@';
        }
    }
    let mut out = String::with_capacity(cells.len() + rng.height() as usize);
    for row in cells.chunks(rng.width() as usize) {
        out.extend(row);
        out.push('\n');
    }
    out
}
