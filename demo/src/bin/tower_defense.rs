//! Headless tower-defense run: towers block tiles, enemies walk the
//! replanned path from the start tile to the base.

use std::path::PathBuf;

use clap::Parser;
use gamesearch_core::Point;
use gamesearch_demo::{init_logging, load_grid_config, parse_tile, render_grid};
use gamesearch_paths::{FollowerConfig, GridConfig, PathFollower, TileGrid};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "tower-defense")]
#[command(about = "Place towers on a tile grid and watch enemies path around them")]
#[command(version)]
struct Args {
    /// JSON grid layout; fields left out keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tower placed before the first enemy spawns, as row,col (repeatable)
    #[arg(short, long = "tower", value_parser = parse_tile)]
    towers: Vec<Point>,

    /// Tower placed once the first enemy is halfway along, as row,col (repeatable)
    #[arg(long = "late-tower", value_parser = parse_tile)]
    late_towers: Vec<Point>,

    /// Number of extra towers at random tiles
    #[arg(long, default_value_t = 0)]
    random_towers: usize,

    /// Seed for random tower placement
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Enemies to spawn
    #[arg(short, long, default_value_t = 3)]
    enemies: usize,

    /// Seconds between spawns
    #[arg(long, default_value_t = 1.0)]
    spawn_interval: f32,

    /// Give up after this many simulated seconds
    #[arg(long, default_value_t = 60.0)]
    max_seconds: f32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_tower(grid: &mut TileGrid, p: Point) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(center) = grid.tile(p).map(|t| t.center()) else {
        return Err(format!("tile {p} is outside the grid").into());
    };
    if !grid.process_click(center) {
        log::warn!("cannot select {p}");
        return Ok(false);
    }
    Ok(grid.build_tower()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => load_grid_config(path)?,
        None => GridConfig::default(),
    };
    let mut grid = TileGrid::new(config)?;

    for &p in &args.towers {
        build_tower(&mut grid, p)?;
    }
    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.random_towers {
        let p = Point::at(
            rng.random_range(0..config.rows),
            rng.random_range(0..config.cols),
        );
        build_tower(&mut grid, p)?;
    }
    println!("{}", render_grid(&grid, &[]));
    if let Some(path) = grid.path() {
        log::info!("path: {} tiles", path.len());
    }

    let halfway = grid.path().map_or(0, |p| p.len() / 2);
    let mut late = args.late_towers.clone();
    let mut enemies: Vec<PathFollower> = Vec::with_capacity(args.enemies);
    let mut spawned = 0;
    let mut next_spawn = 0.0f32;
    let mut elapsed = 0.0f32;

    while elapsed < args.max_seconds {
        if spawned < args.enemies && elapsed >= next_spawn {
            let mut e = PathFollower::new(FollowerConfig::default());
            e.start_path(&grid);
            enemies.push(e);
            spawned += 1;
            next_spawn += args.spawn_interval;
            log::debug!("enemy {spawned} spawned at {elapsed:.2}s");
        }

        for e in enemies.iter_mut() {
            e.update(&grid, DT);
        }
        elapsed += DT;

        let first_halfway = enemies
            .first()
            .and_then(|e| e.next_waypoint())
            .and_then(|w| grid.path().and_then(|p| p.iter().position(|&q| q == w)))
            .is_some_and(|i| i >= halfway);
        if first_halfway && !late.is_empty() {
            for p in late.drain(..) {
                build_tower(&mut grid, p)?;
            }
            println!("{}", render_grid(&grid, &enemies));
        }

        if spawned == args.enemies && enemies.iter().all(PathFollower::has_arrived) {
            break;
        }
    }

    let arrived = enemies.iter().filter(|e| e.has_arrived()).count();
    println!("{}", render_grid(&grid, &enemies));
    println!("{arrived}/{} enemies reached the base in {elapsed:.2}s", args.enemies);
    Ok(())
}
