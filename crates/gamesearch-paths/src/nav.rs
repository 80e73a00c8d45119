//! Agents that walk a [`TileGrid`]'s current path.
//!
//! A follower aims at the tile after the one it is standing on. Once it is
//! within `waypoint_radius` of that tile's centre it looks up the tile's
//! parent on the grid and turns toward it, so a replan takes effect at the
//! next waypoint.
//!
//! A replan can leave the follower on a tile the new search never reached.
//! It then asks the grid for a fresh route from that tile to the end and
//! walks it until it steps back onto a tile the plan covers. A follower with
//! no way forward stands still.

use gamesearch_core::{Point, Vec2};

use crate::grid::TileGrid;

/// Movement tuning for a [`PathFollower`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FollowerConfig {
    /// World units per second.
    pub speed: f32,
    /// Distance at which a waypoint counts as reached.
    pub waypoint_radius: f32,
    /// Distance to the end tile at which the follower stops.
    pub arrival_radius: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            speed: 150.0,
            waypoint_radius: 2.0,
            arrival_radius: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PathFollower {
    config: FollowerConfig,
    position: Vec2,
    heading: f32,
    next: Option<Point>,
    /// Remaining tiles of a route off the planned path, last tile first.
    detour: Vec<Point>,
    arrived: bool,
}

impl PathFollower {
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            position: Vec2::ZERO,
            heading: 0.0,
            next: None,
            detour: Vec::new(),
            arrived: false,
        }
    }

    /// Place the follower on the grid's start tile and aim at the first
    /// waypoint.
    pub fn start_path(&mut self, grid: &TileGrid) {
        let start = grid.start();
        if let Some(t) = grid.tile(start) {
            self.position = t.center();
        }
        self.arrived = false;
        self.detour.clear();
        self.next = self.successor(grid, start);
        self.aim(grid);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Heading in radians, 0 = +X, π/2 = up the screen.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Tile the follower is currently walking toward.
    pub fn next_waypoint(&self) -> Option<Point> {
        self.next
    }

    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    /// Face `target`.
    pub fn turn_to(&mut self, target: Vec2) {
        let dir = target - self.position;
        if dir.length_sq() > 0.0 {
            self.heading = dir.heading();
        }
    }

    fn aim(&mut self, grid: &TileGrid) {
        if let Some(c) = self.next.and_then(|p| grid.tile(p)).map(|t| t.center()) {
            self.turn_to(c);
        }
    }

    /// Tile to walk to after `from`. The grid's parent link wins; off the
    /// plan the follower takes its detour, rerouting when the detour is
    /// empty or runs into an obstacle.
    fn successor(&mut self, grid: &TileGrid, from: Point) -> Option<Point> {
        if let Some(p) = grid.parent(from) {
            self.detour.clear();
            return Some(p);
        }
        if from == grid.end() {
            return None;
        }
        if self.detour.last().is_none_or(|&p| grid.is_blocked(p)) {
            self.detour = match grid.find_path(from, grid.end()) {
                Ok(Some(route)) => route.into_iter().skip(1).rev().collect(),
                Ok(None) => {
                    log::warn!("no route from {from} to {}; stopping", grid.end());
                    Vec::new()
                }
                Err(e) => {
                    log::warn!("cannot route from {from}: {e}");
                    Vec::new()
                }
            };
            log::debug!("{from} is off the planned path; detour of {} tiles", self.detour.len());
        }
        self.detour.pop()
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, grid: &TileGrid, dt: f32) {
        if self.arrived {
            return;
        }

        if let Some(next) = self.next {
            let reached = grid
                .tile(next)
                .is_some_and(|t| self.position.distance(t.center()) < self.config.waypoint_radius);
            if reached {
                self.next = self.successor(grid, next);
                self.aim(grid);
            }
        }
        if self.next.is_none() {
            return;
        }

        self.position = self.position + Vec2::from_heading(self.heading) * (self.config.speed * dt);

        if let Some(end) = grid.tile(grid.end()) {
            if self.position.distance(end.center()) <= self.config.arrival_radius {
                log::debug!("follower arrived at {}", grid.end());
                self.arrived = true;
            }
        }
    }
}
