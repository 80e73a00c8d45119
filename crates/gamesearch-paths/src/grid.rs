//! A tower-defense style tile grid that keeps an A* path from its start
//! tile to its end tile up to date as obstacles are placed.
//!
//! The grid is a 4-neighbor lattice with edge weight `tile_size` and a
//! Euclidean heuristic between tile centres. Paths are planned from the end
//! tile back to the start tile, so following [`TileGrid::parent`] from the
//! start walks toward the end.
//!
//! Every obstacle change reruns the full search; nothing is patched
//! incrementally.

use gamesearch_core::{Point, Range, SearchError, SearchResult, Vec2};

use crate::astar::astar;
use crate::graph::{NodeId, WeightedGraph};
use crate::scratch::AstarScratch;
use crate::traits::{Heuristic, Pather, Step, WeightedPather};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Layout of a [`TileGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    /// Width and height of one tile in world units. Also the edge weight.
    pub tile_size: f32,
    /// World Y of the centre of the first row.
    pub start_y: f32,
    /// Tile where path followers spawn.
    pub start: Point,
    /// Tile path followers walk to.
    pub end: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 16,
            tile_size: 64.0,
            start_y: 192.0,
            start: Point::at(3, 0),
            end: Point::at(3, 15),
        }
    }
}

impl GridConfig {
    fn validate(&self) -> SearchResult<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(SearchError::InvalidInput(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(SearchError::InvalidInput(format!(
                "tile size must be positive, got {}",
                self.tile_size
            )));
        }
        let rng = Range::grid(self.rows, self.cols);
        for p in [self.start, self.end] {
            if !rng.contains(p) {
                return Err(SearchError::TileOutOfRange {
                    row: p.row(),
                    col: p.col(),
                });
            }
        }
        if self.start == self.end {
            return Err(SearchError::InvalidInput(
                "start and end tiles must differ".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// How a tile should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    #[default]
    Default,
    /// On the current path between start and end.
    Path,
    Start,
    /// The end tile.
    Base,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pos: Point,
    center: Vec2,
    blocked: bool,
    state: TileState,
    selected: bool,
}

impl Tile {
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Centre of the tile in world units.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn on_path(&self) -> bool {
        self.state == TileState::Path
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

// ---------------------------------------------------------------------------
// Search views
// ---------------------------------------------------------------------------

/// The lattice with edges into blocked tiles removed.
struct Passable<'a> {
    graph: &'a WeightedGraph,
    tiles: &'a [Tile],
}

impl Pather for Passable<'_> {
    fn node_count(&self) -> usize {
        self.graph.len()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        self.graph.neighbors(node, buf);
        buf.retain(|n| !self.tiles[n.0].blocked);
    }
}

impl WeightedPather for Passable<'_> {
    fn edges(&self, node: NodeId, buf: &mut Vec<Step>) {
        self.graph.edges(node, buf);
        buf.retain(|s| !self.tiles[s.to.0].blocked);
    }
}

/// Straight-line distance between tile centres.
struct TileDistance<'a> {
    tiles: &'a [Tile],
}

impl Heuristic for TileDistance<'_> {
    fn estimate(&self, from: NodeId, goal: NodeId) -> f32 {
        self.tiles[from.0].center.distance(self.tiles[goal.0].center)
    }
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// Tile grid with obstacle placement and automatic replanning.
#[derive(Debug, Clone)]
pub struct TileGrid {
    config: GridConfig,
    rng: Range,
    tiles: Vec<Tile>,
    graph: WeightedGraph,
    scratch: AstarScratch,
    selected: Option<Point>,
}

impl TileGrid {
    /// Build the grid, link every tile to its neighbors in both directions
    /// and plan the initial path.
    pub fn new(config: GridConfig) -> SearchResult<Self> {
        config.validate()?;
        let rng = Range::grid(config.rows, config.cols);
        let ts = config.tile_size;
        let tiles = rng
            .iter()
            .map(|p| Tile {
                pos: p,
                center: Vec2::new(
                    ts / 2.0 + p.col() as f32 * ts,
                    config.start_y + p.row() as f32 * ts,
                ),
                blocked: false,
                state: TileState::Default,
                selected: false,
            })
            .collect::<Vec<_>>();
        let graph = WeightedGraph::lattice(config.rows as usize, config.cols as usize, ts)?;

        let mut grid = Self {
            config,
            rng,
            scratch: AstarScratch::with_len(tiles.len()),
            tiles,
            graph,
            selected: None,
        };
        grid.tile_mut_at(config.start).state = TileState::Start;
        grid.tile_mut_at(config.end).state = TileState::Base;
        grid.replan()?;
        grid.update_path_tiles();
        log::info!(
            "grid {}x{} ready, path of {} tiles",
            config.rows,
            config.cols,
            grid.path().map_or(0, |p| p.len())
        );
        Ok(grid)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn range(&self) -> Range {
        self.rng
    }

    pub fn start(&self) -> Point {
        self.config.start
    }

    pub fn end(&self) -> Point {
        self.config.end
    }

    /// Tile at `p`, or `None` outside the grid.
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        self.rng.index_of(p).map(|i| &self.tiles[i])
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_blocked(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_blocked)
    }

    fn index(&self, p: Point) -> SearchResult<usize> {
        self.rng.index_of(p).ok_or(SearchError::TileOutOfRange {
            row: p.row(),
            col: p.col(),
        })
    }

    /// Only for points already known to be in range.
    fn tile_mut_at(&mut self, p: Point) -> &mut Tile {
        let i = self.rng.index_of(p).unwrap_or_default();
        &mut self.tiles[i]
    }

    // -----------------------------------------------------------------------
    // Planning
    // -----------------------------------------------------------------------

    fn search(&self, start: usize, goal: usize, scratch: &mut AstarScratch) -> SearchResult<bool> {
        let view = Passable {
            graph: &self.graph,
            tiles: &self.tiles,
        };
        let h = TileDistance { tiles: &self.tiles };
        astar(&view, NodeId(start), NodeId(goal), &h, scratch)
    }

    /// Tiles from `start` to `goal` over unblocked tiles, or `None` when
    /// they are not connected.
    ///
    /// Runs in its own scratch table, so the grid's planned path and its
    /// markers are left as they were.
    pub fn find_path(&self, start: Point, goal: Point) -> SearchResult<Option<Vec<Point>>> {
        let s = self.index(start)?;
        let g = self.index(goal)?;
        let mut scratch = AstarScratch::with_len(self.tiles.len());
        if !self.search(s, g, &mut scratch)? {
            return Ok(None);
        }
        Ok(scratch
            .path_to(NodeId(g))
            .map(|nodes| nodes.into_iter().map(|n| self.rng.point_at(n.0)).collect()))
    }

    /// Plan from the end tile back to the start tile, replacing every parent
    /// link from the previous plan.
    pub fn replan(&mut self) -> SearchResult<bool> {
        let s = self.index(self.config.end)?;
        let g = self.index(self.config.start)?;
        let mut scratch = std::mem::take(&mut self.scratch);
        let found = self.search(s, g, &mut scratch);
        self.scratch = scratch;
        found
    }

    /// Next tile after `p` on the way to the end, from the latest search.
    pub fn parent(&self, p: Point) -> Option<Point> {
        let i = self.rng.index_of(p)?;
        self.scratch
            .parent(NodeId(i))
            .map(|n| self.rng.point_at(n.0))
    }

    /// Parent link of every tile, row-major.
    pub fn parents(&self) -> Vec<Option<Point>> {
        self.rng.iter().map(|p| self.parent(p)).collect()
    }

    /// Tiles from start to end along the current parent chain, or `None`
    /// if the latest search did not connect them.
    pub fn path(&self) -> Option<Vec<Point>> {
        let mut path = vec![self.config.start];
        let mut cur = self.config.start;
        while cur != self.config.end {
            cur = self.parent(cur)?;
            path.push(cur);
            if path.len() > self.tiles.len() {
                return None;
            }
        }
        Some(path)
    }

    /// Reset every tile except start and end to [`TileState::Default`], then
    /// mark the tiles strictly between them on the current path.
    pub fn update_path_tiles(&mut self) {
        let (start, end) = (self.config.start, self.config.end);
        for t in self.tiles.iter_mut() {
            if t.pos != start && t.pos != end {
                t.state = TileState::Default;
            }
        }
        let Some(path) = self.path() else {
            log::warn!("no path from {start} to {end}; nothing to highlight");
            return;
        };
        for &p in &path[1..path.len() - 1] {
            self.tile_mut_at(p).state = TileState::Path;
        }
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Try to block the tile at `p`.
    ///
    /// The tile is blocked tentatively and the path replanned. If the start
    /// can no longer reach the end, the tile is unblocked and the previous
    /// path restored before returning `Ok(false)`. Start and end tiles and
    /// tiles that are already blocked are refused with `Ok(false)` and left
    /// untouched.
    pub fn place_obstacle(&mut self, p: Point) -> SearchResult<bool> {
        let i = self.index(p)?;
        if p == self.config.start || p == self.config.end {
            log::warn!("refusing obstacle on {p}: start and end stay open");
            return Ok(false);
        }
        if self.tiles[i].blocked {
            log::warn!("refusing obstacle on {p}: already blocked");
            return Ok(false);
        }

        self.tiles[i].blocked = true;
        let placed = if self.replan()? {
            log::info!("obstacle placed on {p}");
            true
        } else {
            log::info!("obstacle on {p} would cut the path; rolling back");
            self.tiles[i].blocked = false;
            self.replan()?;
            false
        };
        self.update_path_tiles();
        Ok(placed)
    }

    /// Unblock the tile at `p` and replan. Returns `Ok(false)` if it was not
    /// blocked.
    pub fn remove_obstacle(&mut self, p: Point) -> SearchResult<bool> {
        let i = self.index(p)?;
        if !self.tiles[i].blocked {
            return Ok(false);
        }
        self.tiles[i].blocked = false;
        self.replan()?;
        self.update_path_tiles();
        log::info!("obstacle removed from {p}");
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Currently selected tile.
    pub fn selected(&self) -> Option<Point> {
        self.selected
    }

    /// Select the tile at `p`, deselecting the previous one. Start and end
    /// tiles cannot be selected; selecting them returns `Ok(false)`.
    pub fn select_tile(&mut self, p: Point) -> SearchResult<bool> {
        let i = self.index(p)?;
        if p == self.config.start || p == self.config.end {
            return Ok(false);
        }
        if let Some(prev) = self.selected.take() {
            self.tile_mut_at(prev).selected = false;
        }
        self.tiles[i].selected = true;
        self.selected = Some(p);
        Ok(true)
    }

    /// Tile containing the world position `pos`.
    pub fn tile_at_world(&self, pos: Vec2) -> Option<Point> {
        let ts = self.config.tile_size;
        let y = pos.y - (self.config.start_y - ts / 2.0);
        if y < 0.0 || pos.x < 0.0 {
            return None;
        }
        let p = Point::at((y / ts) as i32, (pos.x / ts) as i32);
        self.rng.contains(p).then_some(p)
    }

    /// Select whatever tile is under the world position `pos`. Returns
    /// whether the selection changed.
    pub fn process_click(&mut self, pos: Vec2) -> bool {
        match self.tile_at_world(pos) {
            Some(p) => self.select_tile(p).unwrap_or(false),
            None => false,
        }
    }

    /// Place an obstacle on the selected tile. Returns `Ok(false)` when
    /// nothing is selected or [`place_obstacle`](Self::place_obstacle)
    /// refuses.
    pub fn build_tower(&mut self) -> SearchResult<bool> {
        match self.selected {
            Some(p) => self.place_obstacle(p),
            None => Ok(false),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = GridConfig {
            rows: 5,
            cols: 9,
            start: Point::at(2, 0),
            end: Point::at(2, 8),
            ..GridConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"rows": 9}"#).unwrap();
        assert_eq!(cfg.rows, 9);
        assert_eq!(cfg.cols, 16);
    }
}
