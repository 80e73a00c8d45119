//! Pathfinding over arena graphs and tile grids.
//!
//! - **BFS** fewest-hop paths ([`bfs`]) into a caller-owned [`ParentMap`]
//! - **Greedy best-first** heuristic-only search ([`gbfs`]), not cost-optimal
//! - **A\*** minimum-cost search ([`astar`])
//! - **Tile grid** with obstacle placement, rollback and path highlighting
//!   ([`TileGrid`]), walked by [`PathFollower`] agents
//!
//! Searches keep their per-node bookkeeping in a [`Scratch`] side table that
//! the caller owns and reuses; each call starts by invalidating it.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | greedy best-first, A* |
//! | [`Heuristic`] | greedy best-first, A* |
//!
//! All searches are synchronous and run to completion.

mod astar;
mod bfs;
mod frontier;
mod gbfs;
mod graph;
mod grid;
mod nav;
mod scratch;
mod traits;

pub use astar::astar;
pub use bfs::{ParentMap, bfs};
pub use gbfs::gbfs;
pub use graph::{EdgeId, Graph, NodeId, WeightedEdge, WeightedGraph};
pub use grid::{GridConfig, Tile, TileGrid, TileState};
pub use nav::{FollowerConfig, PathFollower};
pub use scratch::{AstarScratch, GbfsScratch, Membership, Record, Scratch};
pub use traits::{Heuristic, Pather, Step, WeightedPather, ZeroHeuristic};
