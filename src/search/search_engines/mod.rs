mod astar;
mod search_engine;

pub use astar::{astar, AStar};
pub use search_engine::{SearchEngine, SearchResult};
