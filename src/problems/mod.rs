//! Concrete problems used by the `solver` binary: an explicit weighted graph
//! read from TOML and a grid maze read from a text layout.

mod graph;
mod maze;

pub use graph::{Edge, GraphError, GraphHeuristicName, GraphProblem, TableHeuristic};
pub use maze::{
    tiny_maze_plan, Direction, EuclideanHeuristic, ManhattanHeuristic, MazeError,
    MazeHeuristicName, MazeProblem, Position,
};
