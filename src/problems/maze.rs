//! Grid mazes read from a text layout where `%` is a wall, `P` the start,
//! `.` a goal cell and a space an open cell. Every move costs 1.

use crate::search::{
    Cost, Heuristic, HeuristicValue, Plan, SearchProblem, StepCost, Successor, ZeroHeuristic,
};
use ordered_float::{Float, OrderedFloat};
use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown character {character:?} at row {row}, column {col}")]
    UnknownCharacter { character: char, row: usize, col: usize },
    #[error("maze has no start cell")]
    NoStart,
    #[error("maze has more than one start cell, second one at row {row}, column {col}")]
    MultipleStarts { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in the given direction, `None` when that
    /// would leave the grid on the top or left edge.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (row, col) = match direction {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        Some(Position::new(row, col))
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let d_row = self.row.abs_diff(other.row) as f64;
        let d_col = self.col.abs_diff(other.col) as f64;
        d_row.hypot(d_col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Moves in the maze. Successors are generated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone)]
pub struct MazeProblem {
    /// `walls[row][col]`, rows may have different lengths. Anything outside
    /// the grid counts as a wall.
    walls: Vec<Vec<bool>>,
    start: Position,
    goals: Vec<Position>,
}

impl MazeProblem {
    pub fn from_path(path: &Path) -> Result<Self, MazeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    /// Parse a layout. Lines are kept exactly as written, so rows of spaces and
    /// trailing spaces are open cells. Only blank lines at the end of the text
    /// are dropped. A maze without goal cells is valid, it just has no
    /// solution.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let mut walls = vec![];
        let mut start = None;
        let mut goals = vec![];

        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        for (row, line) in lines.into_iter().enumerate() {
            let mut row_walls = vec![];
            for (col, character) in line.chars().enumerate() {
                match character {
                    '%' => row_walls.push(true),
                    ' ' => row_walls.push(false),
                    '.' => {
                        goals.push(Position::new(row, col));
                        row_walls.push(false);
                    }
                    'P' => {
                        if start.is_some() {
                            return Err(MazeError::MultipleStarts { row, col });
                        }
                        start = Some(Position::new(row, col));
                        row_walls.push(false);
                    }
                    character => {
                        return Err(MazeError::UnknownCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                }
            }
            walls.push(row_walls);
        }

        let start = start.ok_or(MazeError::NoStart)?;
        debug!(
            %start,
            num_goals = goals.len(),
            num_rows = walls.len(),
            "loaded maze"
        );
        Ok(Self {
            walls,
            start,
            goals,
        })
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.walls
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .is_some_and(|&wall| !wall)
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }
}

impl SearchProblem for MazeProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::iter()
            .filter_map(|direction| {
                state
                    .step(direction)
                    .filter(|&next| self.is_open(next))
                    .map(|next| Successor::new(next, direction, StepCost::unit()))
            })
            .collect()
    }

    /// Infinite if any move runs into a wall.
    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start;
        for &direction in actions {
            match position.step(direction).filter(|&next| self.is_open(next)) {
                Some(next) => position = next,
                None => return Cost::infinity(),
            }
        }
        OrderedFloat(actions.len() as f64)
    }
}

/// Grid distance ignoring walls to the nearest goal cell. Admissible.
#[derive(Debug, Clone, Default)]
pub struct ManhattanHeuristic {}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<MazeProblem> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &MazeProblem) -> HeuristicValue {
        problem
            .goals()
            .iter()
            .map(|goal| state.manhattan_distance(goal))
            .min()
            .map_or(OrderedFloat(0.), |distance| OrderedFloat(distance as f64))
    }
}

/// Straight-line distance to the nearest goal cell. Admissible, but weaker
/// than [`ManhattanHeuristic`] on a grid.
#[derive(Debug, Clone, Default)]
pub struct EuclideanHeuristic {}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        Self {}
    }
}

impl Heuristic<MazeProblem> for EuclideanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &MazeProblem) -> HeuristicValue {
        problem
            .goals()
            .iter()
            .map(|goal| OrderedFloat(state.euclidean_distance(goal)))
            .min()
            .unwrap_or(OrderedFloat(0.))
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum MazeHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Manhattan distance to the nearest goal.")]
    Manhattan,
    #[clap(help = "Euclidean distance to the nearest goal.")]
    Euclidean,
}

impl MazeHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<MazeProblem>> {
        match self {
            MazeHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            MazeHeuristicName::Manhattan => Box::new(ManhattanHeuristic::new()),
            MazeHeuristicName::Euclidean => Box::new(EuclideanHeuristic::new()),
        }
    }
}

/// A hard-coded plan that solves `benchmarks/mazes/tiny_maze.lay` and no
/// other maze.
pub fn tiny_maze_plan() -> Plan<Direction> {
    use Direction::{South as S, West as W};
    Plan::new(vec![S, S, W, S, W, W, S, W])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{
            astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
            validate, SearchResult,
        },
        test_utils::*,
    };
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn parses_tiny_maze() {
        let problem = MazeProblem::from_text(TINY_MAZE_TEXT).unwrap();
        assert_eq!(problem.start_state(), Position::new(1, 5));
        assert_eq!(problem.goals(), &[Position::new(5, 1)]);
        assert!(!problem.is_open(Position::new(0, 0)));
        assert!(problem.is_open(Position::new(1, 1)));
        assert!(!problem.is_open(Position::new(100, 1)));
    }

    #[test]
    fn row_of_spaces_is_kept() {
        let problem = MazeProblem::from_text("P\n \n.").unwrap();
        assert_eq!(problem.goals(), &[Position::new(2, 0)]);
        assert!(problem.is_open(Position::new(1, 0)));
        let plan = breadth_first_search(&problem).into_plan().unwrap();
        assert_eq!(plan.steps(), &[Direction::South, Direction::South]);
    }

    #[test]
    fn trailing_spaces_are_open_cells() {
        let problem = MazeProblem::from_text("P  \n%%.").unwrap();
        assert!(problem.is_open(Position::new(0, 2)));
        let plan = breadth_first_search(&problem).into_plan().unwrap();
        assert_eq!(
            plan.steps(),
            &[Direction::East, Direction::East, Direction::South]
        );
    }

    #[test]
    fn trailing_blank_lines_are_dropped() {
        let problem = MazeProblem::from_text("%%%\r\n%P.\r\n%%%\r\n\n   \n").unwrap();
        assert!(!problem.is_open(Position::new(3, 0)));
        assert_eq!(problem.goals(), &[Position::new(1, 2)]);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!(matches!(
            MazeProblem::from_text("%%%\n% %\n%%%"),
            Err(MazeError::NoStart)
        ));
        assert!(matches!(
            MazeProblem::from_text("%%%%\n%PP%\n%%%%"),
            Err(MazeError::MultipleStarts { row: 1, col: 2 })
        ));
        assert!(matches!(
            MazeProblem::from_text("%%%\n%Px\n%%%"),
            Err(MazeError::UnknownCharacter {
                character: 'x',
                row: 1,
                col: 2
            })
        ));
    }

    #[test]
    fn successors_skip_walls() {
        let problem = MazeProblem::from_text(TINY_MAZE_TEXT).unwrap();
        let successors = problem.successors(&problem.start_state());
        let directions: Vec<Direction> = successors.iter().map(|s| s.action).collect();
        assert_eq!(directions, vec![Direction::South, Direction::West]);
        assert!(successors.iter().all(|s| s.step_cost == StepCost::unit()));
    }

    #[test]
    fn fixed_plan_solves_tiny_maze() {
        let problem = MazeProblem::from_text(TINY_MAZE_TEXT).unwrap();
        let plan = tiny_maze_plan();
        assert!(validate(&plan, &problem).is_ok());
        assert_eq!(plan.cost(&problem), Cost::from(8.));
    }

    #[test]
    fn cost_of_walking_into_wall_is_infinite() {
        let problem = MazeProblem::from_text(TINY_MAZE_TEXT).unwrap();
        assert!(problem
            .cost_of_actions(&[Direction::North])
            .is_infinite());
    }

    #[test]
    fn heuristics_measure_to_nearest_goal() {
        let problem = MazeProblem::from_text(TINY_MAZE_TEXT).unwrap();
        let start = problem.start_state();
        assert_eq!(
            ManhattanHeuristic::new().evaluate(&start, &problem),
            HeuristicValue::from(8.)
        );
        assert_approx_eq!(
            EuclideanHeuristic::new()
                .evaluate(&start, &problem)
                .into_inner(),
            32f64.sqrt()
        );
        assert_eq!(
            MazeHeuristicName::Zero.create().evaluate(&start, &problem),
            HeuristicValue::from(0.)
        );
    }

    #[test]
    fn walled_off_goal_has_no_solution() {
        let problem = MazeProblem::from_text(WALLED_MAZE_TEXT).unwrap();
        assert_eq!(depth_first_search(&problem), SearchResult::NoSolution);
        assert_eq!(breadth_first_search(&problem), SearchResult::NoSolution);
        assert_eq!(uniform_cost_search(&problem), SearchResult::NoSolution);
        assert_eq!(
            astar_search(&problem, &mut ManhattanHeuristic::new()),
            SearchResult::NoSolution
        );
    }

    #[test]
    fn every_engine_reaches_a_goal_on_cyclic_maze() {
        let problem = MazeProblem::from_text(CYCLIC_MAZE_TEXT).unwrap();
        let results = [
            depth_first_search(&problem),
            breadth_first_search(&problem),
            uniform_cost_search(&problem),
            astar_search(&problem, &mut ManhattanHeuristic::new()),
        ];
        for result in results {
            let plan = result.into_plan().unwrap();
            let goal = validate(&plan, &problem).unwrap();
            assert!(problem.is_goal_state(&goal));
        }
    }
}
