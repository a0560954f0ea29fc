//! Maze grid world.
//!
//! A rectangular grid of cells, some blocked, with a start and a goal. The
//! maze supplies everything the search engine needs: positions as states, a
//! goal predicate, a deterministic 4-directional successor function, and
//! distance heuristics for A*. Rendering and random generation live here,
//! not in the engine.

use std::fmt;

use rand::Rng;

/// One cell of the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    /// A cell on a solution path, stamped by [`Maze::mark_path`].
    Path,
}

impl Cell {
    /// The one-character rendering of this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Blocked => 'X',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Path => '*',
        }
    }

    /// Inverse of [`Cell::glyph`].
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' => Some(Self::Empty),
            'X' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

/// A grid coordinate: the engine state type for maze searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MazePosition {
    pub row: usize,
    pub column: usize,
}

impl MazePosition {
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Typed failure for maze fixture parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// The text contained no rows.
    EmptyGrid,
    /// A row's length differed from the first row's.
    RaggedRow { row: usize },
    /// A character with no cell meaning.
    UnknownGlyph { row: usize, column: usize, found: char },
    /// No `S` cell present.
    MissingStart,
    /// No `G` cell present.
    MissingGoal,
}

impl fmt::Display for MazeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "maze text contains no rows"),
            Self::RaggedRow { row } => {
                write!(f, "row {row} differs in length from the first row")
            }
            Self::UnknownGlyph { row, column, found } => {
                write!(f, "unknown cell glyph {found:?} at row {row}, column {column}")
            }
            Self::MissingStart => write!(f, "no start cell 'S' in maze text"),
            Self::MissingGoal => write!(f, "no goal cell 'G' in maze text"),
        }
    }
}

impl std::error::Error for MazeParseError {}

/// A rectangular maze with one start and one goal cell.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    columns: usize,
    /// Row-major cell storage.
    grid: Vec<Cell>,
    start: MazePosition,
    goal: MazePosition,
}

impl Maze {
    /// Generate a maze by blocking each cell with probability `sparseness`,
    /// then stamping the start and goal cells (which are never blocked).
    ///
    /// The caller supplies the RNG, so seeded runs are reproducible.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty or `start`/`goal` lie out of bounds.
    pub fn random<R: Rng>(
        rows: usize,
        columns: usize,
        sparseness: f64,
        start: MazePosition,
        goal: MazePosition,
        rng: &mut R,
    ) -> Self {
        assert!(rows > 0 && columns > 0, "maze must have at least one cell");
        assert!(
            start.row < rows && start.column < columns,
            "start out of bounds"
        );
        assert!(goal.row < rows && goal.column < columns, "goal out of bounds");

        let mut grid = vec![Cell::Empty; rows * columns];
        for cell in &mut grid {
            if rng.gen::<f64>() < sparseness {
                *cell = Cell::Blocked;
            }
        }

        let mut maze = Self {
            rows,
            columns,
            grid,
            start,
            goal,
        };
        *maze.cell_mut(start) = Cell::Start;
        *maze.cell_mut(goal) = Cell::Goal;
        maze
    }

    /// Parse a maze from its rendered form (the inverse of `Display`).
    ///
    /// Used for fixture grids in tests: every row must have the same length,
    /// and exactly the glyphs ` `, `X`, `S`, `G`, `*` are understood. `*`
    /// cells parse as empty.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeParseError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, MazeParseError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(MazeParseError::EmptyGrid);
        }

        let columns = lines[0].chars().count();
        if columns == 0 {
            return Err(MazeParseError::EmptyGrid);
        }

        let mut grid = Vec::with_capacity(lines.len() * columns);
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(MazeParseError::RaggedRow { row });
            }
            for (column, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(MazeParseError::UnknownGlyph {
                    row,
                    column,
                    found: glyph,
                })?;
                match cell {
                    Cell::Start => start = Some(MazePosition::new(row, column)),
                    Cell::Goal => goal = Some(MazePosition::new(row, column)),
                    // Path stamps are display residue, not structure.
                    Cell::Path => {
                        grid.push(Cell::Empty);
                        continue;
                    }
                    Cell::Empty | Cell::Blocked => {}
                }
                grid.push(cell);
            }
        }

        let start = start.ok_or(MazeParseError::MissingStart)?;
        let goal = goal.ok_or(MazeParseError::MissingGoal)?;

        Ok(Self {
            rows: lines.len(),
            columns,
            grid,
            start,
            goal,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The start position (the search's start state).
    #[must_use]
    pub fn start(&self) -> MazePosition {
        self.start
    }

    /// The goal position.
    #[must_use]
    pub fn goal(&self) -> MazePosition {
        self.goal
    }

    /// The cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[must_use]
    pub fn cell(&self, position: MazePosition) -> Cell {
        self.grid[self.index(position)]
    }

    /// Goal predicate for the search engine.
    #[must_use]
    pub fn goal_test(&self, position: &MazePosition) -> bool {
        *position == self.goal
    }

    /// Successor function for the search engine: the unblocked 4-directional
    /// neighbors of `position`, always enumerated down, up, right, left so
    /// exploration order is deterministic.
    #[must_use]
    pub fn successors(&self, position: &MazePosition) -> Vec<MazePosition> {
        let MazePosition { row, column } = *position;
        let mut positions = Vec::with_capacity(4);

        if row + 1 < self.rows {
            positions.push(MazePosition::new(row + 1, column));
        }
        if row >= 1 {
            positions.push(MazePosition::new(row - 1, column));
        }
        if column + 1 < self.columns {
            positions.push(MazePosition::new(row, column + 1));
        }
        if column >= 1 {
            positions.push(MazePosition::new(row, column - 1));
        }

        positions.retain(|p| self.cell(*p) != Cell::Blocked);
        positions
    }

    /// Stamp `*` on each path cell for display. Start and goal cells keep
    /// their own glyphs.
    pub fn mark_path(&mut self, path: &[MazePosition]) {
        for &position in path {
            if position == self.start || position == self.goal {
                continue;
            }
            *self.cell_mut(position) = Cell::Path;
        }
    }

    fn index(&self, position: MazePosition) -> usize {
        assert!(
            position.row < self.rows && position.column < self.columns,
            "position out of bounds"
        );
        position.row * self.columns + position.column
    }

    fn cell_mut(&mut self, position: MazePosition) -> &mut Cell {
        let index = self.index(position);
        &mut self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "{}", self.cell(MazePosition::new(row, column)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Manhattan distance heuristic to `goal`: admissible and consistent for
/// unit-cost 4-directional moves.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn manhattan_distance(goal: MazePosition) -> impl Fn(&MazePosition) -> f64 {
    move |position| {
        (position.row.abs_diff(goal.row) + position.column.abs_diff(goal.column)) as f64
    }
}

/// Euclidean distance heuristic to `goal`: admissible for 4-directional
/// moves (it never exceeds the Manhattan distance).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn euclidean_distance(goal: MazePosition) -> impl Fn(&MazePosition) -> f64 {
    move |position| {
        let row_delta = position.row.abs_diff(goal.row) as f64;
        let column_delta = position.column.abs_diff(goal.column) as f64;
        row_delta.hypot(column_delta)
    }
}
