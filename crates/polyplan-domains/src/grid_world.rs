use polyplan_core::Mdp;

use crate::DomainError;

/// Probability mass diverted sideways on every non-`Stay` move.
pub const SLIP_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One grid cell, parsed from the `O`/`W`/`G`/`S` map symbols.
pub enum Cell {
    Open,
    Wall,
    Goal,
    Start,
}

impl Cell {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'O' => Some(Cell::Open),
            'W' => Some(Cell::Wall),
            'G' => Some(Cell::Goal),
            'S' => Some(Cell::Start),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Movement actions, in the fixed enumeration order used for tie-breaking.
pub enum GridAction {
    Stay,
    North,
    East,
    South,
    West,
}

impl GridAction {
    /// All actions in enumeration order.
    pub const ALL: [GridAction; 5] = [
        GridAction::Stay,
        GridAction::North,
        GridAction::East,
        GridAction::South,
        GridAction::West,
    ];

    /// Row/column offset of the intended move.
    pub(crate) fn movement(self) -> (isize, isize) {
        match self {
            GridAction::Stay => (0, 0),
            GridAction::North => (-1, 0),
            GridAction::East => (0, 1),
            GridAction::South => (1, 0),
            GridAction::West => (0, -1),
        }
    }

    /// Perpendicular directions the agent can slip towards.
    pub(crate) fn slip_directions(self) -> &'static [GridAction] {
        match self {
            GridAction::Stay => &[],
            GridAction::North | GridAction::South => &[GridAction::East, GridAction::West],
            GridAction::East | GridAction::West => &[GridAction::North, GridAction::South],
        }
    }

    /// Arrow symbol used when rendering policies.
    pub fn symbol(self) -> char {
        match self {
            GridAction::Stay => '\u{2205}',
            GridAction::North => '\u{2191}',
            GridAction::East => '\u{2192}',
            GridAction::South => '\u{2193}',
            GridAction::West => '\u{2190}',
        }
    }
}

#[derive(Debug, Clone)]
/// Rectangular grid-world domain with slippery movement.
///
/// States are row-major cell indices covering every cell, walls included;
/// wall states are absorbing. Movement succeeds with probability
/// `1 - SLIP_PROBABILITY` when sideways slips are possible, the slip mass
/// being split uniformly across the open perpendicular neighbors. Moves into
/// a wall or off the grid bounce the agent back in place. Staying on the
/// goal cell pays reward 1; everything else pays 0.
pub struct GridWorld {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl GridWorld {
    /// Parse a grid from one string per row.
    ///
    /// Rows must be non-empty, rectangular, and use only the known cell
    /// symbols.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut cells: Vec<Vec<Cell>> = Vec::new();

        for (row_index, row) in rows.into_iter().enumerate() {
            let mut parsed = Vec::new();
            for (column, symbol) in row.as_ref().chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(DomainError::UnknownCellSymbol {
                    row: row_index,
                    column,
                    symbol,
                })?;
                parsed.push(cell);
            }

            if let Some(first) = cells.first()
                && first.len() != parsed.len()
            {
                return Err(DomainError::RaggedGrid {
                    row: row_index,
                    expected: first.len(),
                    found: parsed.len(),
                });
            }

            cells.push(parsed);
        }

        let height = cells.len();
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(DomainError::EmptyGrid);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Row-major state index of `(row, column)`.
    pub fn state_index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// Inverse of [`GridWorld::state_index`].
    pub fn row_column(&self, state: usize) -> (usize, usize) {
        (state / self.width, state % self.width)
    }

    fn open_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Wall)
            .count()
    }

    /// Open, in-bounds cells the agent can slip into from `(row, column)`.
    fn adjacent_open_cells(&self, row: usize, column: usize, action: GridAction) -> Vec<(usize, usize)> {
        let mut adjacent = Vec::new();

        for slip in action.slip_directions() {
            let (row_offset, column_offset) = slip.movement();
            let slip_row = row as isize + row_offset;
            let slip_column = column as isize + column_offset;

            if slip_row < 0
                || slip_row >= self.height as isize
                || slip_column < 0
                || slip_column >= self.width as isize
            {
                continue;
            }

            let (slip_row, slip_column) = (slip_row as usize, slip_column as usize);
            if self.cell(slip_row, slip_column) != Cell::Wall {
                adjacent.push((slip_row, slip_column));
            }
        }

        adjacent
    }

    /// Whether the intended move runs into the grid edge or a wall.
    fn is_at_boundary(&self, row: usize, column: usize, action: GridAction) -> bool {
        match action {
            GridAction::Stay => false,
            GridAction::North => row == 0 || self.cell(row - 1, column) == Cell::Wall,
            GridAction::East => {
                column == self.width - 1 || self.cell(row, column + 1) == Cell::Wall
            }
            GridAction::South => {
                row == self.height - 1 || self.cell(row + 1, column) == Cell::Wall
            }
            GridAction::West => column == 0 || self.cell(row, column - 1) == Cell::Wall,
        }
    }

    /// Whether `(s_row, s_column)` is exactly one intended step from `(row, column)`.
    fn is_valid_move(
        action: GridAction,
        row: usize,
        s_row: usize,
        column: usize,
        s_column: usize,
    ) -> bool {
        match action {
            GridAction::Stay => row == s_row && column == s_column,
            GridAction::North => row == s_row + 1 && column == s_column,
            GridAction::East => row == s_row && column + 1 == s_column,
            GridAction::South => row + 1 == s_row && column == s_column,
            GridAction::West => row == s_row && column == s_column + 1,
        }
    }
}

impl Mdp for GridWorld {
    type State = usize;
    type Action = GridAction;

    fn states(&self) -> Vec<usize> {
        (0..self.width * self.height).collect()
    }

    fn actions(&self) -> Vec<GridAction> {
        GridAction::ALL.to_vec()
    }

    fn transition_probability(&self, state: &usize, action: &GridAction, successor: &usize) -> f64 {
        let (row, column) = self.row_column(*state);
        let (s_row, s_column) = self.row_column(*successor);

        // Wall states absorb regardless of the action.
        if self.cell(row, column) == Cell::Wall {
            if row == s_row && column == s_column {
                return 1.0;
            }
            return 0.0;
        }

        let adjacent = self.adjacent_open_cells(row, column, *action);
        if adjacent.contains(&(s_row, s_column)) {
            return SLIP_PROBABILITY / adjacent.len() as f64;
        }

        let adjustment = if adjacent.is_empty() {
            0.0
        } else {
            SLIP_PROBABILITY
        };

        if row == s_row && column == s_column && self.is_at_boundary(row, column, *action) {
            return 1.0 - adjustment;
        }

        if self.cell(s_row, s_column) == Cell::Wall {
            return 0.0;
        }

        if Self::is_valid_move(*action, row, s_row, column, s_column) {
            return 1.0 - adjustment;
        }

        0.0
    }

    fn reward(&self, state: &usize, action: &GridAction) -> f64 {
        let (row, column) = self.row_column(*state);

        if self.cell(row, column) == Cell::Goal && *action == GridAction::Stay {
            return 1.0;
        }

        0.0
    }

    fn start_probability(&self, state: &usize) -> f64 {
        let (row, column) = self.row_column(*state);

        if self.cell(row, column) == Cell::Wall {
            return 0.0;
        }

        1.0 / self.open_cell_count() as f64
    }
}
