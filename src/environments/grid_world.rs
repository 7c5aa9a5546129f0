//! Grid world navigation task

use std::fmt;

use crate::{
    Error, Result,
    ports::{Environment, Transition},
};

/// Cell of the grid; `(0, 0)` is the start corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four moves, indexed as actions 0..4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

impl GridMove {
    pub const ALL: [GridMove; 4] = [GridMove::Up, GridMove::Down, GridMove::Left, GridMove::Right];

    pub fn from_action(action: usize) -> Option<Self> {
        Self::ALL.get(action).copied()
    }
}

/// `width × height` grid; the agent starts at `(0, 0)` and is rewarded 1.0
/// for reaching the opposite corner, which ends the episode. Moving into a
/// wall leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: usize,
    height: usize,
    position: GridPosition,
}

impl GridWorld {
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the grid has fewer than two cells
    /// or its cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width.checked_mul(height).is_none_or(|cells| cells < 2) {
            return Err(Error::InvalidParameter {
                name: "grid size",
                reason: format!("grid needs at least two cells, got {width}x{height}"),
            });
        }
        Ok(Self {
            width,
            height,
            position: GridPosition { x: 0, y: 0 },
        })
    }

    pub fn goal(&self) -> GridPosition {
        GridPosition {
            x: self.width - 1,
            y: self.height - 1,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Fewest moves from the start to the goal
    pub fn shortest_path_len(&self) -> usize {
        (self.width - 1) + (self.height - 1)
    }
}

impl Environment for GridWorld {
    type Observation = GridPosition;

    fn num_actions(&self) -> usize {
        GridMove::ALL.len()
    }

    fn reset(&mut self) -> GridPosition {
        self.position = GridPosition { x: 0, y: 0 };
        self.position
    }

    fn step(&mut self, action: usize) -> Result<Transition<GridPosition>> {
        let grid_move = GridMove::from_action(action).ok_or(Error::InvalidAction {
            action,
            num_actions: GridMove::ALL.len(),
        })?;

        let GridPosition { x, y } = self.position;
        self.position = match grid_move {
            GridMove::Up => GridPosition {
                x,
                y: (y + 1).min(self.height - 1),
            },
            GridMove::Down => GridPosition {
                x,
                y: y.saturating_sub(1),
            },
            GridMove::Left => GridPosition {
                x: x.saturating_sub(1),
                y,
            },
            GridMove::Right => GridPosition {
                x: (x + 1).min(self.width - 1),
                y,
            },
        };

        let done = self.position == self.goal();
        Ok(Transition {
            observation: self.position,
            reward: if done { 1.0 } else { 0.0 },
            done,
        })
    }

    fn name(&self) -> &str {
        "grid-world"
    }
}
