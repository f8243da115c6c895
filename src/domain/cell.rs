/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

/// Highest age a cell can reach; survivors past this stay pinned here.
pub const MAX_AGE: u8 = u8::MAX;

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Next (state, age) pair for a cell of the given age.
    /// Only survivors carry their age forward; births and deaths start at 0.
    pub const fn evolve_aged(self, age: u8, neighbors: u8) -> (Self, u8) {
        match (self, self.evolve(neighbors)) {
            (Cell::Alive, Cell::Alive) => (Cell::Alive, age.saturating_add(1)),
            (_, next) => (next, 0),
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_survivor_ages() {
        assert_eq!(Cell::Alive.evolve_aged(0, 2), (Cell::Alive, 1));
        assert_eq!(Cell::Alive.evolve_aged(41, 3), (Cell::Alive, 42));
    }

    #[test]
    fn test_age_caps_at_max() {
        assert_eq!(Cell::Alive.evolve_aged(MAX_AGE, 2), (Cell::Alive, MAX_AGE));
    }

    #[test]
    fn test_birth_and_death_reset_age() {
        assert_eq!(Cell::Dead.evolve_aged(0, 3), (Cell::Alive, 0));
        assert_eq!(Cell::Alive.evolve_aged(17, 1), (Cell::Dead, 0));
        assert_eq!(Cell::Alive.evolve_aged(17, 4), (Cell::Dead, 0));
        assert_eq!(Cell::Dead.evolve_aged(0, 2), (Cell::Dead, 0));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
