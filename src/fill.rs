//! Ways of populating a [`Grid`] through its public `set`/`clear` contract.

use crate::{Grid, GridError};
use thiserror::Error;

/// Errors reported by [`FillMode::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FillError {
    /// A random fill was asked for a live probability outside `0..=1`.
    #[error("fill density {0} is not a probability")]
    InvalidDensity(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Each cell is alive with probability `density`
    Random { density: f64 },
    Alternating,
    All,
    Empty,
}

impl FillMode {
    pub const DEFAULT_DENSITY: f64 = 0.5;

    /// Parses a fill mode name, using `density` for the random mode
    pub fn new<S: AsRef<str>>(s: S, density: f64) -> Option<Self> {
        match s.as_ref() {
            "random" if (0.0..=1.0).contains(&density) => Some(Self::Random { density }),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, x: usize, y: usize, rng: &mut R) -> bool {
        match *self {
            Self::Random { density } => rng.random_bool(density),
            Self::Alternating => (x + y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    /// Rewrites every cell of `grid`, returning the resulting population
    ///
    /// The grid is untouched when the mode itself is invalid.
    pub fn apply<R: rand::Rng>(&self, grid: &mut Grid, rng: &mut R) -> Result<usize, FillError> {
        match *self {
            Self::Random { density } if !(0.0..=1.0).contains(&density) => {
                return Err(FillError::InvalidDensity(density));
            }
            Self::Empty => {
                grid.clear_all();
                return Ok(0);
            }
            _ => {}
        }

        let torus = grid.torus();
        let mut alive = 0;
        for i in 0..grid.len() {
            let (x, y) = torus.coords(i);
            if self.fill_cell(x, y, rng) {
                grid.set_index(i)?;
                alive += 1;
            } else {
                grid.clear_index(i)?;
            }
        }
        log::debug!("filled {} of {} cells with {:?}", alive, grid.len(), self);
        Ok(alive)
    }
}
