mod rule;
mod torus;
mod window;

use self::rule::Transition;
pub use self::torus::{Torus, wrap};
pub use self::window::GridWindow;
use crate::cell::{Cell, Delta};
use crate::{GridError, Pos2};

/// The smallest supported side length
///
/// On anything narrower the wraparound makes a cell its own neighbor, or the
/// same neighbor twice, and the counts stop meaning anything.
pub const MIN_SIDE: usize = 3;

/// A Game of Life board on a torus with incrementally maintained neighbor counts
///
/// Every cell carries the number of its alive neighbors, so setting or
/// clearing a cell touches exactly nine bytes and advancing a generation is a
/// single pass with no recounting.
#[derive(Debug, Clone)]
pub struct Grid {
    torus: Torus,
    current: Box<[Cell]>,
    next: Box<[Cell]>,
    generation: u64,
}

impl Grid {
    /// Creates an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let torus = Self::validate(width, height)?;
        Ok(Self {
            torus,
            current: Self::alloc(torus),
            next: Self::alloc(torus),
            generation: 0,
        })
    }

    fn validate(width: usize, height: usize) -> Result<Torus, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(invalid);
        }
        // both buffers live at once
        match width.checked_mul(height).and_then(|n| n.checked_mul(2)) {
            Some(n) if n <= isize::MAX as usize => Ok(Torus::new(width, height)),
            _ => Err(invalid),
        }
    }

    fn alloc(torus: Torus) -> Box<[Cell]> {
        vec![Cell::DEAD; torus.len()].into_boxed_slice()
    }

    /// Discards all state and reallocates at the new dimensions
    ///
    /// On error the grid is left exactly as it was.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        let torus = Self::validate(width, height)?;
        log::debug!(
            "resizing grid {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.torus = torus;
        self.current = Self::alloc(torus);
        self.next = Self::alloc(torus);
        self.generation = 0;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.torus.width()
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.torus.height()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
    #[inline]
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// Read-only view of the current generation
    #[inline]
    pub fn array(&self) -> &[Cell] {
        &self.current
    }

    /// Number of generations advanced since creation or the last resize
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Counts the alive cells of the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }

    fn checked_index(&self, index: usize) -> Result<usize, GridError> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(GridError::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    fn checked_coords(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.torus.contains(x, y) {
            Ok(self.torus.index(x, y))
        } else {
            Err(GridError::OutOfRange {
                index: y.saturating_mul(self.width()).saturating_add(x),
                len: self.len(),
            })
        }
    }

    pub fn cell(&self, index: usize) -> Result<Cell, GridError> {
        self.checked_index(index).map(|i| self.current[i])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.checked_coords(x, y).map(|i| self.current[i].is_alive())
    }

    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.checked_coords(x, y)
            .map(|i| self.current[i].neighbor_count())
    }

    pub fn set(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.checked_coords(x, y)?;
        set_cell(&mut self.current, self.torus, i);
        Ok(())
    }

    pub fn set_index(&mut self, index: usize) -> Result<(), GridError> {
        let i = self.checked_index(index)?;
        set_cell(&mut self.current, self.torus, i);
        Ok(())
    }

    /// Sets the cell at a signed position, wrapping it onto the torus
    pub fn set_wrapped(&mut self, pos: Pos2) {
        let (x, y) = self.torus.wrap(pos);
        set_cell(&mut self.current, self.torus, self.torus.index(x, y));
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.checked_coords(x, y)?;
        clear_cell(&mut self.current, self.torus, i);
        Ok(())
    }

    pub fn clear_index(&mut self, index: usize) -> Result<(), GridError> {
        let i = self.checked_index(index)?;
        clear_cell(&mut self.current, self.torus, i);
        Ok(())
    }

    /// Clears the cell at a signed position, wrapping it onto the torus
    pub fn clear_wrapped(&mut self, pos: Pos2) {
        let (x, y) = self.torus.wrap(pos);
        clear_cell(&mut self.current, self.torus, self.torus.index(x, y));
    }

    /// Flips a cell, returning whether it is now alive
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let i = self.checked_coords(x, y)?;
        if self.current[i].is_alive() {
            clear_cell(&mut self.current, self.torus, i);
            Ok(false)
        } else {
            set_cell(&mut self.current, self.torus, i);
            Ok(true)
        }
    }

    /// Kills every cell of the current generation
    ///
    /// The scratch buffer is left alone; it is reseeded on the next [`iterate`](Self::iterate).
    pub fn clear_all(&mut self) {
        self.current.fill(Cell::DEAD);
    }

    /// Advances one generation
    ///
    /// Every decision is read from the untouched current buffer while births
    /// and deaths are applied to a copy of it, so the copy's counts stay
    /// consistent as it changes and no cell sees a partially updated
    /// neighborhood.
    pub fn iterate(&mut self) {
        let Self {
            torus,
            current,
            next,
            ..
        } = self;

        next.copy_from_slice(current);
        for (i, &cell) in current.iter().enumerate() {
            match rule::transition(cell) {
                Transition::Birth => set_cell(next, *torus, i),
                Transition::Death => clear_cell(next, *torus, i),
                Transition::Unchanged => {}
            }
        }
        std::mem::swap(current, next);
        self.generation += 1;
    }

    /// Advances `generations` generations
    pub fn step(&mut self, generations: u64) {
        for _ in 0..generations {
            self.iterate();
        }
    }

    /// A `width`x`height` view whose top-left corner is `origin`, wrapping around the torus
    pub fn window(&self, origin: Pos2, width: usize, height: usize) -> GridWindow<'_> {
        GridWindow::new(self, origin, width, height)
    }
}

fn set_cell(cells: &mut [Cell], torus: Torus, i: usize) {
    if !cells[i].is_alive() {
        change(cells, torus, i, Delta::Increment);
    }
}

fn clear_cell(cells: &mut [Cell], torus: Torus, i: usize) {
    if cells[i].is_alive() {
        change(cells, torus, i, Delta::Decrement);
    }
}

/// Flips cell `i` and moves the count of each of its neighbors the same way
fn change(cells: &mut [Cell], torus: Torus, i: usize, delta: Delta) {
    cells[i] = cells[i].with_alive(delta == Delta::Increment);
    for n in torus.neighbors(i) {
        cells[n] = cells[n].with_delta(delta);
    }
}
