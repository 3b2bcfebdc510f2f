use super::Grid;
use crate::Pos2;

/// A rectangular view over a [`Grid`], wrapping around the torus
///
/// The view may be larger than the grid, in which case the pattern repeats.
pub struct GridWindow<'a> {
    origin: Pos2,
    width: usize,
    height: usize,
    grid: &'a Grid,
}
impl<'a> GridWindow<'a> {
    pub fn new(grid: &'a Grid, origin: Pos2, width: usize, height: usize) -> Self {
        Self {
            origin,
            width,
            height,
            grid,
        }
    }

    #[inline]
    fn is_alive_at(&self, col: usize, row: usize) -> bool {
        let torus = self.grid.torus();
        let (x, y) = torus.wrap(self.origin + Pos2::new(col as i64, row as i64));
        self.grid.array()[torus.index(x, y)].is_alive()
    }

    /// Window-relative `(column, row)` of every alive cell, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.is_alive_at(col, row))
                .map(move |col| (col, row))
        })
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = (0..self.width)
                .map(|col| if self.is_alive_at(col, row) { '█' } else { ' ' })
                .collect();
            // trailing blanks carry no information
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
