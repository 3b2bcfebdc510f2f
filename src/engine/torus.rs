use crate::Pos2;

/// Wraps `n` into `0..limit`, the way a torus folds coordinates
///
/// ```rust
/// use yagol::engine::wrap;
///
/// assert_eq!(wrap(-1, 10), 9);
/// assert_eq!(wrap(10, 10), 0);
/// assert_eq!(wrap(-21, 10), 9);
/// ```
#[inline]
pub fn wrap(n: i64, limit: usize) -> usize {
    debug_assert!(limit > 0, "wrap into an empty range");
    n.rem_euclid(limit as i64) as usize
}

/// The shape of a toroidal grid and its coordinate arithmetic
///
/// Linear indices are row-major: `i = y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    /// Relative offsets of the 8 Moore neighbors
    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    #[inline]
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    /// Folds an arbitrary signed position onto the grid
    #[inline]
    pub fn wrap(&self, pos: Pos2) -> (usize, usize) {
        (wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// Linear indices of the 8 toroidal Moore neighbors of `i`
    pub fn neighbors(&self, i: usize) -> [usize; 8] {
        let (x, y) = self.coords(i);
        Self::OFFSETS.map(|(dx, dy)| {
            let nx = wrap(x as i64 + dx, self.width);
            let ny = wrap(y as i64 + dy, self.height);
            self.index(nx, ny)
        })
    }
}
