use super::*;

/// The 8 neighbor directions, numbered as the engine draws them (0..8).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    West = 0,
    East = 1,
    North = 2,
    South = 3,
    NorthWest = 4,
    NorthEast = 5,
    SouthWest = 6,
    SouthEast = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Direction for a raw draw; only the low 3 bits are used.
    #[inline]
    pub fn from_draw(draw: usize) -> Direction {
        Self::ALL[draw & 0x07]
    }

    /// Linear offset of this direction in a row-major grid of `width` columns.
    #[inline]
    pub fn offset(self, width: u32) -> i64 {
        let w = width as i64;
        match self {
            Direction::West => -1,
            Direction::East => 1,
            Direction::North => -w,
            Direction::South => w,
            Direction::NorthWest => -w - 1,
            Direction::NorthEast => -w + 1,
            Direction::SouthWest => w - 1,
            Direction::SouthEast => w + 1,
        }
    }
}

/// Wrapped linear index of the neighbor of `idx` in `dir`.
///
/// Out-of-range offsets are corrected by exactly one wrap of `size`; this is
/// sufficient because grids are at least 2x2. West/East wrap through the
/// previous/next row rather than the same row.
#[inline]
pub fn neighbor_index(width: u32, size: usize, idx: usize, dir: Direction) -> usize {
    let n = size as i64;
    let mut i = idx as i64 + dir.offset(width);
    if i < 0 {
        i += n;
    } else if i >= n {
        i -= n;
    }
    debug_assert!(
        (0..n).contains(&i),
        "neighbor_index: {} out of range for {} cells",
        i,
        size
    );
    i as usize
}

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Neighbors ===
    #[inline]
    pub fn neighbor(&self, idx: usize, dir: Direction) -> usize {
        neighbor_index(self.width, self.size, idx, dir)
    }
}
