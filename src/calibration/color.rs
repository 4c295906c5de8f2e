//! Fixed-channel integer color and coordinate value types.
//!
//! Channel values are carried as `i32` for arithmetic convenience, but the
//! semantic range is 16-bit: [`MIN_COLOR`]..=[`MAX_COLOR`]. Intermediate
//! interpolation results may leave that range and are brought back by
//! [`Color::crop`].

use std::fmt;

pub const MIN_COLOR: i32 = 0;
pub const MAX_COLOR: i32 = u16::MAX as i32;

/// A point in N-channel integer color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color<const N: usize>(pub [i32; N]);

impl<const N: usize> Default for Color<N> {
    fn default() -> Self {
        Color([0; N])
    }
}

pub type Rgb = Color<3>;

impl<const N: usize> Color<N> {
    /// Sum of absolute per-channel differences (L1 color distance).
    pub fn abs_diff(&self, other: &Self) -> u32 {
        let mut diff = 0u32;
        for c in 0..N {
            diff += self.0[c].abs_diff(other.0[c]);
        }
        diff
    }

    /// Component-wise linear interpolation toward `other`:
    /// `self + mul * (other - self) / div`.
    ///
    /// Widens to i64 internally; channel deltas times `mul` can exceed i32.
    pub fn interpolate(&self, other: &Self, mul: i32, div: i32) -> Self {
        let mut out = [0i32; N];
        for c in 0..N {
            let delta = i64::from(other.0[c]) - i64::from(self.0[c]);
            out[c] = self.0[c] + (i64::from(mul) * delta / i64::from(div)) as i32;
        }
        Color(out)
    }

    /// Clamp every channel into the valid color range.
    pub fn crop(&self) -> Self {
        let mut out = [0i32; N];
        for c in 0..N {
            out[c] = self.0[c].clamp(MIN_COLOR, MAX_COLOR);
        }
        Color(out)
    }
}

impl Rgb {
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Color([r, g, b])
    }

    pub const fn r(&self) -> i32 {
        self.0[0]
    }

    pub const fn g(&self) -> i32 {
        self.0[1]
    }

    pub const fn b(&self) -> i32 {
        self.0[2]
    }
}

impl<const N: usize> fmt::Display for Color<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(")?;
        for (c, value) in self.0.iter().enumerate() {
            if c > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:#06x}")?;
        }
        write!(f, ")")
    }
}

/// A D-dimensional integer index, used for pixel positions and LUT lattice
/// indices. Bounds are the consumer's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord<const D: usize>(pub [i32; D]);

impl<const D: usize> Default for Coord<D> {
    fn default() -> Self {
        Coord([0; D])
    }
}

pub type Pos = Coord<2>;

impl Pos {
    pub const fn xy(x: i32, y: i32) -> Self {
        Coord([x, y])
    }

    pub const fn x(&self) -> i32 {
        self.0[0]
    }

    pub const fn y(&self) -> i32 {
        self.0[1]
    }
}

impl<const D: usize> fmt::Display for Coord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (d, value) in self.0.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
