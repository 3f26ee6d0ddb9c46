//! Bit interleaving by binary subdivision of the lat/lon ranges.
//!
//! Bits alternate between axes starting with longitude, so longitude occupies
//! the even bit positions and latitude the odd ones. A `1` keeps the upper half
//! of the current range, a `0` keeps the lower half. This is a Z-order (Morton)
//! walk over the globe with the coordinate itself standing in for the integer
//! axis values.

use smallvec::SmallVec;

use crate::{
    base32::BITS_PER_SYMBOL,
    coord::{BoundingBox, Coordinate},
};

/// Symbol buffer sized for the common precisions without heap allocation.
pub type Symbols = SmallVec<[u8; 12]>;

/// Running state of a subdivision walk.
#[derive(Debug, Clone, Copy)]
pub struct Interleaver {
    /// Range remaining after the bits consumed so far.
    bounds: BoundingBox,
    /// Whether the next bit subdivides longitude.
    lon_next: bool,
}

impl Default for Interleaver {
    fn default() -> Self {
        Self::new()
    }
}

impl Interleaver {
    /// Start from the whole globe with longitude first.
    pub const fn new() -> Self {
        Self {
            bounds: BoundingBox::WORLD,
            lon_next: true,
        }
    }

    /// The cell described by the bits consumed so far.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Narrow the range by one bit.
    pub fn refine(&mut self, bit: bool) {
        let (min, max) = if self.lon_next {
            (&mut self.bounds.sw.lon, &mut self.bounds.ne.lon)
        } else {
            (&mut self.bounds.sw.lat, &mut self.bounds.ne.lat)
        };
        let mid = (*min + *max) / 2.0;
        if bit {
            *min = mid;
        } else {
            *max = mid;
        }
        self.lon_next = !self.lon_next;
    }

    /// Emit the next bit for `point` and narrow the range to the half holding it.
    ///
    /// A value exactly on the midpoint falls into the lower half.
    pub fn split(&mut self, point: &Coordinate) -> bool {
        let (value, min, max) = if self.lon_next {
            (point.lon, self.bounds.sw.lon, self.bounds.ne.lon)
        } else {
            (point.lat, self.bounds.sw.lat, self.bounds.ne.lat)
        };
        let bit = value > (min + max) / 2.0;
        self.refine(bit);
        bit
    }

    /// Emit the next five bits for `point`, most significant first.
    pub fn split_symbol(&mut self, point: &Coordinate) -> u8 {
        (0..BITS_PER_SYMBOL).fold(0u8, |acc, _| (acc << 1) | u8::from(self.split(point)))
    }

    /// Narrow the range by the five bits of `symbol`, most significant first.
    pub fn refine_symbol(&mut self, symbol: u8) {
        for shift in (0..BITS_PER_SYMBOL).rev() {
            self.refine((symbol >> shift) & 1 == 1);
        }
    }
}

/// Interleave `point` into `count` 5-bit symbols.
pub fn interleave(point: &Coordinate, count: usize) -> Symbols {
    let mut walk = Interleaver::new();
    (0..count).map(|_| walk.split_symbol(point)).collect()
}

/// The cell covered by a sequence of 5-bit symbols.
pub fn deinterleave(symbols: &[u8]) -> BoundingBox {
    let mut walk = Interleaver::new();
    for &symbol in symbols {
        walk.refine_symbol(symbol);
    }
    walk.bounds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bits() {
        let mut walk = Interleaver::new();
        let p = Coordinate::new(45.0, 90.0);
        // lon 90 > 0, lat 45 > 0, lon 90 > 90 is false
        assert!(walk.split(&p));
        assert!(walk.split(&p));
        assert!(!walk.split(&p));
        let b = walk.bounds();
        assert_eq!((b.sw.lon, b.ne.lon), (0.0, 90.0));
        assert_eq!((b.sw.lat, b.ne.lat), (0.0, 90.0));
    }

    #[test]
    fn origin_symbols() {
        let symbols = interleave(&Coordinate::new(0.0, 0.0), 3);
        assert_eq!(symbols.as_slice(), &[0b00111, 0b11111, 0b11111]);
    }

    #[test]
    fn inverse_mirrors_forward() {
        let p = Coordinate::new(-25.38262, -49.26561);
        for count in 1..=12 {
            let symbols = interleave(&p, count);
            let cell = deinterleave(&symbols);
            assert!(cell.contains(&p), "{count}: {cell:?} misses {p}");
        }
    }

    #[test]
    fn empty_is_world() {
        assert_eq!(deinterleave(&[]), BoundingBox::WORLD);
    }

    #[test]
    fn cell_shape() {
        // One symbol is three longitude bits and two latitude bits.
        let cell = deinterleave(&[0]);
        assert_eq!(cell.lon_span(), 45.0);
        assert_eq!(cell.lat_span(), 45.0);
        assert_eq!(cell.sw, Coordinate::new(-90.0, -180.0));
    }
}
