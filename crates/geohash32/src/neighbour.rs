//! Adjacent cell lookup.
//!
//! Moving one cell in a primary direction rewrites the last symbol through a
//! permutation table. When that symbol sits on the border of its parent cell
//! the parent moves first. Tables depend on the parity of the geohash length,
//! because odd-length cells are wider than tall and even-length cells are
//! square, which swaps the roles of the latitude and longitude tables.
//!
//! Longitude wraps at the antimeridian. At the poles the tables wrap to the
//! opposite edge of the same latitude row.

use crate::{
    base32,
    direction::Direction,
    error::{Error, Result},
};

/// Permutation strings for `[N, E, S, W][parity]`. The symbol found at index
/// `i` steps to `ALPHABET[i]`.
const NEIGHBOUR: [[&[u8; 32]; 2]; 4] = [
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

/// Symbols on the edge of their parent cell, for `[N, E, S, W][parity]`.
const BORDER: [[&[u8]; 2]; 4] = [
    [b"prxz", b"bcfguvyz"],
    [b"bcfguvyz", b"prxz"],
    [b"028b", b"0145hjnp"],
    [b"0145hjnp", b"028b"],
];

/// `STEP[row][parity][symbol]` is the symbol one cell over, as a 5-bit value.
const STEP: [[[u8; 32]; 2]; 4] = build_step();

/// `EDGE[row][parity]` has bit `symbol` set when the step leaves the parent
/// cell.
const EDGE: [[u32; 2]; 4] = build_edge();

/// Index of an alphabet byte. Fails const evaluation for anything else.
const fn symbol_value(c: u8) -> u8 {
    let mut i = 0;
    while i < base32::ALPHABET.len() {
        if base32::ALPHABET[i] == c {
            return i as u8;
        }
        i += 1;
    }
    panic!("table byte outside the geohash alphabet");
}

/// Invert [`NEIGHBOUR`] into symbol-value lookups.
const fn build_step() -> [[[u8; 32]; 2]; 4] {
    let mut step = [[[0u8; 32]; 2]; 4];
    let mut row = 0;
    while row < 4 {
        let mut parity = 0;
        while parity < 2 {
            let table = NEIGHBOUR[row][parity];
            let mut i = 0;
            while i < 32 {
                step[row][parity][symbol_value(table[i]) as usize] = i as u8;
                i += 1;
            }
            parity += 1;
        }
        row += 1;
    }
    step
}

/// Turn [`BORDER`] into symbol bitmasks.
const fn build_edge() -> [[u32; 2]; 4] {
    let mut edge = [[0u32; 2]; 4];
    let mut row = 0;
    while row < 4 {
        let mut parity = 0;
        while parity < 2 {
            let border = BORDER[row][parity];
            let mut i = 0;
            while i < border.len() {
                edge[row][parity] |= 1 << symbol_value(border[i]);
                i += 1;
            }
            parity += 1;
        }
        row += 1;
    }
    edge
}

/// A single-cell move along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// North.
    N,
    /// East.
    E,
    /// South.
    S,
    /// West.
    W,
}

impl Step {
    /// Row into [`STEP`] and [`EDGE`].
    const fn row(self) -> usize {
        match self {
            Self::N => 0,
            Self::E => 1,
            Self::S => 2,
            Self::W => 3,
        }
    }

    /// The one or two axis moves making up `direction`, latitude first.
    const fn path(direction: Direction) -> (Self, Option<Self>) {
        match direction {
            Direction::N => (Self::N, None),
            Direction::NE => (Self::N, Some(Self::E)),
            Direction::E => (Self::E, None),
            Direction::SE => (Self::S, Some(Self::E)),
            Direction::S => (Self::S, None),
            Direction::SW => (Self::S, Some(Self::W)),
            Direction::W => (Self::W, None),
            Direction::NW => (Self::N, Some(Self::W)),
        }
    }
}

/// The cell adjacent to `hash` in `direction`.
///
/// Diagonals step north or south first, then east or west. Upper-case input is
/// accepted; the result is always lower case.
pub fn adjacent(hash: &str, direction: Direction) -> Result<String> {
    let mut symbols = base32::decode_all(hash)?;
    let (first, second) = Step::path(direction);
    shift(&mut symbols, first);
    if let Some(second) = second {
        shift(&mut symbols, second);
    }
    Ok(symbols.into_iter().map(base32::encode_symbol).collect())
}

/// Move the cell `symbols` (5-bit values) one step, in place.
///
/// The last symbol always changes; each symbol that crosses its parent's
/// border carries the move one level up.
fn shift(symbols: &mut [u8], step: Step) {
    let row = step.row();
    for pos in (0..symbols.len()).rev() {
        let parity = (pos + 1) % 2;
        let symbol = symbols[pos];
        symbols[pos] = STEP[row][parity][symbol as usize];
        if EDGE[row][parity] & (1 << symbol) == 0 {
            break;
        }
    }
}

/// The eight cells surrounding a geohash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighbours {
    /// North.
    pub n: String,
    /// Northeast.
    pub ne: String,
    /// East.
    pub e: String,
    /// Southeast.
    pub se: String,
    /// South.
    pub s: String,
    /// Southwest.
    pub sw: String,
    /// West.
    pub w: String,
    /// Northwest.
    pub nw: String,
}

impl Neighbours {
    /// The neighbour in `direction`.
    pub fn get(&self, direction: Direction) -> &str {
        match direction {
            Direction::N => &self.n,
            Direction::NE => &self.ne,
            Direction::E => &self.e,
            Direction::SE => &self.se,
            Direction::S => &self.s,
            Direction::SW => &self.sw,
            Direction::W => &self.w,
            Direction::NW => &self.nw,
        }
    }

    /// Iterate `(direction, geohash)` pairs clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// All eight neighbours of `hash`.
///
/// Each diagonal is the east or west step taken from the north or south
/// neighbour.
pub fn neighbours(hash: &str) -> Result<Neighbours> {
    if hash.is_empty() {
        return Err(Error::EmptyInput);
    }
    let n = adjacent(hash, Direction::N)?;
    let s = adjacent(hash, Direction::S)?;
    Ok(Neighbours {
        ne: adjacent(&n, Direction::E)?,
        nw: adjacent(&n, Direction::W)?,
        se: adjacent(&s, Direction::E)?,
        sw: adjacent(&s, Direction::W)?,
        e: adjacent(hash, Direction::E)?,
        w: adjacent(hash, Direction::W)?,
        n,
        s,
    })
}
