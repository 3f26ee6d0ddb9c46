//! Geohash encoding, decoding and neighbour search.
//!
//! A geohash names a cell of a grid built by repeatedly halving the
//! longitude and latitude ranges, alternating between the two axes. The
//! resulting bits are a Z-order (Morton) interleaving, written five at a time
//! with the base-32 alphabet `0123456789bcdefghjkmnpqrstuvwxyz`. Longer
//! geohashes name smaller cells, and every geohash is a prefix of the
//! geohashes of the cells it contains.
//!
//! ```
//! use geohash32::{Coordinate, Direction};
//!
//! let hash = geohash32::encode(Coordinate::new(57.648, 10.410), Some(6))?;
//! assert_eq!(hash, "u4pruy");
//! assert_eq!(geohash32::decode(&hash)?, Coordinate::new(57.648, 10.41));
//! assert_eq!(geohash32::adjacent(&hash, Direction::N)?, "u4pruz");
//! # Ok::<(), geohash32::error::Error>(())
//! ```

/// The base-32 symbol alphabet.
pub mod base32;
/// Encoding and decoding between coordinates and geohashes.
mod codec;
/// Coordinates and bounding boxes.
pub mod coord;
/// Compass directions.
pub mod direction;
/// Error types used across the crate.
pub mod error;
/// Internal bit interleaving shared by the encoder and decoder.
#[doc(hidden)]
pub mod interleave;
/// Adjacent cell lookup.
mod neighbour;

pub use crate::{
    codec::{MAX_ENCODE_PRECISION, MAX_PRECISION, bounds, cell_size, decode, decode_exactly, encode},
    coord::{BoundingBox, Coordinate},
    direction::Direction,
    error::{Error, Result},
    neighbour::{Neighbours, adjacent, neighbours},
};
