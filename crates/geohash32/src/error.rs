//! Error types for geohash operations.

use std::result;

use thiserror::Error;

/// Errors produced while encoding, decoding or navigating geohashes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A character outside the geohash alphabet was found.
    #[error("invalid geohash character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Symbol offset of the character within the input.
        position: usize,
    },
    /// The geohash was empty.
    #[error("geohash must not be empty")]
    EmptyInput,
    /// A precision of zero, or one longer than an `f64` cell can resolve.
    #[error("invalid precision {0}: must be within 1..=19")]
    InvalidPrecision(usize),
    /// Latitude outside `[-90, 90]`, or not a number.
    #[error("invalid latitude {0}: must be within [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside `[-180, 180]`, or not a number.
    #[error("invalid longitude {0}: must be within [-180, 180]")]
    InvalidLongitude(f64),
    /// A direction name could not be parsed.
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

/// Convenience result type for this crate.
pub type Result<T> = result::Result<T, Error>;
