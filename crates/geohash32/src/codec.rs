//! Encoding coordinates to geohashes and decoding them back.

use crate::{
    base32::{self, BITS_PER_SYMBOL},
    coord::{BoundingBox, Coordinate},
    error::{Error, Result},
    interleave,
};

/// Longest precision tried when inferring a precision, and the fallback used
/// when no shorter geohash reproduces the input exactly.
pub const MAX_PRECISION: usize = 12;

/// Longest precision accepted by [`encode`] and [`cell_size`]. Up to 19
/// symbols (48 longitude bits, 47 latitude bits) every cell edge is exactly
/// representable as an `f64`; past that, cells stop halving cleanly.
pub const MAX_ENCODE_PRECISION: usize = 19;

/// Encode `point` as a geohash.
///
/// With an explicit `precision` the result has exactly that many symbols;
/// precisions outside `1..=MAX_ENCODE_PRECISION` are rejected.
/// Without one, the shortest geohash (up to [`MAX_PRECISION`]) whose
/// [`decode`] yields `point` exactly is returned, falling back to
/// [`MAX_PRECISION`] symbols.
pub fn encode(point: Coordinate, precision: Option<usize>) -> Result<String> {
    point.validate()?;
    match precision {
        Some(precision) => Ok(encode_unchecked(&point, check_precision(precision)?)),
        None => infer(&point),
    }
}

/// Reject precisions outside `1..=MAX_ENCODE_PRECISION`.
fn check_precision(precision: usize) -> Result<usize> {
    if (1..=MAX_ENCODE_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(Error::InvalidPrecision(precision))
    }
}

/// Encode a validated point at a positive precision.
fn encode_unchecked(point: &Coordinate, precision: usize) -> String {
    interleave::interleave(point, precision)
        .into_iter()
        .map(base32::encode_symbol)
        .collect()
}

/// Find the shortest geohash that decodes back to `point`.
fn infer(point: &Coordinate) -> Result<String> {
    for precision in 1..=MAX_PRECISION {
        let hash = encode_unchecked(point, precision);
        if decode(&hash)? == *point {
            return Ok(hash);
        }
    }
    log::trace!("No exact geohash for {point}, using precision {MAX_PRECISION}");
    Ok(encode_unchecked(point, MAX_PRECISION))
}

/// The cell covered by `hash`.
pub fn bounds(hash: &str) -> Result<BoundingBox> {
    let symbols = base32::decode_all(hash)?;
    Ok(interleave::deinterleave(&symbols))
}

/// Center of the cell covered by `hash`, rounded to the cell's resolution.
///
/// Each axis keeps `floor(2 - log10(span))` decimal places, which is just
/// enough to tell neighbouring cells apart at this precision.
pub fn decode(hash: &str) -> Result<Coordinate> {
    let cell = bounds(hash)?;
    let center = cell.center();
    Ok(Coordinate {
        lat: round_to_span(center.lat, cell.lat_span()),
        lon: round_to_span(center.lon, cell.lon_span()),
    })
}

/// Unrounded center of the cell covered by `hash`, together with the
/// latitude and longitude error margins (half the cell's span on each axis).
pub fn decode_exactly(hash: &str) -> Result<(Coordinate, f64, f64)> {
    let cell = bounds(hash)?;
    Ok((cell.center(), cell.lat_span() / 2.0, cell.lon_span() / 2.0))
}

/// Latitude and longitude span in degrees of one cell at `precision`.
pub fn cell_size(precision: usize) -> Result<(f64, f64)> {
    let bits = check_precision(precision)? as u32 * BITS_PER_SYMBOL;
    let lon_bits = bits.div_ceil(2);
    let lat_bits = bits / 2;
    Ok((halve(180.0, lat_bits), halve(360.0, lon_bits)))
}

/// Halve `span` `times` times.
fn halve(span: f64, times: u32) -> f64 {
    span / 2f64.powi(times as i32)
}

/// Round `value` to the number of decimals implied by a cell `span`.
fn round_to_span(value: f64, span: f64) -> f64 {
    let digits = (2.0 - span.log10()).floor() as i32;
    let factor = 10f64.powi(digits);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_precision() -> Result<()> {
        assert_eq!(encode(Coordinate::new(57.648, 10.410), Some(6))?, "u4pruy");
        assert_eq!(
            encode(Coordinate::new(-25.38262, -49.26561), Some(8))?,
            "6gkzwgjz"
        );
        assert_eq!(encode(Coordinate::new(0.0, 0.0), Some(9))?, "7zzzzzzzz");
        assert_eq!(encode(Coordinate::new(0.0, 0.0), Some(1))?, "7");
        Ok(())
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            encode(Coordinate::new(0.0, 0.0), Some(0)),
            Err(Error::InvalidPrecision(0))
        );
        assert_eq!(
            encode(Coordinate::new(1.0, 1.0), Some(MAX_ENCODE_PRECISION + 1)),
            Err(Error::InvalidPrecision(MAX_ENCODE_PRECISION + 1))
        );
        assert_eq!(
            encode(Coordinate::new(1.0, 1.0), Some(usize::MAX)),
            Err(Error::InvalidPrecision(usize::MAX))
        );
        assert_eq!(
            encode(Coordinate::new(91.0, 0.0), Some(5)),
            Err(Error::InvalidLatitude(91.0))
        );
        assert_eq!(
            encode(Coordinate::new(0.0, 181.0), None),
            Err(Error::InvalidLongitude(181.0))
        );
    }

    #[test]
    fn inferred_precision() -> Result<()> {
        // The rounded center of "u4pruy" is exactly this point.
        assert_eq!(encode(Coordinate::new(57.648, 10.41), None)?, "u4pruy");
        let hash = encode(Coordinate::new(12.345678901, -98.765432109), None)?;
        assert_eq!(hash.len(), MAX_PRECISION);
        Ok(())
    }

    #[test]
    fn inferred_matches_decode() -> Result<()> {
        for hash in ["u", "u4", "u4p", "ezs42", "6gkzwgjz", "dr5regw3pp"] {
            let point = decode(hash)?;
            let inferred = encode(point, None)?;
            assert_eq!(decode(&inferred)?, point);
            assert!(inferred.len() <= hash.len(), "{hash} -> {inferred}");
        }
        Ok(())
    }

    #[test]
    fn decode_rounds_to_resolution() -> Result<()> {
        assert_eq!(decode("u4pruy")?, Coordinate::new(57.648, 10.41));
        assert_eq!(decode("ezs42")?, Coordinate::new(42.605, -5.603));
        Ok(())
    }

    #[test]
    fn decode_exactly_margins() -> Result<()> {
        let (center, lat_err, lon_err) = decode_exactly("ezs42")?;
        let cell = bounds("ezs42")?;
        assert_eq!(center, cell.center());
        assert_eq!(lat_err, 0.02197265625);
        assert_eq!(lon_err, 0.02197265625);
        Ok(())
    }

    #[test]
    fn bounds_of_known_cell() -> Result<()> {
        let cell = bounds("u4pruy")?;
        assert!(cell.contains(&Coordinate::new(57.648, 10.410)));
        assert!(cell.contains(&decode("u4pruy")?));
        assert_eq!(bounds("U4PRUY")?, cell);
        Ok(())
    }

    #[test]
    fn empty_and_invalid() {
        assert_eq!(bounds(""), Err(Error::EmptyInput));
        assert_eq!(decode(""), Err(Error::EmptyInput));
        assert_eq!(
            decode("u4pruya"),
            Err(Error::InvalidCharacter {
                character: 'a',
                position: 6
            })
        );
    }

    #[test]
    fn sizes() -> Result<()> {
        assert_eq!(cell_size(1)?, (45.0, 45.0));
        assert_eq!(cell_size(2)?, (5.625, 11.25));
        assert_eq!(cell_size(5)?, (0.0439453125, 0.0439453125));
        for precision in 1..=MAX_PRECISION {
            let hash = encode(Coordinate::new(1.0, 1.0), Some(precision))?;
            let cell = bounds(&hash)?;
            assert_eq!(cell_size(precision)?, (cell.lat_span(), cell.lon_span()));
        }
        assert_eq!(cell_size(0), Err(Error::InvalidPrecision(0)));
        assert_eq!(
            cell_size(usize::MAX),
            Err(Error::InvalidPrecision(usize::MAX))
        );
        Ok(())
    }

    #[test]
    fn longest_precision() -> Result<()> {
        let point = Coordinate::new(-25.38262, -49.26561);
        let hash = encode(point, Some(MAX_ENCODE_PRECISION))?;
        assert_eq!(hash.len(), MAX_ENCODE_PRECISION);
        assert!(hash.starts_with("6gkzwgjz"));
        let cell = bounds(&hash)?;
        assert!(cell.contains(&point));
        assert_eq!(
            cell_size(MAX_ENCODE_PRECISION)?,
            (cell.lat_span(), cell.lon_span())
        );
        Ok(())
    }
}
