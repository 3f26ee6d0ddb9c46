//! Encode a point, then list the cell's bounds and its eight neighbours.

use std::error::Error;

use geohash32::Coordinate;

fn main() -> Result<(), Box<dyn Error>> {
    let point = Coordinate::new(57.648, 10.410);
    let hash = geohash32::encode(point, Some(6))?;
    println!("{point} -> {hash}");

    let cell = geohash32::bounds(&hash)?;
    println!("bounds: sw {} ne {}", cell.sw, cell.ne);
    println!("center: {}", geohash32::decode(&hash)?);

    for (direction, neighbour) in geohash32::neighbours(&hash)?.iter() {
        println!("{direction:>2}: {neighbour}");
    }

    Ok(())
}
