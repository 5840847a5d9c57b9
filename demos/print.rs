//! Hilbert curves in your terminal!
//!
//! Lists the first points of a 2D Hilbert curve, then draws the curve at a few
//! orders. Set `RUST_LOG=trace` to see every conversion.

use hilbert_index::{Coordinates, CurveIdx, HilbertCodec};

type Coordinates2D = Coordinates<2>;

// List the first points of a 2D curve with 5 bits per axis
fn list_points(count: CurveIdx) -> hilbert_index::Result<()> {
    let codec = HilbertCodec::<2>::new(5)?;
    println!("--- First {count} points at order 5 ---\n");
    for index in 0..count {
        let [x, y] = codec.index_to_point(index)?;
        println!("{index:>3}: {x} {y}");
    }
    println!();
    Ok(())
}

// Display a Hilbert curve of specified order
fn print_hilbert(order: u32) -> hilbert_index::Result<()> {
    // Print header
    println!("--- At order {order} ---\n");

    // Compute a Hilbert curve's coordinates
    let codec = HilbertCodec::<2>::new(order)?;
    let coord_range = codec.max_coordinate() as usize + 1;
    let num_points = coord_range * coord_range;
    let coordinates = (0..=codec.max_index())
        .map(|idx| codec.index_to_point(idx))
        .collect::<hilbert_index::Result<Vec<_>>>()?;

    // Set up a 2D character-based display
    let mut display = (0..(num_points + coord_range))
        .map(|idx| {
            if idx % (coord_range + 1) == coord_range {
                '\n'
            } else {
                // This character is a placeholder that should not persist in
                // the final program output.
                '@'
            }
        })
        .collect::<Vec<_>>();
    let to_index = |coords: Coordinates2D| {
        (coords[1] as usize) * (coord_range + 1) + (coords[0] as usize)
    };
    let to_dir = |src: Coordinates2D, dst: Coordinates2D| {
        [
            dst[0] as isize - src[0] as isize,
            dst[1] as isize - src[1] as isize,
        ]
    };

    // Draw the start of the curve
    let start = coordinates[0];
    let next = coordinates[1];
    display[to_index(start)] = match to_dir(start, next) {
        [0, -1] => '┴',
        [1, 0] => '├',
        [0, 1] => '┬',
        [-1, 0] => '┤',
        _ => unreachable!("Hilbert curve moves by single-coordinate steps"),
    };

    // Draw the end of the curve
    let end = coordinates[num_points - 1];
    let prev = coordinates[num_points - 2];
    display[to_index(end)] = match to_dir(prev, end) {
        [0, -1] => '^',
        [1, 0] => '>',
        [0, 1] => 'v',
        [-1, 0] => '<',
        _ => unreachable!("Hilbert curve moves by single-coordinate steps"),
    };

    // Draw the middle of the curve
    for window in coordinates.windows(3) {
        let path = match (to_dir(window[0], window[1]), to_dir(window[1], window[2])) {
            ([-1, 0], [0, -1]) | ([0, 1], [1, 0]) => '└',
            ([-1, 0], [0, 1]) | ([0, -1], [1, 0]) => '┌',
            ([1, 0], [1, 0]) | ([-1, 0], [-1, 0]) => '─',
            ([1, 0], [0, -1]) | ([0, 1], [-1, 0]) => '┘',
            ([0, 1], [0, 1]) | ([0, -1], [0, -1]) => '│',
            ([1, 0], [0, 1]) | ([0, -1], [-1, 0]) => '┐',
            _ => unreachable!("Hilbert curve moves by single-coordinate steps and doesn't go back"),
        };
        display[to_index(window[1])] = path;
    }

    // Display the curve
    let display_string = display.into_iter().collect::<String>();
    println!("{display_string}");
    Ok(())
}

fn main() -> hilbert_index::Result<()> {
    env_logger::init();
    println!();
    list_points(20)?;
    for order in 1..=6 {
        print_hilbert(order)?;
    }
    Ok(())
}
