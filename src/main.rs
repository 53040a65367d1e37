use std::io::{self, Write};

use vector_basics::contiguous::Vector;

/// Builds a Vector, pushes two values onto it and reads one back, reporting each step to `out`.
fn tour(out: &mut impl Write) -> io::Result<()> {
    // let vec = Vector::repeat(0, 5);
    // let vec = Vector::from(['a', 'b', 'c', 'd']);
    let mut vec = Vector::<i32>::new();
    writeln!(out, "Size = {}", vec.len())?;

    vec.push(11);
    vec.push(12);
    writeln!(out, "After push Size = {}", vec.len())?;

    // vec.pop();
    // for val in &vec {
    //     writeln!(out, "{val}")?;
    // }
    // writeln!(out, "{:?} {:?}", vec.first(), vec.last())?;

    // Checked access, panics with IndexOutOfBounds for anything >= len.
    writeln!(out, "{}", vec.at(1))?;
    Ok(())
}

fn main() -> io::Result<()> {
    tour(&mut io::stdout().lock())
}
