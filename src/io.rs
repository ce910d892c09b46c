//! Line based integer input and output.

use std::fmt::Display;
use std::io::{self, BufRead, BufWriter, Write};

/// Reads whitespace separated integers from `reader`, in order.
///
/// Tokens that don't parse as an `i64`, including out of range values and invalid UTF-8, are
/// skipped. Only failures of the underlying reader are reported.
pub fn read_integers<R: BufRead>(reader: R) -> io::Result<Vec<i64>> {
    let mut values = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        values.extend(
            line.split_whitespace()
                .filter_map(|token| token.parse::<i64>().ok()),
        );
    }

    Ok(values)
}

/// Writes every element of `values` on its own line and flushes `writer`.
pub fn write_lines<W: Write, T: Display>(writer: W, values: &[T]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    for value in values {
        writeln!(writer, "{value}")?;
    }

    writer.flush()
}
