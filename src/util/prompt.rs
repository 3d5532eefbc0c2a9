// Interactive prompting
// Reads unsigned integers from a line-oriented reader

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

/// Print `label`, then read one line from `input` and parse it as u32
pub fn read_u32<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<u32> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!(io::Error::new(io::ErrorKind::UnexpectedEof, "no input provided"));
    }

    let trimmed = line.trim();
    trimmed
        .parse::<u32>()
        .with_context(|| format!("'{}' is not an unsigned 32-bit integer", trimmed))
}
