//! Terminal prompts for the values the driver needs before a run

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt once per lane for its starting queue length.
/// Negative values are accepted here; the intersection clamps them.
pub fn read_initial_queues<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    lane_count: usize,
) -> Result<Vec<i64>> {
    (0..lane_count)
        .map(|lane| {
            let prompt = format!("Enter initial number of vehicles for lane {}: ", lane + 1);
            read_integer(reader, writer, &prompt)
                .with_context(|| format!("Invalid initial queue for lane {}", lane + 1))
        })
        .collect()
}

/// Prompt for the number of cycles to simulate, which must be positive
pub fn read_cycle_count<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let value = read_integer(reader, writer, "Enter number of cycles to simulate: ")
        .context("Invalid cycle count")?;
    validate_cycle_count(value)
}

pub fn validate_cycle_count(value: i64) -> Result<u64> {
    if value <= 0 {
        anyhow::bail!("Cycle count must be positive, got {}", value);
    }
    Ok(value as u64)
}

fn read_integer<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<i64> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Unexpected end of input");
    }

    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("'{}' is not a whole number", trimmed))
}
