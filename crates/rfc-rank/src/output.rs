//! Printing results in the list command's format

use std::io::{self, Write};

use rfc_rank_core::RankedResult;

/// `Total line count: N` then one line per entry
pub fn write_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> io::Result<()> {
    writeln!(out, "Total line count: {}", lines.len())?;
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}

/// Same as [`write_lines`] with each line prefixed by its score
pub fn write_scored(out: &mut impl Write, results: &[RankedResult]) -> io::Result<()> {
    writeln!(out, "Total line count: {}", results.len())?;
    for r in results {
        writeln!(out, "{:>8.3}  {}", r.score, r.candidate)?;
    }
    Ok(())
}
