use std::io::{self, Write};

use tracing::trace;

/// Writes `msg` as one line of the bake report.
pub fn line<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    trace!(target: "bake::print", raw_msg = msg);
    writeln!(out, "{}", msg)
}
