//! JSON rendering of a [`RunReport`].
//!
//! The report serializes through serde, so this module is a thin shim that
//! pretty-prints it and appends a trailing newline. Field names and status
//! spellings are part of the output contract and are pinned by the serde
//! attributes on the report types.

use std::io::{self, Write};

use crate::report::RunReport;

/// Renders the report as pretty-printed JSON followed by a newline.
pub fn render<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    writeln!(out)?;
    Ok(())
}
