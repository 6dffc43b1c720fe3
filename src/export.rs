//! Export of sweep results as CSV or JSON.
//!
//! Writers take any `io::Write` so tests can render into a buffer and the
//! binary can stream straight to a file.

use std::io::Write;
use std::path::Path;

use crate::finite_diff::SweepSample;

/// Write the sweep as CSV with a `h,forward_error,central_error` header.
pub fn write_sweep_csv<W: Write>(mut w: W, samples: &[SweepSample]) -> std::io::Result<()> {
    writeln!(w, "h,forward_error,central_error")?;
    for s in samples {
        writeln!(w, "{:e},{:e},{:e}", s.h, s.forward_err, s.central_err)?;
    }
    Ok(())
}

/// Write the sweep as pretty-printed JSON.
pub fn write_sweep_json<W: Write>(w: W, samples: &[SweepSample]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(w, samples)?;
    Ok(())
}

/// Save the sweep to a path, picking the format by extension (`.json` gets
/// JSON, everything else CSV).
pub fn save_sweep<P: AsRef<Path>>(path: P, samples: &[SweepSample]) -> std::io::Result<()> {
    let path = path.as_ref();
    let f = std::fs::File::create(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => write_sweep_json(f, samples),
        _ => write_sweep_csv(f, samples),
    }
}
