//! Benchmark mode: stream a fixed entry set through the writer repeatedly.
//!
//! Writes into an in-memory counting sink so the numbers reflect
//! serialization cost rather than disk speed. Reports bytes written, elapsed
//! time and throughput (MiB/s).

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::model::Entry;
use crate::writer::HarWriter;

/// Result of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub iterations: usize,
    pub entries_written: usize,
    pub bytes_written: u64,
    pub elapsed_secs: f64,
    pub throughput_mib_s: f64,
}

/// Sink that discards bytes and counts them.
#[derive(Debug, Default)]
struct CountingSink {
    bytes: u64,
}

impl io::Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Load a JSON array of entries (e.g. a captured `entries.json`).
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read entries file: {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse entries JSON: {}", path.display()))?;
    Ok(entries)
}

/// Writes one complete document per iteration, each containing all `entries`.
pub fn run_bench(entries: &[Entry], iterations: usize) -> Result<BenchResult> {
    if iterations == 0 {
        anyhow::bail!("iterations must be at least 1");
    }

    let start = Instant::now();
    let mut bytes_written = 0;
    for _ in 0..iterations {
        let mut har = HarWriter::new(CountingSink::default());
        for entry in entries {
            har.add_entry(entry)?;
        }
        bytes_written += har.into_inner()?.bytes;
    }
    let elapsed = start.elapsed().as_secs_f64();

    let throughput_mib_s = if elapsed > 0.0 && bytes_written > 0 {
        (bytes_written as f64 / 1_048_576.0) / elapsed
    } else {
        0.0
    };
    tracing::debug!(iterations, bytes_written, elapsed, "bench finished");

    Ok(BenchResult {
        iterations,
        entries_written: entries.len() * iterations,
        bytes_written,
        elapsed_secs: elapsed,
        throughput_mib_s,
    })
}
