//! `harfile bench <entries.json>` – serialization throughput.

use anyhow::Result;
use harfile_core::bench::{self, BenchResult};
use std::path::Path;

fn print_bench_result(r: &BenchResult) {
    println!(
        "  {:>6}  {:>8}  {:>12}  {:>8}  {:>8}",
        "Iters", "Entries", "Bytes", "Time(s)", "MiB/s"
    );
    println!(
        "  {}  {}  {}  {}  {}",
        "------", "--------", "------------", "--------", "--------"
    );
    println!(
        "  {:>6}  {:>8}  {:>12}  {:>8.3}  {:>8.2}",
        r.iterations, r.entries_written, r.bytes_written, r.elapsed_secs, r.throughput_mib_s
    );
}

pub fn run_bench(path: &Path, iterations: usize) -> Result<()> {
    let entries = bench::load_entries(path)?;
    println!("Loaded {} entries from {}", entries.len(), path.display());
    let result = bench::run_bench(&entries, iterations)?;
    print_bench_result(&result);
    Ok(())
}
