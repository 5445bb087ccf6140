//! `harfile write <input>` – stream JSONL entries into a HAR document.

use anyhow::{Context, Result};
use harfile_core::config::HarfileConfig;
use harfile_core::model::{Browser, Entry};
use harfile_core::{HarWriter, HarWriterBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Resolved arguments for one `write` invocation.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub comment: Option<String>,
    /// `(name, version)` override for `log.browser`.
    pub browser: Option<(String, String)>,
}

impl WriteOptions {
    /// Config metadata with command-line overrides applied.
    pub fn builder(&self, cfg: &HarfileConfig) -> HarWriterBuilder {
        let mut builder = cfg.writer_builder();
        if let Some(comment) = &self.comment {
            builder = builder.comment(comment.clone());
        }
        if let Some((name, version)) = &self.browser {
            builder = builder.browser(Browser::new(name.clone(), version.clone()));
        }
        builder
    }
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("open input: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Feeds every non-blank line of `reader` to the writer as one entry and
/// closes the document. A read or parse failure aborts without closing.
pub fn stream_entries<R: BufRead, W: Write>(reader: R, har: &mut HarWriter<W>) -> Result<usize> {
    har.scoped(|har| {
        for (idx, line) in reader.lines().enumerate() {
            let line = line.context("read input")?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: Entry = serde_json::from_str(&line)
                .with_context(|| format!("line {}: invalid entry", idx + 1))?;
            har.add_entry(&entry)?;
        }
        Ok(har.entry_count())
    })
}

pub fn run_write(cfg: &HarfileConfig, opts: &WriteOptions) -> Result<()> {
    let reader = open_input(&opts.input)?;
    let builder = opts.builder(cfg);

    match &opts.output {
        Some(path) => {
            let mut har = builder.create(path)?;
            let count = stream_entries(reader, &mut har)?;
            tracing::info!(entries = count, path = %path.display(), "HAR written");
            println!("Wrote {count} entries to {}", path.display());
        }
        None => {
            let mut har = builder.build(io::stdout().lock());
            let count = stream_entries(reader, &mut har)?;
            tracing::info!(entries = count, "HAR written to stdout");
        }
    }
    Ok(())
}
