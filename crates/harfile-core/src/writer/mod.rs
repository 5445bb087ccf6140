//! Streaming HAR writer.
//!
//! Writes `{"log": {..., "entries": [` lazily on the first entry (or on close),
//! appends one rendered entry per call, and writes the closing `]}}` on close.
//! The sink is append-only: nothing written is ever revisited, so separators
//! are decided before each entry instead of patched afterwards.

mod error;
mod format;
mod guard;

pub use error::HarError;
pub use guard::HarGuard;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::{Browser, Creator, Entry};

/// The only HAR revision this crate writes.
pub const HAR_VERSION: &str = "1.2";

/// Depth of the members of `log`.
const LOG_DEPTH: usize = 2;
/// Depth of each object in `log.entries`.
const ENTRY_DEPTH: usize = 3;

const POSTSCRIPT_EMPTY: &[u8] = b"]\n    }\n}";
const POSTSCRIPT: &[u8] = b"\n        ]\n    }\n}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing written yet; metadata can still change.
    Fresh,
    /// Preamble written; entries may follow.
    Open,
    Closed,
    /// The sink rejected a write. The document is left as is.
    Failed,
}

/// Builder for [`HarWriter`] carrying the top-level metadata.
#[derive(Debug, Clone, Default)]
pub struct HarWriterBuilder {
    creator: Option<Creator>,
    browser: Option<Browser>,
    comment: Option<String>,
}

impl HarWriterBuilder {
    /// Empty creator and browser records, no comment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creator(mut self, creator: Creator) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = Some(browser);
        self
    }

    /// Top-level `log.comment`.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Bind the writer to a caller-provided sink. Writes nothing.
    pub fn build<W: Write>(self, sink: W) -> HarWriter<W> {
        HarWriter {
            sink,
            creator: self.creator.unwrap_or_default(),
            browser: self.browser.unwrap_or_default(),
            comment: self.comment,
            state: State::Fresh,
            entries: 0,
            buf: Vec::new(),
        }
    }

    /// Create (or truncate) `path` and bind a buffered writer to it. The file
    /// is flushed on close and released when the writer is dropped.
    pub fn create(self, path: impl AsRef<Path>) -> Result<HarWriter<BufWriter<File>>, HarError> {
        let path = path.as_ref();
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| HarError::Create {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "opened HAR file for writing");
        Ok(self.build(BufWriter::new(file)))
    }
}

/// Incremental writer of one HAR document.
///
/// Not meant to be shared between threads; every call takes `&mut self`.
pub struct HarWriter<W: Write> {
    sink: W,
    creator: Creator,
    browser: Browser,
    comment: Option<String>,
    state: State,
    entries: usize,
    /// Scratch space holding the fragment currently being written.
    buf: Vec<u8>,
}

impl HarWriter<BufWriter<File>> {
    /// Start configuring metadata. The sink type is fixed later by
    /// [`HarWriterBuilder::build`] or [`HarWriterBuilder::create`].
    pub fn builder() -> HarWriterBuilder {
        HarWriterBuilder::new()
    }

    /// Create `path` with default metadata. See [`HarWriterBuilder::create`].
    pub fn create(path: impl AsRef<Path>) -> Result<Self, HarError> {
        HarWriterBuilder::new().create(path)
    }
}

impl<W: Write> HarWriter<W> {
    /// Writer with empty creator and browser records and no comment.
    pub fn new(sink: W) -> Self {
        HarWriterBuilder::new().build(sink)
    }

    pub fn creator(&self) -> &Creator {
        &self.creator
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replace the creator record. Only allowed before anything is written.
    pub fn set_creator(&mut self, creator: Creator) -> Result<(), HarError> {
        self.ensure_fresh()?;
        self.creator = creator;
        Ok(())
    }

    /// Replace the browser record. Only allowed before anything is written.
    pub fn set_browser(&mut self, browser: Browser) -> Result<(), HarError> {
        self.ensure_fresh()?;
        self.browser = browser;
        Ok(())
    }

    /// Set or clear `log.comment`. Only allowed before anything is written.
    pub fn set_comment(&mut self, comment: Option<String>) -> Result<(), HarError> {
        self.ensure_fresh()?;
        self.comment = comment;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// True once the sink has rejected a write.
    pub fn has_failed(&self) -> bool {
        self.state == State::Failed
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Append one entry, writing the preamble first if needed.
    pub fn add_entry(&mut self, entry: &Entry) -> Result<(), HarError> {
        match self.state {
            State::Closed => return Err(HarError::Closed),
            State::Failed => return Err(HarError::Failed),
            State::Fresh | State::Open => {}
        }
        self.ensure_started()?;

        self.buf.clear();
        self.buf
            .extend_from_slice(if self.entries == 0 { b"\n" } else { b",\n" });
        format::push_indent(&mut self.buf, ENTRY_DEPTH);
        format::write_value(&mut self.buf, ENTRY_DEPTH, entry)?;
        self.emit()?;

        self.entries += 1;
        tracing::trace!(
            index = self.entries,
            bytes = self.buf.len(),
            url = %entry.request.url,
            "HAR entry written"
        );
        Ok(())
    }

    /// Finish the document and flush the sink. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<(), HarError> {
        match self.state {
            State::Closed => return Ok(()),
            State::Failed => return Err(HarError::Failed),
            State::Fresh | State::Open => {}
        }
        self.ensure_started()?;

        self.buf.clear();
        self.buf.extend_from_slice(if self.entries == 0 {
            POSTSCRIPT_EMPTY
        } else {
            POSTSCRIPT
        });
        self.emit()?;
        if let Err(err) = self.sink.flush() {
            self.state = State::Failed;
            return Err(err.into());
        }

        self.state = State::Closed;
        tracing::debug!(entries = self.entries, "HAR document closed");
        Ok(())
    }

    /// Close the document and hand back the sink.
    pub fn into_inner(mut self) -> Result<W, HarError> {
        self.close()?;
        Ok(self.sink)
    }

    /// Run `f` against the writer and close only if it succeeds.
    ///
    /// An `Err` (or a panic) from `f` leaves the document unterminated, so a
    /// failed export never looks complete.
    pub fn scoped<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<HarError>,
    {
        let value = f(self)?;
        self.close()?;
        Ok(value)
    }

    /// Wrap the writer in a guard that closes it when dropped normally.
    pub fn guard(self) -> HarGuard<W> {
        HarGuard::new(self)
    }

    fn ensure_fresh(&self) -> Result<(), HarError> {
        match self.state {
            State::Fresh => Ok(()),
            State::Failed => Err(HarError::Failed),
            State::Open | State::Closed => Err(HarError::MetadataFrozen),
        }
    }

    fn ensure_started(&mut self) -> Result<(), HarError> {
        if self.state != State::Fresh {
            return Ok(());
        }
        self.buf.clear();
        self.render_preamble()?;
        self.emit()?;
        self.state = State::Open;
        tracing::debug!(
            creator = %self.creator.name,
            browser = %self.browser.name,
            "HAR preamble written"
        );
        Ok(())
    }

    fn render_preamble(&mut self) -> Result<(), HarError> {
        let out = &mut self.buf;
        out.extend_from_slice(b"{\n");
        format::push_indent(out, 1);
        out.extend_from_slice(b"\"log\": {");
        format::write_member(out, LOG_DEPTH, "version", HAR_VERSION, true)?;
        format::write_member(out, LOG_DEPTH, "creator", &self.creator, false)?;
        format::write_member(out, LOG_DEPTH, "browser", &self.browser, false)?;
        if let Some(comment) = &self.comment {
            format::write_member(out, LOG_DEPTH, "comment", comment, false)?;
        }
        out.extend_from_slice(b",\n");
        format::push_indent(out, LOG_DEPTH);
        out.extend_from_slice(b"\"entries\": [");
        Ok(())
    }

    /// Write the scratch buffer to the sink, failing the writer on error.
    fn emit(&mut self) -> Result<(), HarError> {
        if let Err(err) = self.sink.write_all(&self.buf) {
            self.state = State::Failed;
            return Err(err.into());
        }
        Ok(())
    }
}
