//! RAII guard that closes the HAR document on normal scope exit.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use super::{HarError, HarWriter};

/// Closes the wrapped writer when dropped, unless the thread is unwinding
/// from a panic or the sink already failed. In both of those cases the sink
/// keeps whatever partial document it has.
///
/// Errors from the implicit close can only be logged; call
/// [`HarGuard::close`] to observe them. Early returns through `?` count as a
/// normal exit; use [`HarWriter::scoped`] when an `Err` must skip the close.
pub struct HarGuard<W: Write> {
    writer: HarWriter<W>,
}

impl<W: Write> HarGuard<W> {
    pub fn new(writer: HarWriter<W>) -> Self {
        Self { writer }
    }

    /// Close now and report the result. The drop that follows is a no-op.
    pub fn close(&mut self) -> Result<(), HarError> {
        self.writer.close()
    }
}

impl<W: Write> Deref for HarGuard<W> {
    type Target = HarWriter<W>;

    fn deref(&self) -> &Self::Target {
        &self.writer
    }
}

impl<W: Write> DerefMut for HarGuard<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.writer
    }
}

impl<W: Write> Drop for HarGuard<W> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            tracing::debug!(
                entries = self.writer.entry_count(),
                "unwinding; leaving HAR document unterminated"
            );
            return;
        }
        if self.writer.has_failed() {
            return;
        }
        if let Err(err) = self.writer.close() {
            tracing::warn!(error = %err, "failed to close HAR document on drop");
        }
    }
}
