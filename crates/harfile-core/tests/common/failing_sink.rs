//! Sink that accepts a fixed number of bytes and then fails every write,
//! simulating a full disk or a closed pipe.

use std::io::{self, Write};

pub struct FailingSink {
    pub written: Vec<u8>,
    budget: usize,
}

impl FailingSink {
    pub fn with_budget(budget: usize) -> Self {
        Self {
            written: Vec::new(),
            budget,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
