//! Pretty JSON emission at a fixed starting depth.
//!
//! `serde_json::ser::PrettyFormatter` always starts at column zero, but entries
//! are streamed into the middle of the document. This formatter produces the
//! same layout (4 spaces per level) offset by a starting depth, so every value
//! in the document goes through one serializer.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// `PrettyFormatter` layout, shifted right by `depth` levels.
pub(crate) struct NestedFormatter {
    depth: usize,
    has_value: bool,
}

impl NestedFormatter {
    pub(crate) fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            has_value: false,
        }
    }
}

fn indent<W: ?Sized + Write>(writer: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        writer.write_all(INDENT)?;
    }
    Ok(())
}

impl Formatter for NestedFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            indent(writer, self.depth)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        indent(writer, self.depth)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            indent(writer, self.depth)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        indent(writer, self.depth)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

pub(crate) fn push_indent(out: &mut Vec<u8>, depth: usize) {
    for _ in 0..depth {
        out.extend_from_slice(INDENT);
    }
}

/// Append `value` to `out`, assuming the cursor already sits at `depth`.
pub(crate) fn write_value<T: ?Sized + Serialize>(
    out: &mut Vec<u8>,
    depth: usize,
    value: &T,
) -> serde_json::Result<()> {
    let mut ser =
        serde_json::Serializer::with_formatter(&mut *out, NestedFormatter::at_depth(depth));
    value.serialize(&mut ser)
}

/// Append one `"key": value` member on its own line at `depth`.
pub(crate) fn write_member<T: ?Sized + Serialize>(
    out: &mut Vec<u8>,
    depth: usize,
    key: &str,
    value: &T,
    first: bool,
) -> serde_json::Result<()> {
    out.extend_from_slice(if first { b"\n" } else { b",\n" });
    push_indent(out, depth);
    write_value(out, depth, key)?;
    out.extend_from_slice(b": ");
    write_value(out, depth, value)
}
