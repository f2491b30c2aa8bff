use std::fmt::Display;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Line terminator used for every line of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    CrLf,
    /// The host platform's convention.
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Append-only line writer over any `Write` sink.
///
/// Owns the line terminator so that individual blocks never hardcode one.
pub struct CfgWriter<W: Write> {
    inner: W,
    newline: &'static str,
}

impl<W: Write> CfgWriter<W> {
    pub fn new(inner: W, line_ending: LineEnding) -> CfgWriter<W> {
        CfgWriter {
            inner,
            newline: line_ending.as_str(),
        }
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        self.inner.write_all(self.newline.as_bytes())
    }

    /// Writes `text` followed by the line terminator.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.blank()
    }

    /// Writes a `key=value` line.
    pub fn field(&mut self, key: &str, value: impl Display) -> io::Result<()> {
        write!(self.inner, "{key}={value}")?;
        self.blank()
    }

    /// Writes the leading blank line and the bracketed tag or `#` heading
    /// that open every block.
    pub fn open(&mut self, heading: &str) -> io::Result<()> {
        self.blank()?;
        self.line(heading)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Anything that renders itself as one block of the configuration file.
pub trait Block {
    /// Appends this block's text to `out`.
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_terminates_every_line() {
        let mut out = CfgWriter::new(Vec::new(), LineEnding::CrLf);
        out.open("[maxpool]").unwrap();
        out.field("size", 2).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "\r\n[maxpool]\r\nsize=2\r\n");
    }

    #[test]
    fn native_matches_platform() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::Native.as_str(), expected);
    }
}
