//! Text output formatter.
//!
//! One line per finding, prefixed with the input path:
//! ```text
//! <path>:<start>-<end>: <keyword>
//! <path>: "<gap>"
//! <path>: <keyword>: <count>
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{Findings, InputReport};
use crate::color::scheme;
use crate::segment::Match;
use crate::trie::WordCount;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one input's findings (streaming).
    pub fn write_report(&mut self, report: &InputReport) -> std::io::Result<()> {
        match &report.findings {
            Findings::Matches(matches) => {
                for m in matches {
                    self.write_match(&report.path, m)?;
                }
            }
            Findings::Gaps(gaps) => {
                for gap in gaps {
                    self.write_path(&report.path)?;
                    self.out.set_color(&scheme::gap())?;
                    write!(self.out, " {:?}", gap)?;
                    self.out.reset()?;
                    writeln!(self.out)?;
                }
            }
            Findings::Counts(counts) => {
                for count in counts {
                    self.write_count(&report.path, count)?;
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_match(&mut self, path: &str, m: &Match) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()?;

        write!(self.out, ":")?;
        self.out.set_color(&scheme::span())?;
        write!(self.out, "{}-{}", m.start, m.end)?;
        self.out.reset()?;

        write!(self.out, ": ")?;
        self.out.set_color(&scheme::keyword())?;
        write!(self.out, "{}", m.keyword)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_count(&mut self, path: &str, count: &WordCount) -> std::io::Result<()> {
        self.write_path(path)?;
        write!(self.out, " ")?;
        self.out.set_color(&scheme::keyword())?;
        write!(self.out, "{}", count.keyword)?;
        self.out.reset()?;

        write!(self.out, ": ")?;
        self.out.set_color(&scheme::count())?;
        write!(self.out, "{}", count.occurrences)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_path(&mut self, path: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()?;
        write!(self.out, ":")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
