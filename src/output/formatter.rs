//! Stdout formatter for tree output
//!
//! `TreeFormatter` writes each node as the walker produces it - no tree is
//! buffered. Directories render bold with a trailing slash, size
//! annotations in muted white.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::size::format_size;
use crate::tree::TreeOutput;

use super::config::OutputConfig;

/// Output formatter writing directly to stdout.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct TreeFormatter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_name(&mut self, name: &str, is_dir: bool) -> io::Result<()> {
        if is_dir {
            self.stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.stdout, "{}/", name)?;
            self.stdout.reset()?;
        } else {
            write!(self.stdout, "{}", name)?;
        }
        Ok(())
    }

    fn write_size(&mut self, size: Option<u64>) -> io::Result<()> {
        if let Some(bytes) = size {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            write!(self.stdout, " ({})", format_size(bytes))?;
            self.stdout.reset()?;
        }
        Ok(())
    }
}

impl TreeOutput for TreeFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
        size: Option<u64>,
    ) -> io::Result<()> {
        if is_root {
            // Blank line, then the root rendered in directory form
            writeln!(self.stdout)?;
            write!(self.stdout, " ")?;
            self.write_name(name, true)?;
            self.write_size(size)?;
            return writeln!(self.stdout);
        }

        write!(
            self.stdout,
            " {}{}",
            prefix,
            self.config.theme.branch(is_last)
        )?;
        self.write_name(name, is_dir)?;
        self.write_size(size)?;
        writeln!(self.stdout)
    }
}
