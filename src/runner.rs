use crate::cli::Invocation;
use crate::compressor::{compress_file, resolve_output_path};
use crate::messages::{COPYRIGHT, USAGE, USAGE_HEADER};
use anyhow::Context;
use colored::*;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Where the runner writes its text. `color` styles stderr lines.
pub struct Console<O: Write, E: Write> {
    pub out: O,
    pub err: E,
    pub color: bool,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Console { out, err, color }
    }

    fn usage(&mut self) -> io::Result<()> {
        let header = if self.color {
            USAGE_HEADER.bold().red().to_string()
        } else {
            USAGE_HEADER.to_string()
        };
        writeln!(self.err, "{}", header)?;
        for line in USAGE {
            writeln!(self.err, "{}", line)?;
        }
        Ok(())
    }

    fn copyright(&mut self) -> io::Result<()> {
        for line in COPYRIGHT {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn error(&mut self, err: &anyhow::Error) -> io::Result<()> {
        let message = format!("{:#}", err);
        if self.color {
            writeln!(self.err, "{}", message.red())
        } else {
            writeln!(self.err, "{}", message)
        }
    }
}

/// Runs the program against the real stdio and working directory.
pub fn run<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let color = io::stderr().is_terminal();
    colored::control::set_override(color);
    let mut console = Console::new(io::stdout().lock(), io::stderr().lock(), color);

    let invocation = Invocation::from_args(args);
    // the working directory only matters when it has to hold the output
    let cwd = match &invocation {
        Invocation::Compress { output: None, .. } => {
            match std::env::current_dir().context("Failed to read current directory") {
                Ok(cwd) => cwd,
                Err(e) => {
                    let _ = console.error(&e);
                    return EXIT_FAILURE;
                }
            }
        }
        _ => PathBuf::new(),
    };
    execute(invocation, &cwd, &mut console)
}

/// Same as [`run`] with an explicit working directory and console.
pub fn run_with<I, T, O, E>(args: I, cwd: &Path, console: &mut Console<O, E>) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    execute(Invocation::from_args(args), cwd, console)
}

// Console write failures are dropped: every path that prints already exits with 1.
fn execute<O, E>(invocation: Invocation, cwd: &Path, console: &mut Console<O, E>) -> u8
where
    O: Write,
    E: Write,
{
    match invocation {
        Invocation::Usage | Invocation::Help => {
            let _ = console.usage();
            EXIT_FAILURE
        }
        // copyright shares the failure code with help and usage
        Invocation::Copyright => {
            let _ = console.copyright();
            EXIT_FAILURE
        }
        Invocation::Compress { input, output } => {
            let output = resolve_output_path(&input, output.as_deref(), cwd);
            match compress_file(&input, &output) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    let _ = console.error(&e);
                    EXIT_FAILURE
                }
            }
        }
    }
}
