//! Input and output resolution
//!
//! A path of `-`, a missing path, or the `--stdin`/`--stdout` flags select the
//! standard streams. Input bytes must be UTF-8.

use anyhow::{Context, Result};
use clap::ArgMatches;
use mml_parser::mml::parsing::decode;
use std::fs;
use std::io::{Read, Write};

pub enum Input {
    Stdin,
    File(String),
}

impl Input {
    pub fn from_args(args: &ArgMatches) -> Self {
        let path = args
            .get_one::<String>("input-file")
            .or_else(|| args.get_one::<String>("input"));
        match path {
            Some(path) if path != "-" && !args.get_flag("stdin") => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Input::Stdin => "stdin",
            Input::File(path) => path,
        }
    }

    pub fn read(&self) -> Result<String> {
        let bytes = match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read stdin")?;
                bytes
            }
            Input::File(path) => {
                fs::read(path).with_context(|| format!("Failed to read {path}"))?
            }
        };
        let source = decode(&bytes).with_context(|| format!("Cannot read {}", self.describe()))?;
        Ok(source.to_string())
    }
}

pub enum Output {
    Stdout,
    File(String),
}

impl Output {
    pub fn from_args(args: &ArgMatches) -> Self {
        let path = args
            .get_one::<String>("output-file")
            .or_else(|| args.get_one::<String>("output"));
        match path {
            Some(path) if path != "-" && !args.get_flag("stdout") => Output::File(path.clone()),
            _ => Output::Stdout,
        }
    }

    pub fn write(&self, data: &str) -> Result<()> {
        match self {
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(data.as_bytes())?;
                if !data.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            Output::File(path) => {
                fs::write(path, data).with_context(|| format!("Failed to write {path}"))?;
                log::info!("Wrote {path}");
            }
        }
        Ok(())
    }
}
