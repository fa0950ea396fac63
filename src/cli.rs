//! Command-line options, parsed by hand like the rest of the glue.

use std::path::PathBuf;

use anyhow::{bail, Result};

const USAGE: &str = "usage: autocart [--assets DIR] [--high-score FILE]";

#[derive(Debug, Clone)]
pub struct Options {
    pub assets_dir: PathBuf,
    pub high_score_file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            high_score_file: PathBuf::from("high_score.txt"),
        }
    }
}

impl Options {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut opts = Options::default();
        let _bin = args.next();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => opts.assets_dir = value_for(&mut args, "--assets")?.into(),
                "--high-score" => {
                    opts.high_score_file = value_for(&mut args, "--high-score")?.into()
                }
                "--help" | "-h" => {
                    println!("{USAGE}");
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}'\n{USAGE}"),
            }
        }
        Ok(opts)
    }
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(value) => Ok(value),
        None => bail!("{flag} needs a value\n{USAGE}"),
    }
}
