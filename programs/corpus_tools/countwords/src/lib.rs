//! Counts whitespace-delimited words and lists them by how often they occur.

pub mod count;
pub mod error;
pub mod output;
pub mod rank;

pub use count::{count_words, FrequencyTable};
pub use error::CountError;
pub use output::{write_json, write_table};
pub use rank::{rank, WordCount};

use log::debug;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub reverse: bool,
    pub json: bool,
}

pub fn run<R: Read, W: Write>(options: &Options, input: R, output: W) -> Result<(), CountError> {
    let table = count_words(input)?;
    debug!("counted {} tokens, {} distinct", table.total(), table.len());

    let words = rank(&table, options.reverse);
    match options.json {
        true => {
            debug!("writing {} entries as json", words.len());
            write_json(&words, output)
        }
        false => {
            debug!("writing {} entries as table", words.len());
            write_table(&words, output)
        }
    }
}

/// `-` is standard input.
pub fn open_input(arg: &str) -> Result<Box<dyn Read>, CountError> {
    if arg == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    File::open(arg)
        .map(|f| Box::new(f) as Box<dyn Read>)
        .map_err(|source| CountError::Open {
            path: arg.into(),
            source,
        })
}

pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>, CountError> {
    match path {
        None => Ok(Box::new(io::stdout().lock())),
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|source| CountError::Create {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// A bad input path never touches `output`.
pub fn run_paths(options: &Options, input: &str, output: Option<&Path>) -> Result<(), CountError> {
    let input = open_input(input)?;
    let output = create_output(output)?;
    run(options, input, output)
}
