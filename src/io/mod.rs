//! # Reading and writing of transportation problems
//!
//! This module provides read and write functionality for transportation problem formats.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::number::Quantity;
use crate::data::transportation::Problem;
use crate::io::error::Import;

pub mod error;
pub mod tp;

/// Import a problem from a file.
///
/// Currently only supports the `.tp` filetype, see the `tp` module.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import<F: Quantity>(file_path: &Path) -> Result<Problem<F>, Import> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut program)
        .map_err(Import::IO)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("tp" | "TP") => tp::parse(&program),
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
