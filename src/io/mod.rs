//! # Reading of linear programs
//!
//! This module provides read functionality for the LP text format, from a file or any other
//! source.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::general_form::GeneralForm;
use crate::data::number_types::traits::OrderedField;
use crate::io::error::Import;

pub mod error;
pub mod lp;

/// Import a problem from a file.
///
/// The `import` function takes a file path and returns, if successful, a linear program in
/// general form.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents can't be parsed.
pub fn import<F: OrderedField>(file_path: &Path) -> Result<GeneralForm<F>, Import> {
    log::info!("Reading problem from {}", file_path.display());
    read(File::open(file_path)?)
}

/// Import a problem from any reader, such as the standard input.
///
/// # Errors
///
/// When the reading is interrupted, or the contents can't be parsed.
pub fn read<F: OrderedField, R: Read>(mut reader: R) -> Result<GeneralForm<F>, Import> {
    let mut program = String::new();
    reader.read_to_string(&mut program)?;

    let program = lp::parse(&program)?;
    log::debug!(
        "Read a problem with {} variables and {} constraints",
        program.nr_variables(), program.nr_constraints(),
    );

    Ok(program)
}
