// Dweve BTool - Benchmark Result Tabulation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the btool CLI.

use std::io;
use std::path::PathBuf;

use btool_core::CoreError;
use btool_csv::CsvError;
use btool_ods::OdsError;
use btool_xlsx::XlsxExportError;
use thiserror::Error;

/// The main error type for btool CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use btool_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input exceeds `BTOOL_MAX_FILE_SIZE`.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)"
    )]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The result file could not be read.
    #[error("Parse error: {0}")]
    Parse(String),

    /// OpenDocument output failed.
    #[error("ODS output error: {0}")]
    OdsOutput(String),

    /// Excel output failed.
    #[error("XLSX output error: {0}")]
    XlsxOutput(String),

    /// Value export failed.
    #[error("CSV export error: {0}")]
    CsvExport(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```
    /// use btool_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("results.xml", 3 * 1024 * 1024, 1024 * 1024);
    /// assert!(err.to_string().contains("(1 MB)"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<CoreError> for CliError {
    fn from(source: CoreError) -> Self {
        Self::Parse(source.to_string())
    }
}

impl From<OdsError> for CliError {
    fn from(source: OdsError) -> Self {
        Self::OdsOutput(source.to_string())
    }
}

impl From<XlsxExportError> for CliError {
    fn from(source: XlsxExportError) -> Self {
        Self::XlsxOutput(source.to_string())
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::CsvExport(source.to_string())
    }
}
