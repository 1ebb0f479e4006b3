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

//! Error types for value export.

use thiserror::Error;

/// Value export error types.
///
/// # Examples
///
/// ```
/// use btool_csv::CsvError;
///
/// let err = CsvError::MissingSheet("Instances".to_string());
/// assert_eq!(err.to_string(), "Report has no Instances sheet");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The sheet to export was not built.
    #[error("Report has no {0} sheet")]
    MissingSheet(String),

    /// The output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the csv crate.
    #[error("CSV error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Output is not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 { context: String },
}

/// Result type for value export.
pub type Result<T> = std::result::Result<T, CsvError>;
