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

//! Error types for OpenDocument output.

use thiserror::Error;

/// Errors raised while writing an OpenDocument spreadsheet.
#[derive(Debug, Error)]
pub enum OdsError {
    /// The XML writer failed.
    ///
    /// # Example
    ///
    /// ```text
    /// Failed to write <table:table>: I/O error
    /// ```
    #[error("Failed to write <{element}>: {message}")]
    Write { element: String, message: String },

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ZIP package could not be assembled.
    #[error("Failed to package spreadsheet: {0}")]
    Package(#[from] zip::result::ZipError),

    /// The generated document is not valid UTF-8.
    #[error("Invalid UTF-8 in generated document: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for OpenDocument output.
pub type Result<T> = std::result::Result<T, OdsError>;
