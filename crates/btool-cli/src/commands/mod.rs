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

//! CLI command implementations

mod conv;

pub use conv::{conv, output_format, ConvOptions, OutputFormat};

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CliError;

/// Default maximum input size (1 GB).
/// Can be overridden via the `BTOOL_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum input size from `BTOOL_MAX_FILE_SIZE`, or the default when the
/// variable is unset or not a number.
fn max_file_size() -> u64 {
    std::env::var("BTOOL_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a result file, or stdin when `path` is `None`, with size validation.
///
/// Files are checked against the limit before reading; stdin is read up to
/// one byte past the limit.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, exceeds the configured
/// maximum size or is not valid UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let max = max_file_size();
    match path {
        Some(path) => {
            let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
            if metadata.len() > max {
                return Err(CliError::file_too_large(path, metadata.len(), max));
            }
            fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .lock()
                .take(max.saturating_add(1))
                .read_to_string(&mut content)
                .map_err(|e| CliError::io_error("<stdin>", e))?;
            let actual = content.len() as u64;
            if actual > max {
                return Err(CliError::file_too_large("<stdin>", actual, max));
            }
            Ok(content)
        }
    }
}

/// Write each `(path, bytes)` pair through a temporary file next to its
/// target.
///
/// Every temporary file is written before the first one is renamed into
/// place, so a target that cannot be written leaves all targets untouched.
///
/// # Errors
///
/// Returns `Err` if a directory is not writable or a rename fails.
pub fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<(), CliError> {
    let mut staged = Vec::with_capacity(outputs.len());
    for (path, bytes) in outputs {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| CliError::io_error(*path, e))?;
        file.write_all(bytes)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| CliError::io_error(*path, e))?;
        staged.push((*path, file));
    }
    for (path, file) in staged {
        file.persist(path)
            .map_err(|e| CliError::io_error(path, e.error))?;
    }
    Ok(())
}
