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

//! Dump of the Instances values for downstream analysis.
//!
//! One row per instance-level data row. The first column holds the row
//! label, followed by one column per numeric (measure, configuration) pair
//! headed `measure/configuration`, measures in name order. Missing values
//! are written as empty fields.
//!
//! Two trailing `_metadata` columns follow. `_metadata/offset` holds, in the
//! first row only, the zero-based index of the last instance row.
//! `_metadata/timeout` lists the timeout in seconds of every job, one per
//! row; rows without instance data are appended when there are more jobs
//! than instance rows.

use std::io::Write;
use std::path::Path;

use btool_sheet::{Cell, Report, Sheet, SheetKind, HEADER_ROWS};
use tracing::info;

use crate::error::{CsvError, Result};

const METADATA_COLUMNS: [&str; 2] = ["_metadata/offset", "_metadata/timeout"];

/// Configuration for value export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Header of the label column (default: "instance")
    pub instance_header: String,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Append the `_metadata` columns (default: true)
    pub include_metadata: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            instance_header: "instance".to_string(),
            quote_style: csv::QuoteStyle::Necessary,
            include_metadata: true,
        }
    }
}

/// Export the Instances values of a report to a CSV string.
pub fn export_values(report: &Report, config: &ExportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    export_values_writer(report, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "value export".to_string(),
    })
}

/// Export the Instances values of a report to `path`.
pub fn write_values(report: &Report, path: impl AsRef<Path>, config: &ExportConfig) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    export_values_writer(report, file, config)?;
    info!(path = %path.as_ref().display(), "exported values");
    Ok(())
}

/// Export the Instances values of a report to a writer.
pub fn export_values_writer<W: Write>(report: &Report, writer: W, config: &ExportConfig) -> Result<()> {
    let sheet = report
        .sheet(SheetKind::Instances)
        .ok_or_else(|| CsvError::MissingSheet(SheetKind::Instances.name().to_string()))?;

    let mut out = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    let columns = value_columns(sheet);
    if config.include_headers {
        let mut header = vec![config.instance_header.clone()];
        header.extend(columns.iter().map(|(name, _)| name.clone()));
        if config.include_metadata {
            header.extend(METADATA_COLUMNS.map(str::to_string));
        }
        out.write_record(&header)?;
    }

    let timeouts = report.job_timeouts();
    let data_rows = sheet.data_rows();
    let rows = if config.include_metadata {
        data_rows.max(timeouts.len())
    } else {
        data_rows
    };
    for index in 0..rows {
        let mut record = if index < data_rows {
            data_record(sheet, HEADER_ROWS + index, &columns)
        } else {
            vec![String::new(); columns.len() + 1]
        };
        if config.include_metadata {
            let offset = if index == 0 {
                (data_rows as i64 - 1).to_string()
            } else {
                String::new()
            };
            let timeout = timeouts
                .get(index)
                .map(u64::to_string)
                .unwrap_or_default();
            record.push(offset);
            record.push(timeout);
        }
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Label and values of one instance row.
fn data_record(sheet: &Sheet, row: usize, columns: &[(String, usize)]) -> Vec<String> {
    let label = match sheet.cell(row, 0).content() {
        Cell::Text(text) => text.clone(),
        _ => String::new(),
    };
    let mut record = vec![label];
    record.extend(columns.iter().map(|(_, col)| {
        let value = sheet.value(row, *col);
        if value.is_nan() {
            String::new()
        } else {
            value.to_string()
        }
    }));
    record
}

/// Header and column of every numeric data column, grouped by measure.
fn value_columns(sheet: &Sheet) -> Vec<(String, usize)> {
    sheet
        .numeric_measures()
        .flat_map(|(measure, cols)| {
            cols.iter().map(move |col| {
                let configuration = sheet
                    .column(*col)
                    .map(|info| info.configuration.as_str())
                    .unwrap_or_default();
                (format!("{}/{}", measure, configuration), *col)
            })
        })
        .collect()
}
