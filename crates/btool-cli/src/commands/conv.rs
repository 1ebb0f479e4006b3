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

//! Conversion of a result file into a spreadsheet report.

use std::path::{Path, PathBuf};

use btool_core::{parse_results, MeasureSelection, ProjectFilter};
use btool_csv::{export_values, ExportConfig};
use btool_ods::{to_ods_package, to_ods_string, ToOdsConfig};
use btool_sheet::{Report, ReportConfig};
use btool_xlsx::{to_xlsx_buffer, ToXlsxConfig};
use tracing::{debug, info};

use super::{read_input, write_outputs};
use crate::error::CliError;

/// Spreadsheet dialect of the written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// OpenDocument spreadsheet package
    Ods,
    /// Flat OpenDocument spreadsheet (single XML document)
    Fods,
    /// Office Open XML workbook
    Xlsx,
}

/// Options of one `conv` invocation.
#[derive(Debug, Clone)]
pub struct ConvOptions {
    /// Result file; stdin when `None`
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub projects: ProjectFilter,
    pub measures: MeasureSelection,
    /// Explicit dialect; otherwise taken from the output extension
    pub format: Option<OutputFormat>,
    /// Also dump the Instances values as CSV to this path
    pub export_values: Option<PathBuf>,
    pub merged_runs: bool,
    pub charts: bool,
}

/// Dialect for `output`, preferring an explicit `format`.
///
/// # Examples
///
/// ```
/// use btool_cli::commands::{output_format, OutputFormat};
/// use std::path::Path;
///
/// assert_eq!(output_format(Path::new("out.xlsx"), None).unwrap(), OutputFormat::Xlsx);
/// assert_eq!(output_format(Path::new("out.ods"), None).unwrap(), OutputFormat::Ods);
/// assert_eq!(output_format(Path::new("out.fods"), None).unwrap(), OutputFormat::Fods);
/// assert_eq!(
///     output_format(Path::new("out.bin"), Some(OutputFormat::Ods)).unwrap(),
///     OutputFormat::Ods
/// );
/// assert!(output_format(Path::new("out.txt"), None).is_err());
/// ```
pub fn output_format(output: &Path, format: Option<OutputFormat>) -> Result<OutputFormat, CliError> {
    if let Some(format) = format {
        return Ok(format);
    }
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("ods") => Ok(OutputFormat::Ods),
        Some("fods") => Ok(OutputFormat::Fods),
        Some("xlsx") => Ok(OutputFormat::Xlsx),
        _ => Err(CliError::invalid_input(format!(
            "cannot infer the output format of '{}', use --format ods|fods|xlsx",
            output.display()
        ))),
    }
}

/// Read a result file, build the report and write it out.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, or if any output
/// cannot be rendered or written. Every output is rendered before the first
/// one is written, so invalid input or a failed rendering leaves no file.
pub fn conv(options: &ConvOptions) -> Result<(), CliError> {
    let format = output_format(&options.output, options.format)?;
    let content = read_input(options.input.as_deref())?;
    let results = parse_results(&content)?;
    debug!(bytes = content.len(), "parsed result file");

    let config = ReportConfig {
        measures: options.measures.clone(),
        projects: options.projects.clone(),
        merged_runs: options.merged_runs,
        charts: options.charts,
    };
    let report = Report::build(&results, &config);

    let spreadsheet = render(&report, format)?;
    let values = match &options.export_values {
        Some(path) => Some((path, export_values(&report, &ExportConfig::default())?)),
        None => None,
    };

    let mut outputs = vec![(options.output.as_path(), spreadsheet.as_slice())];
    if let Some((path, csv)) = &values {
        outputs.push((path.as_path(), csv.as_bytes()));
    }
    write_outputs(&outputs)?;

    info!(
        output = %options.output.display(),
        sheets = report.len(),
        "conversion finished"
    );
    Ok(())
}

fn render(report: &Report, format: OutputFormat) -> Result<Vec<u8>, CliError> {
    Ok(match format {
        OutputFormat::Ods => to_ods_package(report, &ToOdsConfig::default())?,
        OutputFormat::Fods => to_ods_string(report, &ToOdsConfig::default())?.into_bytes(),
        OutputFormat::Xlsx => to_xlsx_buffer(report, &ToXlsxConfig::default())?,
    })
}
