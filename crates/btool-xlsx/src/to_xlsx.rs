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

//! Report to Excel workbook conversion.

use std::path::Path;

use btool_sheet::{encode, Cell, Control, Dialect, NumberFormat, Report, Sheet, Style};
use rust_xlsxwriter::{
    ColNum, Color, DataValidation, Format, Formula, RowNum, Workbook, Worksheet, XlsxError,
};
use tracing::{debug, info};

use crate::error::{Result, XlsxExportError};

/// Configuration for Excel output
#[derive(Debug, Clone)]
pub struct ToXlsxConfig {
    /// Keep header rows and the label column visible while scrolling
    pub freeze_panes: bool,
    /// Width of the label column in characters
    pub label_width: f64,
}

impl Default for ToXlsxConfig {
    fn default() -> Self {
        Self {
            freeze_panes: true,
            label_width: 24.0,
        }
    }
}

/// Convert a report to an in-memory Excel workbook.
pub fn to_xlsx_buffer(report: &Report, config: &ToXlsxConfig) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    for sheet in report.sheets() {
        workbook.push_worksheet(worksheet(sheet, config)?);
    }
    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| XlsxExportError::Workbook(e.to_string()))?;
    debug!(sheets = report.len(), bytes = bytes.len(), "rendered Excel workbook");
    Ok(bytes)
}

/// Write a report as an Excel workbook to `path`.
pub fn write_xlsx(report: &Report, path: impl AsRef<Path>, config: &ToXlsxConfig) -> Result<()> {
    let bytes = to_xlsx_buffer(report, config)?;
    std::fs::write(path.as_ref(), bytes)?;
    info!(path = %path.as_ref().display(), "wrote Excel workbook");
    Ok(())
}

fn worksheet(sheet: &Sheet, config: &ToXlsxConfig) -> Result<Worksheet> {
    let sheet_error = |e: XlsxError| XlsxExportError::Sheet {
        sheet: sheet.name().to_string(),
        message: e.to_string(),
    };

    let mut worksheet = Worksheet::new();
    worksheet.set_name(sheet.name()).map_err(sheet_error)?;
    // FILTER needs the _xlfn prefix to evaluate in Excel; rust_xlsxwriter's
    // Formula::new applies that prefix automatically.
    worksheet
        .set_column_width(0, config.label_width)
        .map_err(sheet_error)?;

    if config.freeze_panes {
        if let Some((row, col)) = sheet.frozen() {
            let (row, col) = position(sheet, row, col)?;
            worksheet.set_freeze_panes(row, col).map_err(sheet_error)?;
        }
    }

    for row in 0..sheet.grid().height() {
        for (col, cell) in sheet.grid().row(row).enumerate() {
            write_cell(&mut worksheet, sheet, row, col, cell)?;
        }
    }
    Ok(worksheet)
}

/// Grid coordinates as worksheet coordinates.
fn position(sheet: &Sheet, row: usize, col: usize) -> Result<(RowNum, ColNum)> {
    match (RowNum::try_from(row), ColNum::try_from(col)) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err(XlsxExportError::Cell {
            sheet: sheet.name().to_string(),
            cell: encode(col, row, false, false),
            message: "position out of range".to_string(),
        }),
    }
}

fn cell_format(style: Style, format: NumberFormat, numeric: bool) -> Format {
    let mut cell_format = Format::new();
    if numeric {
        cell_format = cell_format.set_num_format(format.code());
    }
    if style != Style::None {
        cell_format = cell_format.set_background_color(Color::RGB(style.rgb()));
    }
    cell_format
}

fn list_validation(control: &Control) -> std::result::Result<DataValidation, XlsxError> {
    DataValidation::new()
        .allow_list_strings(control.options.as_slice())?
        .set_input_message(control.message.as_str())
}

fn write_cell(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    row: usize,
    col: usize,
    cell: &Cell,
) -> Result<()> {
    let cell_error = |e: XlsxError| XlsxExportError::Cell {
        sheet: sheet.name().to_string(),
        cell: encode(col, row, false, false),
        message: e.to_string(),
    };

    let content = cell.content();
    let numeric = matches!(content, Cell::Float(_) | Cell::Formula(_) | Cell::Control(_));
    let format = cell_format(cell.style(), sheet.number_format(col), numeric);
    let (r, c) = position(sheet, row, col)?;

    let written = match content {
        Cell::Empty | Cell::Styled(..) => return Ok(()),
        Cell::Float(value) if !value.is_finite() => return Ok(()),
        Cell::Float(value) => worksheet.write_number_with_format(r, c, *value, &format),
        Cell::Text(text) => worksheet.write_string_with_format(r, c, text, &format),
        Cell::Bool(flag) => worksheet.write_boolean_with_format(r, c, *flag, &format),
        Cell::Formula(formula) => {
            let mut formula = Formula::new(formula.render(Dialect::Excel));
            let value = sheet.value(row, col);
            if value.is_finite() {
                formula = formula.set_result(value.to_string());
            }
            worksheet.write_formula_with_format(r, c, formula, &format)
        }
        Cell::Control(control) => {
            let validation = list_validation(control).map_err(cell_error)?;
            worksheet
                .add_data_validation(r, c, r, c, &validation)
                .map_err(cell_error)?;
            match control.default_number() {
                Some(value) => worksheet.write_number_with_format(r, c, value, &format),
                None => worksheet.write_string_with_format(r, c, &control.default, &format),
            }
        }
    };
    written.map(|_| ()).map_err(cell_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use btool_core::Results;
    use btool_sheet::{ReportConfig, SheetKind};

    fn empty_instances() -> Report {
        Report::build(&Results::new(), &ReportConfig::default())
    }

    #[test]
    fn test_position_in_range() {
        let report = empty_instances();
        let sheet = report.sheet(SheetKind::Instances).unwrap();
        assert_eq!(position(sheet, 2, 1).unwrap(), (2, 1));
    }

    #[test]
    fn test_position_out_of_range() {
        let report = empty_instances();
        let sheet = report.sheet(SheetKind::Instances).unwrap();
        let err = position(sheet, 0, usize::from(u16::MAX) + 1).unwrap_err();
        match err {
            XlsxExportError::Cell { sheet, message, .. } => {
                assert_eq!(sheet, "Instances");
                assert_eq!(message, "position out of range");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_list_validation_accepts_controls() {
        let control = Control::new(["none", "average", "median"], "none", "Select merge criteria");
        assert!(list_validation(&control).is_ok());
    }
}
