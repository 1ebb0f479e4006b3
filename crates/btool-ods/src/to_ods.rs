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

//! Report to OpenDocument spreadsheet conversion, flat or packaged.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;

use btool_sheet::{
    encode, Cell, Control, Dialect, NumberFormat, Report, Sheet, SheetKind, Style,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{OdsError, Result};

const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

const NAMESPACES: [(&str, &str); 7] = [
    ("xmlns:office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("xmlns:style", "urn:oasis:names:tc:opendocument:xmlns:style:1.0"),
    ("xmlns:text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    ("xmlns:table", "urn:oasis:names:tc:opendocument:xmlns:table:1.0"),
    ("xmlns:fo", "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"),
    ("xmlns:number", "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0"),
    ("xmlns:of", "urn:oasis:names:tc:opendocument:xmlns:of:1.2"),
];

/// Cell styles: name, highlight, data style.
const CELL_STYLES: [(&str, Style, Option<&str>); 7] = [
    ("cellNumber", Style::None, Some("N2")),
    ("cellNumberInt", Style::None, Some("N0")),
    ("cellBest", Style::Best, Some("N2")),
    ("cellBestInt", Style::Best, Some("N0")),
    ("cellWorst", Style::Worst, Some("N2")),
    ("cellWorstInt", Style::Worst, Some("N0")),
    ("cellInput", Style::Input, None),
];

/// Configuration for OpenDocument output
#[derive(Debug, Clone)]
pub struct ToOdsConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Indentation width in spaces
    pub indent: usize,
}

impl Default for ToOdsConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }
}

/// Dropdown validations keyed by (sheet, row, column).
type Validations<'a> = BTreeMap<(SheetKind, usize, usize), (String, &'a Control)>;

/// Convert a report to a flat OpenDocument spreadsheet.
pub fn to_ods_string(report: &Report, config: &ToOdsConfig) -> Result<String> {
    Ok(String::from_utf8(render(report, config, Root::Flat)?)?)
}

/// Convert a report to a packaged OpenDocument spreadsheet.
///
/// The archive holds the uncompressed `mimetype` entry first, then
/// `content.xml` and `META-INF/manifest.xml`.
///
/// # Example
///
/// ```rust
/// use btool_ods::{to_ods_package, ToOdsConfig};
/// use btool_sheet::{Report, ReportConfig};
/// use btool_core::Results;
///
/// let report = Report::build(&Results::new(), &ReportConfig::default());
/// let bytes = to_ods_package(&report, &ToOdsConfig::default()).unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
pub fn to_ods_package(report: &Report, config: &ToOdsConfig) -> Result<Vec<u8>> {
    let content = render(report, config, Root::Content)?;
    let manifest = manifest(config)?;

    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("mimetype", stored)?;
    zip.write_all(MIMETYPE.as_bytes())?;
    zip.start_file("content.xml", deflated)?;
    zip.write_all(&content)?;
    zip.start_file("META-INF/manifest.xml", deflated)?;
    zip.write_all(&manifest)?;
    let bytes = zip.finish()?.into_inner();

    debug!(
        content = content.len(),
        bytes = bytes.len(),
        "packaged OpenDocument spreadsheet"
    );
    Ok(bytes)
}

/// Render a report in the layout its file name asks for: flat XML for
/// `.fods`, a ZIP package otherwise.
pub fn render_ods(report: &Report, path: &Path, config: &ToOdsConfig) -> Result<Vec<u8>> {
    if is_flat(path) {
        render(report, config, Root::Flat)
    } else {
        to_ods_package(report, config)
    }
}

/// Write a report as an OpenDocument spreadsheet to `path`.
pub fn write_ods(report: &Report, path: impl AsRef<Path>, config: &ToOdsConfig) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_ods(report, path, config)?;
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), flat = is_flat(path), "wrote OpenDocument spreadsheet");
    Ok(())
}

fn is_flat(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("fods"))
}

/// Root element of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    /// `office:document` of a single-file spreadsheet
    Flat,
    /// `office:document-content` of a package's `content.xml`
    Content,
}

impl Root {
    fn element(self) -> &'static str {
        match self {
            Root::Flat => "office:document",
            Root::Content => "office:document-content",
        }
    }
}

fn xml_writer(config: &ToOdsConfig) -> Writer<Cursor<Vec<u8>>> {
    if config.pretty {
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', config.indent)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    }
}

fn declaration<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    emit(
        writer,
        "?xml",
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )
}

fn render(report: &Report, config: &ToOdsConfig, root: Root) -> Result<Vec<u8>> {
    let mut writer = xml_writer(config);
    declaration(&mut writer)?;

    let mut element = BytesStart::new(root.element());
    for namespace in NAMESPACES {
        element.push_attribute(namespace);
    }
    element.push_attribute(("office:version", "1.2"));
    if root == Root::Flat {
        element.push_attribute(("office:mimetype", MIMETYPE));
    }
    emit(&mut writer, root.element(), Event::Start(element))?;

    write_styles(&mut writer)?;

    let validations = collect_validations(report);
    start(&mut writer, "office:body")?;
    start(&mut writer, "office:spreadsheet")?;
    write_validations(&mut writer, &validations)?;
    for sheet in report.sheets() {
        write_table(&mut writer, sheet, &validations)?;
    }
    end(&mut writer, "office:spreadsheet")?;
    end(&mut writer, "office:body")?;
    end(&mut writer, root.element())?;

    let bytes = writer.into_inner().into_inner();
    debug!(
        sheets = report.len(),
        validations = validations.len(),
        bytes = bytes.len(),
        "rendered OpenDocument spreadsheet"
    );
    Ok(bytes)
}

/// `META-INF/manifest.xml` listing the package root and `content.xml`.
fn manifest(config: &ToOdsConfig) -> Result<Vec<u8>> {
    let mut writer = xml_writer(config);
    declaration(&mut writer)?;

    let mut root = BytesStart::new("manifest:manifest");
    root.push_attribute((
        "xmlns:manifest",
        "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0",
    ));
    root.push_attribute(("manifest:version", "1.2"));
    emit(&mut writer, "manifest:manifest", Event::Start(root))?;
    for (path, media_type) in [("/", MIMETYPE), ("content.xml", "text/xml")] {
        let mut entry = BytesStart::new("manifest:file-entry");
        entry.push_attribute(("manifest:full-path", path));
        if path == "/" {
            entry.push_attribute(("manifest:version", "1.2"));
        }
        entry.push_attribute(("manifest:media-type", media_type));
        emit(&mut writer, "manifest:file-entry", Event::Empty(entry))?;
    }
    end(&mut writer, "manifest:manifest")?;

    Ok(writer.into_inner().into_inner())
}

fn emit<W: Write>(writer: &mut Writer<W>, element: &str, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| OdsError::Write {
        element: element.to_string(),
        message: e.to_string(),
    })
}

fn start<W: Write>(writer: &mut Writer<W>, element: &str) -> Result<()> {
    emit(writer, element, Event::Start(BytesStart::new(element)))
}

fn end<W: Write>(writer: &mut Writer<W>, element: &str) -> Result<()> {
    emit(writer, element, Event::End(BytesEnd::new(element)))
}

/// `<element>text</element>`
fn text_element<W: Write>(writer: &mut Writer<W>, element: &str, text: &str) -> Result<()> {
    start(writer, element)?;
    emit(writer, element, Event::Text(BytesText::new(text)))?;
    end(writer, element)
}

fn write_styles<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    start(writer, "office:automatic-styles")?;

    for (name, decimals) in [("N2", "2"), ("N0", "0")] {
        let mut style = BytesStart::new("number:number-style");
        style.push_attribute(("style:name", name));
        emit(writer, "number:number-style", Event::Start(style))?;
        let mut number = BytesStart::new("number:number");
        number.push_attribute(("number:decimal-places", decimals));
        number.push_attribute(("number:min-decimal-places", decimals));
        number.push_attribute(("number:min-integer-digits", "1"));
        emit(writer, "number:number", Event::Empty(number))?;
        end(writer, "number:number-style")?;
    }

    for (name, highlight, data_style) in CELL_STYLES {
        let mut style = BytesStart::new("style:style");
        style.push_attribute(("style:name", name));
        style.push_attribute(("style:family", "table-cell"));
        if let Some(data_style) = data_style {
            style.push_attribute(("style:data-style-name", data_style));
        }
        if highlight == Style::None {
            emit(writer, "style:style", Event::Empty(style))?;
            continue;
        }
        emit(writer, "style:style", Event::Start(style))?;
        let mut props = BytesStart::new("style:table-cell-properties");
        props.push_attribute(("fo:background-color", highlight.color()));
        emit(writer, "style:table-cell-properties", Event::Empty(props))?;
        end(writer, "style:style")?;
    }

    end(writer, "office:automatic-styles")
}

fn collect_validations(report: &Report) -> Validations<'_> {
    let mut validations = Validations::new();
    for sheet in report.sheets() {
        for row in 0..sheet.grid().height() {
            for (col, cell) in sheet.grid().row(row).enumerate() {
                if let Cell::Control(control) = cell.content() {
                    let name = format!("val{}", validations.len() + 1);
                    validations.insert((sheet.kind(), row, col), (name, control));
                }
            }
        }
    }
    validations
}

/// `of:cell-content-is-in-list("a";"b")`
fn list_condition(control: &Control) -> String {
    let options: Vec<String> = control
        .options
        .iter()
        .map(|option| format!("\"{}\"", option.replace('"', "\"\"")))
        .collect();
    format!("of:cell-content-is-in-list({})", options.join(";"))
}

fn write_validations<W: Write>(writer: &mut Writer<W>, validations: &Validations<'_>) -> Result<()> {
    if validations.is_empty() {
        return Ok(());
    }
    start(writer, "table:content-validations")?;
    for ((kind, row, col), (name, control)) in validations {
        let mut validation = BytesStart::new("table:content-validation");
        validation.push_attribute(("table:name", name.as_str()));
        validation.push_attribute(("table:condition", list_condition(control).as_str()));
        validation.push_attribute(("table:allow-empty-cell", "true"));
        validation.push_attribute(("table:display-list", "unsorted"));
        validation.push_attribute((
            "table:base-cell-address",
            format!("{}.{}", kind.name(), encode(*col, *row, false, false)).as_str(),
        ));
        emit(writer, "table:content-validation", Event::Start(validation))?;

        let mut help = BytesStart::new("table:help-message");
        help.push_attribute(("table:display", "true"));
        emit(writer, "table:help-message", Event::Start(help))?;
        text_element(writer, "text:p", &control.message)?;
        end(writer, "table:help-message")?;

        end(writer, "table:content-validation")?;
    }
    end(writer, "table:content-validations")
}

fn write_table<W: Write>(
    writer: &mut Writer<W>,
    sheet: &Sheet,
    validations: &Validations<'_>,
) -> Result<()> {
    let mut table = BytesStart::new("table:table");
    table.push_attribute(("table:name", sheet.name()));
    emit(writer, "table:table", Event::Start(table))?;

    let width = sheet.grid().width().max(1);
    let mut column = BytesStart::new("table:table-column");
    column.push_attribute(("table:number-columns-repeated", width.to_string().as_str()));
    emit(writer, "table:table-column", Event::Empty(column))?;

    for row in 0..sheet.grid().height() {
        start(writer, "table:table-row")?;
        if sheet.grid().width() == 0 {
            emit(
                writer,
                "table:table-cell",
                Event::Empty(BytesStart::new("table:table-cell")),
            )?;
        }
        for (col, cell) in sheet.grid().row(row).enumerate() {
            let validation = validations
                .get(&(sheet.kind(), row, col))
                .map(|(name, _)| name.as_str());
            write_cell(writer, sheet, row, col, cell, validation)?;
        }
        end(writer, "table:table-row")?;
    }

    end(writer, "table:table")
}

fn style_name(style: Style, format: NumberFormat, numeric: bool) -> Option<&'static str> {
    let integer = format == NumberFormat::Integer;
    match style {
        Style::Input => Some("cellInput"),
        Style::Best if integer => Some("cellBestInt"),
        Style::Best => Some("cellBest"),
        Style::Worst if integer => Some("cellWorstInt"),
        Style::Worst => Some("cellWorst"),
        Style::None if !numeric => None,
        Style::None if integer => Some("cellNumberInt"),
        Style::None => Some("cellNumber"),
    }
}

fn write_cell<W: Write>(
    writer: &mut Writer<W>,
    sheet: &Sheet,
    row: usize,
    col: usize,
    cell: &Cell,
    validation: Option<&str>,
) -> Result<()> {
    let content = cell.content();
    let numeric = matches!(content, Cell::Float(_) | Cell::Formula(_));
    let mut element = BytesStart::new("table:table-cell");
    if let Some(style) = style_name(cell.style(), sheet.number_format(col), numeric) {
        element.push_attribute(("table:style-name", style));
    }
    if let Some(validation) = validation {
        element.push_attribute(("table:content-validation-name", validation));
    }

    let text = match content {
        Cell::Empty | Cell::Styled(..) => None,
        Cell::Float(value) => {
            push_float(&mut element, *value);
            None
        }
        Cell::Text(text) => {
            element.push_attribute(("office:value-type", "string"));
            Some(text.clone())
        }
        Cell::Bool(flag) => {
            element.push_attribute(("office:value-type", "boolean"));
            element.push_attribute(("office:boolean-value", if *flag { "true" } else { "false" }));
            Some(if *flag { "TRUE" } else { "FALSE" }.to_string())
        }
        Cell::Formula(formula) => {
            element.push_attribute(("table:formula", formula.render(Dialect::OpenFormula).as_str()));
            let value = sheet.value(row, col);
            if value.is_finite() {
                push_float(&mut element, value);
            }
            None
        }
        Cell::Control(control) => {
            match control.default_number() {
                Some(value) => push_float(&mut element, value),
                None => element.push_attribute(("office:value-type", "string")),
            }
            Some(control.default.clone())
        }
    };

    match text {
        Some(text) => {
            emit(writer, "table:table-cell", Event::Start(element))?;
            text_element(writer, "text:p", &text)?;
            end(writer, "table:table-cell")
        }
        None => emit(writer, "table:table-cell", Event::Empty(element)),
    }
}

fn push_float(element: &mut BytesStart<'_>, value: f64) {
    element.push_attribute(("office:value-type", "float"));
    element.push_attribute(("office:value", value.to_string().as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_condition_quotes_options() {
        let control = Control::new(["a", "say \"hi\""], "a", "pick");
        assert_eq!(
            list_condition(&control),
            "of:cell-content-is-in-list(\"a\";\"say \"\"hi\"\"\")"
        );
    }

    #[test]
    fn test_style_names() {
        assert_eq!(style_name(Style::Best, NumberFormat::Decimal, true), Some("cellBest"));
        assert_eq!(style_name(Style::Worst, NumberFormat::Integer, true), Some("cellWorstInt"));
        assert_eq!(style_name(Style::Input, NumberFormat::Integer, true), Some("cellInput"));
        assert_eq!(style_name(Style::None, NumberFormat::Decimal, false), None);
        assert_eq!(style_name(Style::None, NumberFormat::Integer, true), Some("cellNumberInt"));
    }

    #[test]
    fn test_flat_layout_by_extension() {
        assert!(is_flat(Path::new("out.fods")));
        assert!(is_flat(Path::new("OUT.FODS")));
        assert!(!is_flat(Path::new("out.ods")));
        assert!(!is_flat(Path::new("out")));
    }

    #[test]
    fn test_manifest_lists_content() {
        let manifest = String::from_utf8(manifest(&ToOdsConfig::default()).unwrap()).unwrap();
        assert!(manifest.contains(r#"manifest:full-path="/""#));
        assert!(manifest.contains(&format!(r#"manifest:media-type="{}""#, MIMETYPE)));
        assert!(manifest.contains(r#"manifest:full-path="content.xml""#));
    }

    #[test]
    fn test_every_style_is_declared() {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_styles(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        for (name, _, _) in CELL_STYLES {
            assert!(xml.contains(&format!("style:name=\"{}\"", name)), "{}", name);
        }
        assert!(xml.contains("fo:background-color=\"#00ff00\""));
        assert!(xml.contains("fo:background-color=\"#ff0000\""));
        assert!(xml.contains("fo:background-color=\"#ffcc99\""));
    }
}
