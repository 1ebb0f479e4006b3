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

//! OpenDocument output over the shared fixtures.

use std::io::Read;

use btool_ods::{to_ods_package, to_ods_string, write_ods, ToOdsConfig};
use btool_sheet::{Report, ReportConfig};
use btool_test::fixtures::{self, documents};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::{CompressionMethod, ZipArchive};

fn render(xml: &str) -> String {
    let report = Report::build(&fixtures::parse(xml), &ReportConfig::default());
    to_ods_string(&report, &ToOdsConfig::default()).unwrap()
}

/// Names of all `<table:table>` elements, failing on malformed XML.
fn table_names(ods: &str) -> Vec<String> {
    let mut reader = Reader::from_str(ods);
    let mut names = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"table:table" => {
                let name = e
                    .attributes()
                    .flatten()
                    .find(|a| a.key.as_ref() == b"table:name")
                    .map(|a| String::from_utf8_lossy(&a.value).into_owned())
                    .unwrap_or_default();
                names.push(name);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed output at {}: {}", reader.buffer_position(), e),
        }
    }
    names
}

#[test]
fn test_one_table_per_sheet() {
    let ods = render(documents::TWO_SETTINGS);
    assert_eq!(
        table_names(&ods),
        vec!["Instances", "Merged_Runs", "Classes", "Helper", "Charts"]
    );
}

#[test]
fn test_all_fixtures_are_well_formed() {
    for (name, xml) in fixtures::all() {
        let ods = render(xml);
        assert!(!table_names(&ods).is_empty(), "{}", name);
    }
}

#[test]
fn test_cross_sheet_formulas() {
    let ods = render(documents::TWO_SETTINGS);
    assert!(ods.contains(r#"table:formula="of:=AVERAGE([Instances.B3:Instances.B4])""#));
    assert!(ods.contains(r#"table:formula="of:=SUM([Instances.C3:Instances.C4])""#));
    assert!(ods.contains(r#"office:value="8.5""#));
}

#[test]
fn test_highlight_styles_applied() {
    let ods = render(documents::TWO_SETTINGS);
    assert!(ods.contains(r#"<style:style style:name="cellBest" style:family="table-cell""#));
    assert!(ods.contains(r#"table:style-name="cellBest""#));
    assert!(ods.contains(r#"table:style-name="cellWorst""#));
    assert!(ods.contains(r#"table:style-name="cellBestInt""#));
}

#[test]
fn test_dropdown_validations() {
    let ods = render(documents::TWO_SETTINGS);
    assert!(ods.contains(
        "of:cell-content-is-in-list(&quot;average&quot;;&quot;median&quot;;\
         &quot;min&quot;;&quot;max&quot;;&quot;diff&quot;)"
    ));
    assert!(ods.contains(r#"table:base-cell-address="Merged_Runs.A2""#));
    assert!(ods.contains("<text:p>Select merge criteria</text:p>"));
    assert!(ods.contains(r#"table:content-validation-name="val1""#));
}

#[test]
fn test_compact_output() {
    let report = Report::build(
        &fixtures::parse(documents::TWO_SETTINGS),
        &ReportConfig::default(),
    );
    let config = ToOdsConfig {
        pretty: false,
        ..ToOdsConfig::default()
    };
    let ods = to_ods_string(&report, &config).unwrap();
    assert!(!ods.contains("\n  <"));
    assert_eq!(table_names(&ods).len(), 5);
}

#[test]
fn test_write_ods_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.fods");
    let report = Report::build(
        &fixtures::parse(documents::MULTI_RUN),
        &ReportConfig::default(),
    );
    write_ods(&report, &path, &ToOdsConfig::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_ods_string(&report, &ToOdsConfig::default()).unwrap());
    assert!(written.contains("Select run number"));
}

#[test]
fn test_write_ods_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ods");
    let report = Report::build(
        &fixtures::parse(documents::TWO_SETTINGS),
        &ReportConfig::default(),
    );
    write_ods(&report, &path, &ToOdsConfig::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let mut archive = ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    {
        let mut mimetype = archive.by_index(0).unwrap();
        assert_eq!(mimetype.name(), "mimetype");
        assert_eq!(mimetype.compression(), CompressionMethod::Stored);
        let mut text = String::new();
        mimetype.read_to_string(&mut text).unwrap();
        assert_eq!(text, "application/vnd.oasis.opendocument.spreadsheet");
    }
    assert!(archive.by_name("META-INF/manifest.xml").is_ok());

    let mut content = String::new();
    archive
        .by_name("content.xml")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.contains("<office:document-content"));
    assert!(!content.contains("office:mimetype"));
    assert_eq!(
        table_names(&content),
        vec!["Instances", "Merged_Runs", "Classes", "Helper", "Charts"]
    );
}

#[test]
fn test_package_matches_flat_tables() {
    let report = Report::build(
        &fixtures::parse(documents::MULTI_RUN),
        &ReportConfig::default(),
    );
    let flat = to_ods_string(&report, &ToOdsConfig::default()).unwrap();
    let package = to_ods_package(&report, &ToOdsConfig::default()).unwrap();
    let mut archive = ZipArchive::new(std::io::Cursor::new(package)).unwrap();
    let mut content = String::new();
    archive
        .by_name("content.xml")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();

    let body = |xml: &str| {
        let start = xml.find("<office:body>").unwrap();
        let end = xml.find("</office:body>").unwrap();
        xml[start..end].to_string()
    };
    assert_eq!(body(&content), body(&flat));
}
