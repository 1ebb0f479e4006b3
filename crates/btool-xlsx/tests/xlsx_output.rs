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

//! Excel output over the shared fixtures.

use btool_sheet::{Report, ReportConfig};
use btool_test::fixtures::{self, documents};
use btool_xlsx::{to_xlsx_buffer, write_xlsx, ToXlsxConfig, XlsxExportError};

fn report(xml: &str) -> Report {
    Report::build(&fixtures::parse(xml), &ReportConfig::default())
}

#[test]
fn test_all_fixtures_render() {
    for (name, xml) in fixtures::all() {
        let bytes = to_xlsx_buffer(&report(xml), &ToXlsxConfig::default())
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(&bytes[..4], b"PK\x03\x04", "{}", name);
    }
}

#[test]
fn test_without_frozen_panes() {
    let config = ToXlsxConfig {
        freeze_panes: false,
        ..Default::default()
    };
    let bytes = to_xlsx_buffer(&report(documents::MULTI_RUN), &config).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn test_write_xlsx_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    write_xlsx(&report(documents::TWO_SETTINGS), &path, &ToXlsxConfig::default()).unwrap();
    let written = std::fs::read(&path).unwrap();
    assert_eq!(&written[..2], b"PK");
}

#[test]
fn test_write_xlsx_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.xlsx");
    let err = write_xlsx(&report(documents::TWO_SETTINGS), &path, &ToXlsxConfig::default())
        .unwrap_err();
    assert!(matches!(err, XlsxExportError::Io(_)));
}
