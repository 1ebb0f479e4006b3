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

//! End-to-end report assembly over the shared fixtures.

use btool_core::{MeasureSelection, MeasureValue, ProjectFilter};
use btool_sheet::{
    Cell, ColumnStat, Dialect, NumberFormat, Report, ReportConfig, RowOp, Sheet, SheetKind,
    Style,
};
use btool_test::fixtures::{self, documents};
use btool_test::ResultsBuilder;

fn report(xml: &str) -> Report {
    Report::build(&fixtures::parse(xml), &ReportConfig::default())
}

fn sheet(report: &Report, kind: SheetKind) -> &Sheet {
    report
        .sheet(kind)
        .unwrap_or_else(|| panic!("missing sheet {}", kind))
}

fn excel(sheet: &Sheet, row: usize, col: usize) -> String {
    sheet
        .cell(row, col)
        .content()
        .as_formula()
        .map(|f| f.render(Dialect::Excel))
        .unwrap_or_else(|| panic!("no formula at ({}, {}): {:?}", row, col, sheet.cell(row, col)))
}

fn stat_row(sheet: &Sheet, stat: ColumnStat) -> usize {
    sheet.result_offset() + stat.offset()
}

#[test]
fn test_sheets_in_document_order() {
    let report = report(documents::TWO_SETTINGS);
    let names: Vec<_> = report.sheets().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["Instances", "Merged_Runs", "Classes", "Helper", "Charts"]
    );
}

#[test]
fn test_instances_layout() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.cell(0, 1), &Cell::text("clasp-3.3.0/default"));
    assert_eq!(sheet.cell(0, 3), &Cell::text("clasp-3.3.0/trendy"));
    assert_eq!(sheet.cell(1, 1), &Cell::text("time"));
    assert_eq!(sheet.cell(1, 2), &Cell::text("timeout"));
    assert_eq!(sheet.cell(2, 0), &Cell::text("queens/q8.lp"));
    assert_eq!(sheet.cell(3, 0), &Cell::text("queens/q9.lp"));
    assert_eq!(sheet.data_rows(), 2);
    assert_eq!(sheet.frozen(), Some((2, 1)));

    assert_eq!(sheet.find_column("clasp-3.3.0/trendy", "time"), Some(3));
    assert_eq!(sheet.value(2, 1), 7.0);
    assert_eq!(sheet.value(2, 3), 10.0);
    assert_eq!(sheet.value(3, 3), 8.0);

    for (stat, row) in ColumnStat::ALL.iter().zip(5..) {
        assert_eq!(sheet.cell(row, 0), &Cell::text(stat.label()));
    }
}

#[test]
fn test_row_summary_matches_formula() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);

    let min = sheet.summary_column(RowOp::Min, "time").unwrap();
    let median = sheet.summary_column(RowOp::Median, "time").unwrap();
    let max = sheet.summary_column(RowOp::Max, "time").unwrap();
    assert_eq!(sheet.value(2, min), 7.0);
    assert_eq!(sheet.value(2, median), 8.5);
    assert_eq!(sheet.value(2, max), 10.0);
    assert_eq!(excel(sheet, 2, median), "=MEDIAN($B3,$D3)");
    assert_eq!(sheet.cell(0, min), &Cell::text("min"));
}

#[test]
fn test_column_summary_values() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Sum), 1), 17.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Avg), 1), 8.5);
    let dev = sheet.value(stat_row(sheet, ColumnStat::Dev), 1);
    assert!((dev - 4.5f64.sqrt()).abs() < 1e-12);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Dst), 1), 2.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Best), 1), 1.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Better), 1), 1.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Worse), 1), 1.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Worst), 1), 1.0);
    assert_eq!(excel(sheet, stat_row(sheet, ColumnStat::Sum), 1), "=SUM(B$3:B$4)");
}

#[test]
fn test_row_summary_columns_only_get_moments() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);
    let min = sheet.summary_column(RowOp::Min, "time").unwrap();

    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Sum), min), 15.0);
    assert!(sheet.cell(stat_row(sheet, ColumnStat::Dst), min).is_empty());
    assert!(sheet.cell(stat_row(sheet, ColumnStat::Worst), min).is_empty());
}

#[test]
fn test_time_styling_threshold() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);

    // 7 vs 10: spread 3 exceeds the threshold of 2
    assert_eq!(sheet.cell(2, 1).style(), Style::Best);
    assert_eq!(sheet.cell(2, 3).style(), Style::Worst);
    // 10 vs 8: spread 2 does not
    assert_eq!(sheet.cell(3, 1).style(), Style::None);
    assert_eq!(sheet.cell(3, 3).style(), Style::None);
    // styling leaves the shadow alone
    assert_eq!(sheet.value(2, 1), 7.0);
}

#[test]
fn test_timeout_styling_and_format() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.cell(2, 2).style(), Style::Best);
    assert_eq!(sheet.cell(2, 4).style(), Style::Worst);
    assert_eq!(sheet.number_format(2), NumberFormat::Integer);
    assert_eq!(sheet.number_format(4), NumberFormat::Integer);
    assert_eq!(sheet.number_format(1), NumberFormat::Decimal);
}

#[test]
fn test_class_aggregation() {
    let report = report(documents::TWO_SETTINGS);
    let sheet = sheet(&report, SheetKind::Classes);

    assert_eq!(sheet.cell(2, 0), &Cell::text("queens"));
    assert_eq!(sheet.value(2, 1), 8.5);
    assert_eq!(sheet.value(2, 2), 1.0);
    assert_eq!(excel(sheet, 2, 1), "=AVERAGE(Instances!B3:B4)");
    assert_eq!(excel(sheet, 2, 2), "=SUM(Instances!C3:C4)");
}

#[test]
fn test_merged_runs() {
    let report = report(documents::MULTI_RUN);
    let sheet = sheet(&report, SheetKind::MergedRuns);

    assert_eq!(sheet.cell(0, 0), &Cell::text("Merge criteria:"));
    match sheet.cell(1, 0).content() {
        Cell::Control(control) => assert_eq!(control.default, "median"),
        other => panic!("expected a control, got {:?}", other),
    }
    assert_eq!(sheet.cell(2, 0), &Cell::text("queens/q8.lp"));
    assert_eq!(sheet.value(2, 1), 8.0);
    assert_eq!(sheet.value(3, 1), 21.0);
    assert!(excel(sheet, 2, 1).starts_with("=SWITCH($A$2,\"average\",AVERAGE(Instances!B3:B5)"));
    assert!(excel(sheet, 3, 1).contains("MEDIAN(Instances!B6:B8)"));
}

#[test]
fn test_run_selector_block() {
    let report = report(documents::MULTI_RUN);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.data_rows(), 6);
    assert_eq!(sheet.run_selector(), Some(3));
    assert_eq!(sheet.cell(18, 0), &Cell::text("Select run:"));
    match sheet.cell(19, 0).content() {
        Cell::Control(control) => {
            assert_eq!(control.options, vec!["1", "2", "3"]);
            assert_eq!(control.default, "1");
        }
        other => panic!("expected a control, got {:?}", other),
    }
    assert_eq!(sheet.cell(20, 0), &Cell::text("SUM"));
    // runs 1 of both instances: 7 + 20
    assert_eq!(sheet.value(20, 1), 27.0);
    assert_eq!(
        excel(sheet, 20, 1),
        "=SUM(FILTER(B$3:B$8,MOD(ROW(B$3:B$8)-CHOOSE($A$20,ROW(B$3),ROW(B$4),ROW(B$5)),3)=0))"
    );
}

#[test]
fn test_summary_rows_styled_in_both_blocks() {
    let mut builder = ResultsBuilder::new()
        .setting("clasp", "3.3.0", "fast")
        .setting("clasp", "3.3.0", "slow");
    for inst in ["q1.lp", "q2.lp", "q3.lp"] {
        builder = builder.instance("suite", "queens", inst);
        for run in 1..=2 {
            builder = builder
                .run("fast", inst, run, &[("time", 1.0)])
                .run("slow", inst, run, &[("time", 10.0)]);
        }
    }
    let report = Report::build(&builder.build(), &ReportConfig::default());
    let sheet = sheet(&report, SheetKind::Instances);
    let fast = sheet.find_column("clasp-3.3.0/fast", "time").unwrap();
    let slow = sheet.find_column("clasp-3.3.0/slow", "time").unwrap();
    assert_eq!(sheet.run_selector(), Some(2));

    let all_runs = sheet.result_offset();
    let selected_run = all_runs + 11;
    for (base, rows) in [(all_runs, 6.0), (selected_run, 3.0)] {
        let row = |stat: ColumnStat| base + stat.offset();
        assert_eq!(sheet.value(row(ColumnStat::Best), fast), rows);
        assert_eq!(sheet.value(row(ColumnStat::Worst), slow), rows);

        // lower sums and fewer worst rows win
        for stat in [ColumnStat::Sum, ColumnStat::Avg, ColumnStat::Worse, ColumnStat::Worst] {
            assert_eq!(sheet.cell(row(stat), fast).style(), Style::Best, "{}", stat.label());
            assert_eq!(sheet.cell(row(stat), slow).style(), Style::Worst, "{}", stat.label());
        }
        // more best rows win
        for stat in [ColumnStat::Best, ColumnStat::Better] {
            assert_eq!(sheet.cell(row(stat), fast).style(), Style::Best, "{}", stat.label());
            assert_eq!(sheet.cell(row(stat), slow).style(), Style::Worst, "{}", stat.label());
        }
        // no spread in the deviation
        assert_eq!(sheet.cell(row(ColumnStat::Dev), fast).style(), Style::None);
        assert_eq!(sheet.cell(row(ColumnStat::Dev), slow).style(), Style::None);
    }
}

#[test]
fn test_classes_over_runs() {
    let report = report(documents::MULTI_RUN);
    let sheet = sheet(&report, SheetKind::Classes);
    assert_eq!(sheet.value(2, 1), 14.5);
    assert_eq!(excel(sheet, 2, 1), "=AVERAGE(Instances!B3:B8)");
}

#[test]
fn test_missing_value_counts_as_worst() {
    let report = report(documents::MISSING_VALUES);
    let sheet = sheet(&report, SheetKind::Instances);

    assert!(sheet.cell(3, 1).is_empty());
    assert!(sheet.value(3, 1).is_nan());
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Worst), 1), 2.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Worse), 1), 2.0);
    assert_eq!(sheet.value(stat_row(sheet, ColumnStat::Best), 1), 0.0);

    let min = sheet.summary_column(RowOp::Min, "time").unwrap();
    assert_eq!(sheet.value(3, min), 5.0);
}

/// BETTER and WORSE compare against the row median while BEST and WORST
/// compare against the row extremes. This pins the current behavior; it is
/// documented, not known to be the intended semantics.
#[test]
fn test_median_comparison_asymmetry() {
    let results = ResultsBuilder::new()
        .setting("clasp", "3.3.0", "a")
        .setting("clasp", "3.3.0", "b")
        .setting("clasp", "3.3.0", "c")
        .instance("suite", "queens", "q8.lp")
        .run("a", "q8.lp", 1, &[("time", 1.0)])
        .run("b", "q8.lp", 1, &[("time", 2.0)])
        .run("c", "q8.lp", 1, &[("time", 3.0)])
        .build();
    let report = Report::build(&results, &ReportConfig::default());
    let sheet = sheet(&report, SheetKind::Instances);
    let b = sheet.find_column("clasp-3.3.0/b", "time").unwrap();

    // the median configuration is neither better nor worse, nor best or worst
    for stat in [ColumnStat::Best, ColumnStat::Better, ColumnStat::Worse, ColumnStat::Worst] {
        assert_eq!(sheet.value(stat_row(sheet, stat), b), 0.0, "{}", stat.label());
    }
}

#[test]
fn test_degenerate_column_excluded() {
    let report = report(documents::DEGENERATE);
    let sheet = sheet(&report, SheetKind::Instances);
    let empty = sheet.find_column("clasp-3.3.0/trendy", "time").unwrap();
    let full = sheet.find_column("clasp-3.3.0/default", "time").unwrap();

    assert!(sheet.is_degenerate(empty));
    assert!(!sheet.is_degenerate(full));
    assert!(sheet.cell(stat_row(sheet, ColumnStat::Sum), empty).is_empty());
    assert_eq!(excel(sheet, 2, sheet.summary_column(RowOp::Min, "time").unwrap()), "=MIN($B3)");
}

#[test]
fn test_machine_in_configuration_name() {
    let report = report(documents::MULTI_MACHINE);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.cell(0, 1), &Cell::text("clasp-3.3.0/default (hilbert)"));
    assert_eq!(sheet.cell(0, 3), &Cell::text("clasp-3.3.0/default (zuse)"));
    assert_eq!(sheet.value(2, 1), 9.0);
    assert_eq!(sheet.value(2, 3), 3.0);
}

#[test]
fn test_project_filter() {
    let results = fixtures::parse(documents::TWO_PROJECTS);
    let config = ReportConfig {
        projects: "clasp-trendy".parse::<ProjectFilter>().unwrap(),
        ..ReportConfig::default()
    };
    let report = Report::build(&results, &config);
    let sheet = sheet(&report, SheetKind::Instances);
    assert_eq!(sheet.cell(0, 1), &Cell::text("clasp-3.3.0/trendy"));
    assert_eq!(sheet.value(2, 1), 6.0);
    assert!(sheet.find_column("clasp-3.3.0/default", "time").is_none());
}

#[test]
fn test_all_measures_sorted_by_name() {
    let results = fixtures::parse(documents::TWO_SETTINGS);
    let config = ReportConfig {
        measures: MeasureSelection::all(),
        ..ReportConfig::default()
    };
    let report = Report::build(&results, &config);
    let sheet = sheet(&report, SheetKind::Instances);

    assert_eq!(sheet.cell(1, 1), &Cell::text("status"));
    assert_eq!(sheet.cell(1, 2), &Cell::text("time"));
    assert_eq!(sheet.cell(1, 3), &Cell::text("timeout"));
    assert_eq!(sheet.cell(2, 1), &Cell::text("SAT"));
    // without modes nothing is highlighted
    assert_eq!(sheet.cell(2, 2).style(), Style::None);
}

#[test]
fn test_mixed_column_widens_to_text() {
    let results = ResultsBuilder::new()
        .setting("clasp", "3.3.0", "default")
        .setting("clasp", "3.3.0", "trendy")
        .instance("suite", "queens", "q8.lp")
        .instance("suite", "queens", "q9.lp")
        .run("default", "q8.lp", 1, &[("time", 1.0)])
        .run_values("default", "q9.lp", 1, vec![("time", MeasureValue::Str("n/a".into()))])
        .run("trendy", "q8.lp", 1, &[("time", 2.0)])
        .run("trendy", "q9.lp", 1, &[("time", 3.0)])
        .build();
    let report = Report::build(&results, &ReportConfig::default());
    let sheet = sheet(&report, SheetKind::Instances);

    // one text cell makes the measure textual on the whole sheet
    assert!(sheet.numeric_columns("time").is_empty());
    assert!(sheet.summary_column(RowOp::Min, "time").is_none());
    assert_eq!(sheet.cell(3, 1), &Cell::text("n/a"));
}

#[test]
fn test_charts_and_helper() {
    let report = report(documents::TWO_SETTINGS);
    let charts = sheet(&report, SheetKind::Charts);
    match charts.cell(2, 3).content() {
        Cell::Control(control) => {
            assert_eq!(control.options, vec!["time", "timeout"]);
            assert_eq!(control.default, "time");
        }
        other => panic!("expected a control, got {:?}", other),
    }

    let helper = sheet(&report, SheetKind::Helper);
    assert_eq!(helper.cell(1, 0), &Cell::text("time"));
    assert_eq!(helper.value(1, 1), 1.0);
    assert_eq!(helper.value(2, 1), 2.0);
    assert_eq!(excel(helper, 1, 4), "=VLOOKUP(Charts!$D$3,A2:B3,2,FALSE)");
    assert_eq!(
        helper
            .cell(1, 4)
            .as_formula()
            .map(|f| f.render(Dialect::OpenFormula)),
        Some("of:=VLOOKUP([Charts.$D$3];[.A2:.B3];2;FALSE())".to_string())
    );
    assert_eq!(excel(helper, 1, 7), "=E2+2");
    assert_eq!(helper.value(1, 7), 3.0);
    assert_eq!(excel(helper, 2, 4), "=Instances!B1");

    // values, sorted and running sums of the default configuration's time
    assert_eq!(helper.value(4, 4), 7.0);
    assert_eq!(helper.value(5, 4), 10.0);
    assert_eq!(helper.value(4, 6), 7.0);
    assert_eq!(helper.value(5, 6), 17.0);
    // trendy sorts 10, 8 into 8, 10
    assert_eq!(helper.value(4, 8), 8.0);
    assert_eq!(helper.value(5, 8), 10.0);

    // the Merged_Runs group follows the Instances group
    assert_eq!(excel(helper, 2, 12), "=Merged_Runs!B1");
}

#[test]
fn test_charts_skipped_on_uneven_layout() {
    let results = ResultsBuilder::new()
        .setting("clasp", "3.3.0", "default")
        .setting("clasp", "3.3.0", "trendy")
        .instance("suite", "queens", "q8.lp")
        .run("default", "q8.lp", 1, &[("memory", 5.0), ("time", 1.0)])
        .run("trendy", "q8.lp", 1, &[("time", 2.0)])
        .build();
    let config = ReportConfig {
        measures: MeasureSelection::all(),
        ..ReportConfig::default()
    };
    let report = Report::build(&results, &config);
    assert!(report.sheet(SheetKind::Charts).is_none());
    assert!(report.sheet(SheetKind::Helper).is_none());
    assert!(report.sheet(SheetKind::Instances).is_some());
}

#[test]
fn test_optional_sheets_disabled() {
    let results = fixtures::parse(documents::TWO_SETTINGS);
    let config = ReportConfig {
        merged_runs: false,
        charts: false,
        ..ReportConfig::default()
    };
    let report = Report::build(&results, &config);
    let names: Vec<_> = report.sheets().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Instances", "Classes"]);
}

#[test]
fn test_build_is_idempotent() {
    for (name, xml) in fixtures::all() {
        let results = fixtures::parse(xml);
        let first = Report::build(&results, &ReportConfig::default());
        let second = Report::build(&results, &ReportConfig::default());
        assert_eq!(first, second, "{}", name);
    }
}
