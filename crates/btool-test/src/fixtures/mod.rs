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

//! Canned result files, builders and invalid inputs.

use btool_core::{parse_results, Results};

pub mod builders;
pub mod documents;
pub mod errors;

/// Parses a fixture, panicking with the fixture's error on failure.
pub fn parse(xml: &str) -> Results {
    match parse_results(xml) {
        Ok(results) => results,
        Err(err) => panic!("fixture does not parse: {}", err),
    }
}

/// All valid fixture documents as (name, xml) pairs.
pub fn all() -> Vec<(&'static str, &'static str)> {
    vec![
        ("two_settings", documents::TWO_SETTINGS),
        ("multi_run", documents::MULTI_RUN),
        ("multi_machine", documents::MULTI_MACHINE),
        ("missing_values", documents::MISSING_VALUES),
        ("degenerate", documents::DEGENERATE),
        ("two_projects", documents::TWO_PROJECTS),
    ]
}
