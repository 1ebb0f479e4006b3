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

//! Result files the reader must reject.

/// Invalid documents as (name, xml) pairs.
pub fn invalid_results() -> Vec<(&'static str, &'static str)> {
    vec![
        ("mismatched_end_tag", r#"<result><benchmark name="b"></result>"#),
        ("missing_machine_name", r#"<result><machine cpu="c" memory="1"/></result>"#),
        (
            "setting_outside_system",
            r#"<result><setting name="s" cmdline=""/></result>"#,
        ),
        (
            "unknown_machine",
            r#"<result>
  <system name="s" version="1" measures="m" config="c"><setting name="d" cmdline=""/></system>
  <benchmark name="b"/>
  <project name="p" job="j">
    <runspec machine="nope" system="s" version="1" benchmark="b" setting="d"/>
  </project>
</result>"#,
        ),
        (
            "bad_timeout",
            r#"<result><seqjob name="j" timeout="1:2:3:4" runs="1" parallel="1"/></result>"#,
        ),
        (
            "measure_outside_run",
            r#"<result><measure name="time" type="float" val="1"/></result>"#,
        ),
    ]
}
