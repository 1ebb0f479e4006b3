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

//! Measure selection and project filtering options.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{CoreError, Result};
use crate::model::{ProjectId, Results};

/// How cells of a measure are compared for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// Time-like (`t`): differences of at most 2 are not highlighted.
    Time,
    /// Timeout-like (`to`): any difference is highlighted.
    Timeout,
    /// No highlighting (`-` or no mode given).
    #[default]
    Plain,
}

impl MeasureMode {
    /// Minimum `max - min` spread a row must exceed before it is highlighted.
    pub fn threshold(self) -> Option<f64> {
        match self {
            MeasureMode::Time => Some(2.0),
            MeasureMode::Timeout => Some(0.0),
            MeasureMode::Plain => None,
        }
    }
}

impl FromStr for MeasureMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "t" => Ok(MeasureMode::Time),
            "to" => Ok(MeasureMode::Timeout),
            "-" => Ok(MeasureMode::Plain),
            other => Err(format!("unknown mode '{}', expected one of t, to, -", other)),
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureMode::Time => write!(f, "t"),
            MeasureMode::Timeout => write!(f, "to"),
            MeasureMode::Plain => write!(f, "-"),
        }
    }
}

/// A selected measure with its highlighting mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    pub name: String,
    pub mode: MeasureMode,
}

impl FromStr for MeasureSpec {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, mode) = match s.split_once(':') {
            Some((name, mode)) => (name, Some(mode)),
            None => (s, None),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidMeasure {
                spec: s.to_string(),
                reason: "empty measure name".to_string(),
            });
        }
        let mode = match mode {
            Some(mode) => mode
                .trim()
                .parse()
                .map_err(|reason| CoreError::InvalidMeasure {
                    spec: s.to_string(),
                    reason,
                })?,
            None => MeasureMode::Plain,
        };
        Ok(Self {
            name: name.to_string(),
            mode,
        })
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.mode)
    }
}

/// Ordered list of measures to tabulate.
///
/// An empty selection means "every measure a run reports".
///
/// # Examples
///
/// ```
/// use btool_core::{MeasureMode, MeasureSelection};
///
/// let selection: MeasureSelection = "time:t,models,timeout:to".parse().unwrap();
/// assert_eq!(selection.len(), 3);
/// assert_eq!(selection.mode("models"), MeasureMode::Plain);
/// assert_eq!(selection.mode("timeout"), MeasureMode::Timeout);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSelection {
    specs: Vec<MeasureSpec>,
}

impl MeasureSelection {
    /// Selection that accepts every measure.
    pub fn all() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn new(specs: Vec<MeasureSpec>) -> Self {
        Self { specs }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasureSpec> {
        self.specs.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.iter().any(|spec| spec.name == name)
    }

    /// Highlighting mode of `name`, [`MeasureMode::Plain`] if not selected.
    pub fn mode(&self, name: &str) -> MeasureMode {
        self.specs
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.mode)
            .unwrap_or_default()
    }
}

impl Default for MeasureSelection {
    fn default() -> Self {
        Self {
            specs: vec![
                MeasureSpec {
                    name: "time".to_string(),
                    mode: MeasureMode::Time,
                },
                MeasureSpec {
                    name: "timeout".to_string(),
                    mode: MeasureMode::Timeout,
                },
            ],
        }
    }
}

impl FromStr for MeasureSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::all());
        }
        let specs = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<MeasureSpec>>>()?;
        Ok(Self { specs })
    }
}

/// Formats as the `name:mode,...` list accepted by [`FromStr`].
impl fmt::Display for MeasureSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}

/// Set of project names to include; empty means all projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectFilter {
    names: BTreeSet<String>,
}

impl ProjectFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Projects of `results` that pass the filter, in declaration order.
    ///
    /// Names that match no project are reported and otherwise ignored.
    pub fn select(&self, results: &Results) -> Vec<ProjectId> {
        for name in &self.names {
            if results.find_project(name).is_none() {
                warn!(project = %name, "selected project not found in results");
            }
        }
        results
            .project_ids()
            .filter(|id| self.is_all() || self.names.contains(&results.project(*id).name))
            .collect()
    }
}

impl FromStr for ProjectFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            names: s
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = MeasureSelection::default();
        let names: Vec<_> = selection.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["time", "timeout"]);
        assert_eq!(selection.mode("time"), MeasureMode::Time);
        assert_eq!(selection.mode("timeout"), MeasureMode::Timeout);
    }

    #[test]
    fn test_parse_modes() {
        let selection: MeasureSelection = "a:t,b:to,c:-,d".parse().unwrap();
        assert_eq!(selection.mode("a"), MeasureMode::Time);
        assert_eq!(selection.mode("b"), MeasureMode::Timeout);
        assert_eq!(selection.mode("c"), MeasureMode::Plain);
        assert_eq!(selection.mode("d"), MeasureMode::Plain);
        assert_eq!(selection.mode("unknown"), MeasureMode::Plain);
    }

    #[test]
    fn test_parse_empty_is_all() {
        let selection: MeasureSelection = "".parse().unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = "time:t,:to".parse::<MeasureSelection>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMeasure { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "time:fast".parse::<MeasureSelection>().unwrap_err();
        assert!(err.to_string().contains("unknown mode 'fast'"));
    }

    #[test]
    fn test_display_matches_parse_syntax() {
        assert_eq!(MeasureSelection::default().to_string(), "time:t,timeout:to");
        let selection: MeasureSelection = "models, time:t".parse().unwrap();
        assert_eq!(selection.to_string(), "models:-,time:t");
        assert_eq!(MeasureSelection::all().to_string(), "");
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(MeasureMode::Time.threshold(), Some(2.0));
        assert_eq!(MeasureMode::Timeout.threshold(), Some(0.0));
        assert_eq!(MeasureMode::Plain.threshold(), None);
    }

    #[test]
    fn test_project_filter() {
        let mut results = Results::new();
        let a = results.add_project("alpha", "job");
        let _b = results.add_project("beta", "job");
        let c = results.add_project("gamma", "job");

        let all = ProjectFilter::all();
        assert_eq!(all.select(&results).len(), 3);

        let filter: ProjectFilter = " gamma, alpha,,missing".parse().unwrap();
        assert_eq!(filter.select(&results), vec![a, c]);
    }
}
