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

//! Cell content and highlighting tags.

use crate::formula::Formula;

/// Highlighting tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    Best,
    Worst,
    /// Interactive control cells.
    Input,
    #[default]
    None,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Best, Style::Worst, Style::Input, Style::None];

    /// Background color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Style::Best => "#00ff00",
            Style::Worst => "#ff0000",
            Style::Input => "#ffcc99",
            Style::None => "#ffffff",
        }
    }

    /// Background color as a packed RGB integer.
    pub fn rgb(self) -> u32 {
        match self {
            Style::Best => 0x00FF00,
            Style::Worst => 0xFF0000,
            Style::Input => 0xFFCC99,
            Style::None => 0xFFFFFF,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Best => "best",
            Style::Worst => "worst",
            Style::Input => "input",
            Style::None => "none",
        }
    }
}

/// Dropdown list control with a preselected value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    pub options: Vec<String>,
    pub default: String,
    /// Prompt shown when the cell is selected.
    pub message: String,
}

impl Control {
    pub fn new<I, S>(options: I, default: impl Into<String>, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default: default.into(),
            message: message.into(),
        }
    }

    /// Numeric view of the default, for controls over numbers.
    pub fn default_number(&self) -> Option<f64> {
        self.default.parse().ok()
    }
}

/// Content of one spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Float(f64),
    Text(String),
    Bool(bool),
    Formula(Formula),
    Control(Control),
    Styled(Box<Cell>, Style),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content(), Cell::Empty)
    }

    /// The cell without its highlighting tag.
    pub fn content(&self) -> &Cell {
        match self {
            Cell::Styled(inner, _) => inner.content(),
            other => other,
        }
    }

    /// Effective highlighting; controls are always tagged as input.
    pub fn style(&self) -> Style {
        match self {
            Cell::Styled(_, style) => *style,
            Cell::Control(_) => Style::Input,
            _ => Style::None,
        }
    }

    /// Replaces the highlighting tag, keeping the content.
    pub fn with_style(self, style: Style) -> Cell {
        match self {
            Cell::Styled(inner, _) => Cell::Styled(inner, style),
            other => Cell::Styled(Box::new(other), style),
        }
    }

    pub fn as_formula(&self) -> Option<&Formula> {
        match self.content() {
            Cell::Formula(formula) => Some(formula),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Expr;

    #[test]
    fn test_palette() {
        assert_eq!(Style::Best.color(), "#00ff00");
        assert_eq!(Style::Worst.color(), "#ff0000");
        assert_eq!(Style::Input.color(), "#ffcc99");
        assert_eq!(Style::None.color(), "#ffffff");
        assert_eq!(Style::Input.rgb(), 0xFFCC99);
    }

    #[test]
    fn test_restyle_does_not_nest() {
        let cell = Cell::Float(1.0).with_style(Style::Best).with_style(Style::Worst);
        assert_eq!(cell, Cell::Styled(Box::new(Cell::Float(1.0)), Style::Worst));
        assert_eq!(cell.content(), &Cell::Float(1.0));
    }

    #[test]
    fn test_control_is_input() {
        let control = Cell::Control(Control::new(["1", "2"], "1", "Select run number"));
        assert_eq!(control.style(), Style::Input);
        if let Cell::Control(c) = control.content() {
            assert_eq!(c.default_number(), Some(1.0));
        }
    }

    #[test]
    fn test_as_formula_sees_through_style() {
        let cell = Cell::Formula(Formula::new(Expr::number(1.0))).with_style(Style::Best);
        assert!(cell.as_formula().is_some());
        assert!(!cell.is_empty());
        assert!(Cell::Empty.is_empty());
    }
}
