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

//! Formula expressions and their two textual dialects.
//!
//! Formulas are built as a small expression tree and only turned into text
//! by [`Formula::render`]. The tree carries no dialect information, so one
//! report can be written as OpenDocument or as Office Open XML without
//! re-synthesizing anything.
//!
//! | construct          | [`Dialect::OpenFormula`]     | [`Dialect::Excel`]      |
//! |--------------------|------------------------------|-------------------------|
//! | prefix             | `of:=`                       | `=`                     |
//! | same-sheet range   | `[.B3:.B4]`                  | `B3:B4`                 |
//! | cross-sheet range  | `[Instances.B3:Instances.B4]`| `Instances!B3:B4`       |
//! | argument separator | `;`                          | `,`                     |
//! | boolean literal    | `FALSE()`                    | `FALSE`                 |

use std::fmt::Write;
use std::ops;

use crate::address::{CellRef, SheetKind};

/// Target formula syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// OpenFormula as stored in OpenDocument spreadsheets.
    OpenFormula,
    /// Formula syntax of Office Open XML workbooks.
    Excel,
}

impl Dialect {
    fn prefix(self) -> &'static str {
        match self {
            Dialect::OpenFormula => "of:=",
            Dialect::Excel => "=",
        }
    }

    fn separator(self) -> char {
        match self {
            Dialect::OpenFormula => ';',
            Dialect::Excel => ',',
        }
    }
}

/// Binary operators used by the synthesized formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Pow,
    Eq,
    Lt,
    Gt,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Pow => "^",
            BinOp::Eq => "=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
        }
    }
}

/// Formula expression tree.
///
/// Binary operators render without implicit parentheses; use
/// [`Expr::group`] where the intended grouping differs from left-to-right
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Ref {
        sheet: Option<SheetKind>,
        cell: CellRef,
    },
    Range {
        sheet: Option<SheetKind>,
        start: CellRef,
        end: CellRef,
    },
    Number(f64),
    Text(String),
    Bool(bool),
    /// Omitted optional argument.
    Omitted,
    Call(String, Vec<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Group(Box<Expr>),
}

impl Expr {
    pub fn cell(cell: CellRef) -> Self {
        Expr::Ref { sheet: None, cell }
    }

    pub fn range(start: CellRef, end: CellRef) -> Self {
        Expr::Range {
            sheet: None,
            start,
            end,
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Expr::Text(value.into())
    }

    pub fn call(name: &str, args: Vec<Expr>) -> Self {
        Expr::Call(name.to_string(), args)
    }

    /// Qualifies a reference or range with a sheet; other expressions are
    /// returned unchanged.
    pub fn on(self, kind: SheetKind) -> Self {
        match self {
            Expr::Ref { cell, .. } => Expr::Ref {
                sheet: Some(kind),
                cell,
            },
            Expr::Range { start, end, .. } => Expr::Range {
                sheet: Some(kind),
                start,
                end,
            },
            other => other,
        }
    }

    pub fn group(self) -> Self {
        Expr::Group(Box::new(self))
    }

    pub fn pow(self, rhs: Expr) -> Self {
        Expr::Binary(BinOp::Pow, Box::new(self), Box::new(rhs))
    }

    pub fn equals(self, rhs: Expr) -> Self {
        Expr::Binary(BinOp::Eq, Box::new(self), Box::new(rhs))
    }

    pub fn less_than(self, rhs: Expr) -> Self {
        Expr::Binary(BinOp::Lt, Box::new(self), Box::new(rhs))
    }

    pub fn greater_than(self, rhs: Expr) -> Self {
        Expr::Binary(BinOp::Gt, Box::new(self), Box::new(rhs))
    }

    fn write(&self, out: &mut String, dialect: Dialect) {
        match self {
            Expr::Ref { sheet, cell } => match dialect {
                Dialect::OpenFormula => {
                    let _ = write!(out, "[{}]", open_formula_cell(*sheet, cell));
                }
                Dialect::Excel => {
                    if let Some(sheet) = sheet {
                        let _ = write!(out, "{}!", sheet.name());
                    }
                    let _ = write!(out, "{}", cell);
                }
            },
            Expr::Range { sheet, start, end } => match dialect {
                Dialect::OpenFormula => {
                    let _ = write!(
                        out,
                        "[{}:{}]",
                        open_formula_cell(*sheet, start),
                        open_formula_cell(*sheet, end)
                    );
                }
                Dialect::Excel => {
                    if let Some(sheet) = sheet {
                        let _ = write!(out, "{}!", sheet.name());
                    }
                    let _ = write!(out, "{}:{}", start, end);
                }
            },
            Expr::Number(value) => out.push_str(&format_number(*value)),
            Expr::Text(text) => {
                out.push('"');
                out.push_str(&text.replace('"', "\"\""));
                out.push('"');
            }
            Expr::Bool(value) => {
                out.push_str(if *value { "TRUE" } else { "FALSE" });
                if dialect == Dialect::OpenFormula {
                    out.push_str("()");
                }
            }
            Expr::Omitted => {}
            Expr::Call(name, args) => {
                out.push_str(name);
                out.push('(');
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        out.push(dialect.separator());
                    }
                    arg.write(out, dialect);
                }
                out.push(')');
            }
            Expr::Binary(op, lhs, rhs) => {
                lhs.write(out, dialect);
                out.push_str(op.symbol());
                rhs.write(out, dialect);
            }
            Expr::Neg(inner) => {
                out.push('-');
                inner.write(out, dialect);
            }
            Expr::Group(inner) => {
                out.push('(');
                inner.write(out, dialect);
                out.push(')');
            }
        }
    }
}

fn open_formula_cell(sheet: Option<SheetKind>, cell: &CellRef) -> String {
    match sheet {
        Some(sheet) => format!("{}.{}", sheet.name(), cell),
        None => format!(".{}", cell),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Add, Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Sub, Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Mul, Box::new(self), Box::new(rhs))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

/// A complete formula.
///
/// # Examples
///
/// ```
/// use btool_sheet::{CellRef, Dialect, Expr, Formula};
///
/// let sum = Formula::new(Expr::call(
///     "SUM",
///     vec![Expr::range(CellRef::new(0, 22).fix_col(), CellRef::new(26, 3).fix_row())],
/// ));
/// assert_eq!(sum.render(Dialect::OpenFormula), "of:=SUM([.$A23:.AA$4])");
/// assert_eq!(sum.render(Dialect::Excel), "=SUM($A23:AA$4)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Formula text including the dialect prefix.
    pub fn render(&self, dialect: Dialect) -> String {
        let mut out = String::from(dialect.prefix());
        self.expr.write(&mut out, dialect);
        out
    }
}

impl From<Expr> for Formula {
    fn from(expr: Expr) -> Self {
        Formula::new(expr)
    }
}
