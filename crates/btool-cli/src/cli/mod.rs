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

//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use btool_core::{MeasureSelection, ProjectFilter};
use clap::Subcommand;

use crate::commands::{self, ConvOptions, OutputFormat};
use crate::error::CliError;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use btool_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a result file into a spreadsheet
    ///
    /// Tabulates the runs of the selected projects into the Instances,
    /// Merged_Runs, Classes, Helper and Charts sheets. The dialect follows
    /// `--format` or the output extension (.ods, .fods or .xlsx).
    Conv {
        /// Result file (defaults to stdin)
        #[arg(value_name = "RESULTFILE")]
        file: Option<PathBuf>,

        /// Output file path
        #[arg(short, long, default_value = "out.ods")]
        output: PathBuf,

        /// Comma-separated projects to include (defaults to all)
        #[arg(short, long, default_value = "")]
        projects: ProjectFilter,

        /// Comma-separated measures as name[:{t,to,-}] (empty selects all)
        #[arg(short, long, default_value = "time:t,timeout:to")]
        measures: MeasureSelection,

        /// Output dialect (overrides the output extension)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Also export the Instances values as CSV
        #[arg(long, value_name = "CSV")]
        export_values: Option<PathBuf>,

        /// Omit the Merged_Runs sheet
        #[arg(long)]
        no_merged_runs: bool,

        /// Omit the Helper and Charts sheets
        #[arg(long)]
        no_charts: bool,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, parsing or writing fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Conv {
                file,
                output,
                projects,
                measures,
                format,
                export_values,
                no_merged_runs,
                no_charts,
            } => commands::conv(&ConvOptions {
                input: file,
                output,
                projects,
                measures,
                format,
                export_values,
                merged_runs: !no_merged_runs,
                charts: !no_charts,
            }),
        }
    }
}
