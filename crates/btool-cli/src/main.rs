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

//! btool Command Line Interface

use std::process::ExitCode;

use btool_cli::cli::Commands;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// btool - benchmark result tabulation
///
/// # Examples
///
/// ```bash
/// # Tabulate all projects into an OpenDocument spreadsheet
/// btool conv results.xml -o report.ods
///
/// # Only the time measure, one project, as an Excel workbook
/// btool conv results.xml -p clasp-big -m time:t -o report.xlsx
/// ```
#[derive(Parser)]
#[command(name = "btool")]
#[command(author, version, about = "btool - benchmark result tabulation", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "btool=debug" } else { "btool=info" };
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
