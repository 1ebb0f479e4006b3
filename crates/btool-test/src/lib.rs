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

//! Shared test fixtures and builders for btool crates.
//!
//! # Quick Start
//!
//! ```rust
//! use btool_test::fixtures;
//! use btool_test::ResultsBuilder;
//!
//! // Parse a canned result file
//! let results = fixtures::parse(fixtures::documents::TWO_SETTINGS);
//! assert_eq!(results.projects().len(), 1);
//!
//! // Or build one in code
//! let results = ResultsBuilder::new()
//!     .setting("clasp", "3.3.0", "default")
//!     .instance("suite", "queens", "q8.lp")
//!     .run("default", "q8.lp", 1, &[("time", 7.0)])
//!     .build();
//! assert_eq!(results.projects()[0].runspecs.len(), 1);
//! ```

pub mod fixtures;

pub use fixtures::builders::ResultsBuilder;
