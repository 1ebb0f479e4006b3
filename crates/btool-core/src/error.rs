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

//! Error types for reading benchmark results.

use thiserror::Error;

/// Errors raised while reading a result file or parsing selection options.
///
/// # Examples
///
/// ```
/// use btool_core::CoreError;
///
/// let err = CoreError::MissingAttribute {
///     element: "machine".to_string(),
///     attribute: "cpu".to_string(),
/// };
/// assert_eq!(err.to_string(), "Missing attribute 'cpu' on <machine>");
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed XML.
    #[error("XML parse error at byte {position}: {message}")]
    Xml {
        /// Byte offset reported by the reader.
        position: usize,
        /// Underlying parser message.
        message: String,
    },

    /// A required attribute is absent.
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// An attribute is present but cannot be interpreted.
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}>: {reason}")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A runspec or result element references an undeclared entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use btool_core::CoreError;
    ///
    /// let err = CoreError::UnknownReference {
    ///     element: "runspec".to_string(),
    ///     kind: "machine".to_string(),
    ///     name: "zuse".to_string(),
    /// };
    /// assert!(err.to_string().contains("Unknown machine 'zuse'"));
    /// ```
    #[error("Unknown {kind} '{name}' referenced from <{element}>")]
    UnknownReference {
        /// Referencing element.
        element: String,
        /// Kind of the missing entity.
        kind: String,
        /// Name or id that failed to resolve.
        name: String,
    },

    /// An element appeared outside of its required parent.
    #[error("<{element}> must appear inside <{parent}>")]
    Misplaced {
        /// Element name.
        element: String,
        /// Expected enclosing element.
        parent: String,
    },

    /// A measure selection entry could not be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use btool_core::CoreError;
    ///
    /// let err = CoreError::InvalidMeasure {
    ///     spec: ":t".to_string(),
    ///     reason: "empty measure name".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid measure ':t': empty measure name");
    /// ```
    #[error("Invalid measure '{spec}': {reason}")]
    InvalidMeasure {
        /// Offending selection entry.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A `[[h:]m:]s` time value could not be parsed.
    #[error("Invalid time '{0}', expected [[h:]m:]s")]
    InvalidTime(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub(crate) fn missing(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn invalid(
        element: &str,
        attribute: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(element: &str, kind: &str, name: impl Into<String>) -> Self {
        Self::UnknownReference {
            element: element.to_string(),
            kind: kind.to_string(),
            name: name.into(),
        }
    }

    pub(crate) fn misplaced(element: &str, parent: &str) -> Self {
        Self::Misplaced {
            element: element.to_string(),
            parent: parent.to_string(),
        }
    }
}
