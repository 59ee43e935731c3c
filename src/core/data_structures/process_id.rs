/*!
 * Process Identifier
 * Length-checked, inline-optimized process names
 */

use crate::core::limits::MAX_PROCESS_ID_LEN;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons an identifier is refused
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessIdError {
    #[error("process id is empty")]
    #[diagnostic(code(process_id::empty), help("Name the process, e.g. P1."))]
    Empty,

    #[error("process id is {len} bytes, longer than the {max} byte limit")]
    #[diagnostic(
        code(process_id::too_long),
        help("Identifiers are rejected rather than truncated. Use a shorter name.")
    )]
    TooLong { len: usize, max: usize },

    #[error("process id contains whitespace")]
    #[diagnostic(code(process_id::whitespace))]
    ContainsWhitespace,
}

/// Name of a process owning memory blocks
///
/// Short names (≤23 bytes, the common case) are stored inline without heap
/// allocation. Identifiers longer than [`MAX_PROCESS_ID_LEN`] are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct ProcessId {
    inner: SmartString,
}

impl ProcessId {
    /// Validate and build an identifier
    pub fn new(name: &str) -> Result<Self, ProcessIdError> {
        if name.is_empty() {
            return Err(ProcessIdError::Empty);
        }
        if name.len() > MAX_PROCESS_ID_LEN {
            return Err(ProcessIdError::TooLong {
                len: name.len(),
                max: MAX_PROCESS_ID_LEN,
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ProcessIdError::ContainsWhitespace);
        }
        Ok(Self {
            inner: SmartString::from(name),
        })
    }

    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if the name is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always false for a constructed identifier
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromStr for ProcessId {
    type Err = ProcessIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProcessId {
    type Error = ProcessIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<&str> for ProcessId {
    type Error = ProcessIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProcessId> for String {
    #[inline]
    fn from(id: ProcessId) -> Self {
        id.inner.into()
    }
}

impl AsRef<str> for ProcessId {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for ProcessId {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ProcessId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProcessId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
