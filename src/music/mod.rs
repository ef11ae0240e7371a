//! Music as an ordered run of note names.
//!
//! Instruments never interpret the notes themselves. They ask the music for
//! its prepared form and frame that text in their own way.

pub mod tunings;

use std::fmt;

/// An immutable, ordered sequence of note names.
///
/// No validation is performed: empty names and repeated notes are kept
/// exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Music {
    notes: Vec<String>,
}

impl Music {
    /// Create music from any sequence of note names.
    pub fn new<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            notes: notes.into_iter().map(Into::into).collect(),
        }
    }

    /// The notes joined by single spaces, or `""` when there are none.
    pub fn prepared(&self) -> String {
        self.notes.join(" ")
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl From<Vec<String>> for Music {
    fn from(notes: Vec<String>) -> Self {
        Self { notes }
    }
}

impl<S: Into<String>> FromIterator<S> for Music {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Music {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prepared())
    }
}
