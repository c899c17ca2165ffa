use strum::EnumMessage;
use strum_macros::{EnumMessage, IntoStaticStr};
use thiserror::Error;

/// Errors raised by the sequence operators themselves.
///
/// Panics raised by caller-supplied closures are not caught; they unwind
/// through whichever call pulled the element that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumMessage, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Index out of range.
    ///
    /// `nth` was asked for a position the sequence does not have and no
    /// `not_found` value was supplied. Negative positions never wrap around,
    /// so they are always out of range.
    #[error("index {index} out of range for {kind}")]
    OutOfRange { index: isize, kind: &'static str },

    /// Unsupported configuration.
    ///
    /// The operator does not implement the requested parameter combination.
    /// It is reported instead of approximating the result.
    #[error("unsupported configuration: {what}")]
    Unsupported { what: &'static str },

    /// Not a sequence.
    ///
    /// Positional access was requested on a value that does not expose
    /// ordered iteration.
    #[error("{kind} is not a sequence")]
    NotASequence { kind: &'static str },
}

impl Error {
    /// The variant name, stable across releases.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }

    pub(crate) fn out_of_range(index: isize, kind: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(index, kind, "nth: index out of range");
        Error::OutOfRange { index, kind }
    }

    pub(crate) fn unsupported(what: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(what, "unsupported operator configuration");
        Error::Unsupported { what }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
