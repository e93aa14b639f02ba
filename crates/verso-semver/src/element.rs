//! Pre-release and build identifier elements

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version_parser::FormatError;

/// One dot-separated unit of a pre-release or build identifier.
///
/// The tag is decided once when the piece is parsed: a piece made only of
/// ASCII digits is [`Element::Numeric`], anything else is
/// [`Element::Alphanumeric`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    /// Digit-only identifier, compared numerically
    Numeric(u64),
    /// Identifier containing at least one non-digit, compared by bytes
    Alphanumeric(String),
}

impl Element {
    /// Classify a single piece of a dotted identifier.
    pub fn parse(piece: &str) -> Result<Self, FormatError> {
        if !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()) {
            let value = piece.parse::<u64>().map_err(|_| FormatError::NumberOutOfRange {
                input: piece.to_string(),
                value: piece.to_string(),
            })?;
            Ok(Element::Numeric(value))
        } else {
            Ok(Element::Alphanumeric(piece.to_string()))
        }
    }

    /// Split a dotted identifier into its elements.
    pub(crate) fn parse_list(identifier: &str) -> Result<Vec<Self>, FormatError> {
        identifier.split('.').map(Element::parse).collect()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Element::Numeric(_))
    }

    /// Compare two elements.
    ///
    /// Numeric identifiers always have lower precedence than alphanumeric
    /// ones, whichever side they are on.
    pub fn compare(a: &Element, b: &Element) -> Ordering {
        match (a, b) {
            (Element::Numeric(x), Element::Numeric(y)) => x.cmp(y),
            (Element::Alphanumeric(x), Element::Alphanumeric(y)) => x.as_bytes().cmp(y.as_bytes()),
            (Element::Numeric(_), Element::Alphanumeric(_)) => Ordering::Less,
            (Element::Alphanumeric(_), Element::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        Element::compare(self, other)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Numeric(n) => write!(f, "{}", n),
            Element::Alphanumeric(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Element {
    fn from(value: u64) -> Self {
        Element::Numeric(value)
    }
}

impl FromStr for Element {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::parse(s)
    }
}

impl TryFrom<&str> for Element {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Element::parse(value)
    }
}
