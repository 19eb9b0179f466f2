use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compact namespaced identifier (`PREFIX:LOCAL`) naming a term, reaction or
/// chemical across the ontology graphs.
///
/// Identifiers are opaque tokens compared by value, case-sensitively. No
/// shape validation is performed: an unknown or malformed identifier simply
/// resolves to nothing when queried against an adapter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curie {
    value: String,
}

impl Curie {
    /// Constructs a new identifier from the supplied text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the namespace prefix, the text before the first `:`.
    ///
    /// Identifiers without a separator are their own prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.value
            .split_once(':')
            .map_or(self.value.as_str(), |(prefix, _)| prefix)
    }
}

impl Display for Curie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Curie {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Curie {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Curie {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Curie;

    #[test]
    fn exposes_text_and_prefix() {
        let id = Curie::new("GO:0008446");
        assert_eq!(id.as_str(), "GO:0008446");
        assert_eq!(id.prefix(), "GO");
        assert_eq!(id.to_string(), "GO:0008446");
    }

    #[test]
    fn prefix_of_separator_free_text_is_the_text() {
        assert_eq!(Curie::new("water").prefix(), "water");
    }

    #[test]
    fn compares_case_sensitively_by_value() {
        assert_eq!(Curie::new("RHEA:23820"), Curie::new("RHEA:23820"));
        assert_ne!(Curie::new("RHEA:23820"), Curie::new("rhea:23820"));
    }

    #[test]
    fn orders_lexicographically() {
        let mut ids = vec![Curie::new("CHEBI:57964"), Curie::new("CHEBI:15377")];
        ids.sort();
        assert_eq!(ids[0], Curie::new("CHEBI:15377"));
    }
}
