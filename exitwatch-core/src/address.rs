//! Exit node addresses and the ordered result set
//!
//! Addresses are opaque tokens taken verbatim from the listing. Nothing here
//! parses, validates or deduplicates them.

use std::fmt;

/// A single exit relay address as it appeared in the listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExitNodeAddress(String);

impl ExitNodeAddress {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExitNodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExitNodeAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExitNodeAddress {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ExitNodeAddress {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Ordered addresses in listing order, duplicates included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    addresses: Vec<ExitNodeAddress>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            addresses: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, address: ExitNodeAddress) {
        self.addresses.push(address);
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExitNodeAddress> {
        self.addresses.iter()
    }
}

impl FromIterator<ExitNodeAddress> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ExitNodeAddress>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = ExitNodeAddress;
    type IntoIter = std::vec::IntoIter<ExitNodeAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ExitNodeAddress;
    type IntoIter = std::slice::Iter<'a, ExitNodeAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

/// Renders as a bracketed list of quoted addresses, e.g. `["10.0.0.1", "10.0.0.2"]`
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, address) in self.addresses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", address.as_str())?;
        }
        f.write_str("]")
    }
}
