//! Interned vertex identifiers.
//!
//! A document mentions each vertex id many times: on the vertex itself, on
//! every edge that touches it and again in the tree's parent and child links.
//! [`Id`] interns the string once and is `Copy`, so all of those are symbol
//! comparisons.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Process-wide symbol table behind every [`Id`].
///
/// Lock poisoning is ignored; the only mutation is `get_or_intern`.
static SYMBOLS: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_symbols<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut symbols = SYMBOLS
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut symbols)
}

/// A vertex id.
///
/// Ids read from a document and ids assigned by counting share one
/// namespace: `Id::from_index(3)` is the same id as `Id::new("3")`.
///
/// ```
/// use mindgraph_core::identifier::Id;
///
/// let root = Id::new("root");
/// assert_eq!(root, "root");
/// assert_eq!(Id::from_index(0), Id::new("0"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    pub fn new(name: &str) -> Self {
        Self(with_symbols(|symbols| symbols.get_or_intern(name)))
    }

    /// The id given to the `idx`-th vertex of a generated document.
    pub fn from_index(idx: usize) -> Self {
        Self::new(&idx.to_string())
    }

    /// The id's text.
    pub fn to_owned_string(&self) -> String {
        with_symbols(|symbols| symbols.resolve(self.0).map(str::to_owned))
            .unwrap_or_default()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_owned_string())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({:?})", self.to_owned_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_symbols(|symbols| symbols.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

/// Ids travel as plain JSON strings.
impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_owned_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
