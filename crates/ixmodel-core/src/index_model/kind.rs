use serde::Serialize;
use std::fmt;

/// Broad category of an index, as shown to users.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Geospatial,
    Hashed,
    Text,
    Regular,
}

impl IndexKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexKind::Geospatial => "geospatial",
            IndexKind::Hashed => "hashed",
            IndexKind::Text => "text",
            IndexKind::Regular => "regular",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Compound,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Compound => "compound",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral property of an index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum IndexProperty {
    #[serde(rename = "unique")]
    Unique,

    #[serde(rename = "sparse")]
    Sparse,

    #[serde(rename = "partial")]
    Partial,

    #[serde(rename = "ttl")]
    Ttl,

    #[serde(rename = "isCollation")]
    Collation,
}

impl IndexProperty {
    pub const ALL: [IndexProperty; 5] = [
        IndexProperty::Unique,
        IndexProperty::Sparse,
        IndexProperty::Partial,
        IndexProperty::Ttl,
        IndexProperty::Collation,
    ];

    /// Display rank; lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            IndexProperty::Unique => 1,
            IndexProperty::Sparse => 2,
            IndexProperty::Partial => 3,
            IndexProperty::Ttl => 4,
            IndexProperty::Collation => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexProperty::Unique => "unique",
            IndexProperty::Sparse => "sparse",
            IndexProperty::Partial => "partial",
            IndexProperty::Ttl => "ttl",
            IndexProperty::Collation => "isCollation",
        }
    }
}

impl fmt::Display for IndexProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
