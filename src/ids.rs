//! Strongly-typed ids. The backend issues positive integer ids for categories.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category id. Validated on construction via `new`/`parse`/`from_str`; the
/// backend never issues ids below 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(n: i64) -> Result<Self, String> {
        if n < 1 {
            return Err(format!("Invalid category id: {}", n));
        }
        Ok(Self(n))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        Self::from_str(s.as_ref())
    }
}

impl FromStr for CategoryId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|e| format!("Invalid category id: {}", e))?;
        Self::new(n)
    }
}

impl From<CategoryId> for i64 {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CategoryId {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(de)?;
        Self::new(n).map_err(serde::de::Error::custom)
    }
}
