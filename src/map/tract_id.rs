use std::{borrow::Borrow, fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable key for a census tract.
/// Keeps the original GEOID text (with leading zeros) without repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TractId(Arc<str>); // e.g., "24003751200"

impl TractId {
    pub fn new(id: &str) -> Self { Self(Arc::from(id)) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for TractId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for TractId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl Borrow<str> for TractId {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for TractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl Serialize for TractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TractId::from)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn equality_is_by_text() {
        assert_eq!(TractId::new("24003751200"), TractId::from(String::from("24003751200")));
        assert_ne!(TractId::new("24003751200"), TractId::new("4003751200"));
    }

    #[test]
    fn leading_zeros_are_preserved() {
        let id = TractId::new("01001020100");
        assert_eq!(id.to_string(), "01001020100");
        assert_eq!(id.as_str().len(), 11);
    }

    #[test]
    fn map_lookup_by_str() {
        let map = HashMap::from([(TractId::new("a"), 1), (TractId::new("b"), 2)]);
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn serde_as_plain_string() {
        let json = serde_json::to_string(&TractId::new("007")).unwrap();
        assert_eq!(json, "\"007\"");
        let back: TractId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TractId::new("007"));
    }
}
