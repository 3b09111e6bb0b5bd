//! Serde helpers for insertion-ordered string maps.
//!
//! Configuration documents are JSON objects whose key order is significant:
//! it decides which state answers an event first. These helpers (de)serialize
//! a `Vec<(String, V)>` as a map while keeping document order.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

#[allow(clippy::ptr_arg)]
pub fn serialize<V, S>(entries: &Vec<(String, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

pub fn deserialize<'de, V, D>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

struct OrderedVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OrderedVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = Vec<(String, V)>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            upsert(&mut entries, key, value);
        }
        Ok(entries)
    }
}

/// Insert or replace `key`, keeping the position of an existing entry.
/// Returns the replaced value, if any.
pub(crate) fn upsert<V>(entries: &mut Vec<(String, V)>, key: String, value: V) -> Option<V> {
    match entries.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => Some(std::mem::replace(slot, value)),
        None => {
            entries.push((key, value));
            None
        }
    }
}
