use std::{collections::BTreeMap, fmt::Display};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{ser::SerializeMap, Serializer};

/// 64-bit integers are carried as strings in protobuf JSON.
pub fn as_string<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn as_base64<T: AsRef<[u8]>, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(value.as_ref()))
}

pub fn as_base64_map<S: Serializer>(value: &BTreeMap<u64, Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(value.len()))?;
    for (key, bytes) in value {
        map.serialize_entry(&key.to_string(), &STANDARD.encode(bytes))?;
    }
    map.end()
}
