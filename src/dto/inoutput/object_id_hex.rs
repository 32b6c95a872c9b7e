//!
//! Serde helpers that keep ObjectId as 24 character hex string
//! in JSON instead of extended JSON `{ "$oid": ... }` documents
//!

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ObjectId, D::Error> {
    let hex = String::deserialize(d)?;
    ObjectId::parse_str(hex).map_err(serde::de::Error::custom)
}

pub mod option {
    use bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ObjectId>, D::Error> {
        let hex = Option::<String>::deserialize(d)?;
        hex.map(|hex| ObjectId::parse_str(hex).map_err(serde::de::Error::custom))
            .transpose()
    }
}
