// The backend is not strict about JSON types: ids may be numbers
// or strings and aggregates may arrive as numeric strings or null.

use serde::{de::Error as _, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        Lenient::Int(v) => Ok(v.to_string()),
        Lenient::Float(v) => Ok(v.to_string()),
        Lenient::Text(v) => Ok(v),
        Lenient::Null(()) => Err(D::Error::custom("missing id")),
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        #[allow(clippy::cast_precision_loss)]
        Lenient::Int(v) => Ok(v as f64),
        Lenient::Float(v) => Ok(v),
        Lenient::Text(v) => v
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid number '{v}'"))),
        Lenient::Null(()) => Ok(0.0),
    }
}

pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        Lenient::Int(v) => u64::try_from(v).map_err(D::Error::custom),
        Lenient::Float(v) => Err(D::Error::custom(format!("invalid count {v}"))),
        Lenient::Text(v) => v
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid count '{v}'"))),
        Lenient::Null(()) => Ok(0),
    }
}
