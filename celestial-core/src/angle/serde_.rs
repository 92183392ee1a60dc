use super::{parse_angular_input, AngularInput, AngularQuantity};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Accepts `0.5`, `"30 arcmin"` or `{"magnitude": 30.0, "unit": "arcminute"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputRepr {
    Bare(f64),
    Text(String),
    Quantity(AngularQuantity),
}

impl Serialize for AngularInput {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            AngularInput::Bare(v) => s.serialize_f64(*v),
            AngularInput::Quantity(q) => q.serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for AngularInput {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match InputRepr::deserialize(d)? {
            InputRepr::Bare(v) => Ok(AngularInput::Bare(v)),
            InputRepr::Text(t) => parse_angular_input(&t).map_err(serde::de::Error::custom),
            InputRepr::Quantity(q) => Ok(AngularInput::Quantity(q)),
        }
    }
}
