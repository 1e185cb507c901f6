//! Serde codec for floating-point fields.
//!
//! JSON numbers cannot hold NaN or infinities, so those are written as the
//! string tokens `"NaN"`, `"Infinity"` and `"-Infinity"` (the spellings
//! Python's `json` module uses) and read back from the same tokens. Finite
//! values stay plain JSON numbers.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
enum Token {
    NaN,
    Infinity,
    #[serde(rename = "-Infinity")]
    NegInfinity,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Finite(f64),
    NonFinite(Token),
}

/// An `f64` that survives a JSON round trip whatever its value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "Repr", from = "Repr")]
pub(crate) struct Float(pub(crate) f64);

impl From<Float> for Repr {
    fn from(value: Float) -> Self {
        let v = value.0;
        if v.is_nan() {
            Repr::NonFinite(Token::NaN)
        } else if v == f64::INFINITY {
            Repr::NonFinite(Token::Infinity)
        } else if v == f64::NEG_INFINITY {
            Repr::NonFinite(Token::NegInfinity)
        } else {
            Repr::Finite(v)
        }
    }
}

impl From<Repr> for Float {
    fn from(repr: Repr) -> Self {
        match repr {
            Repr::Finite(v) => Float(v),
            Repr::NonFinite(Token::NaN) => Float(f64::NAN),
            Repr::NonFinite(Token::Infinity) => Float(f64::INFINITY),
            Repr::NonFinite(Token::NegInfinity) => Float(f64::NEG_INFINITY),
        }
    }
}

/// Single `f64` field
pub(crate) mod scalar {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Float(*value).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Float::deserialize(deserializer)?.0)
    }
}

/// `Option<f64>` field
pub(crate) mod optional {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(Float).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(Option::<Float>::deserialize(deserializer)?.map(|f| f.0))
    }
}

/// 2-D table of `f64` (`values`, `standard_uncertainties`, coverage limits)
pub(crate) mod table {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        table: &[Vec<f64>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            table
                .iter()
                .map(|row| row.iter().copied().map(Float).collect::<Vec<_>>()),
        )
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<f64>>, D::Error> {
        let rows = Vec::<Vec<Float>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|f| f.0).collect())
            .collect())
    }
}

/// Optional named parameters (`ProbabilityDensityFunction::parameters`)
pub(crate) mod parameters {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        params: &Option<BTreeMap<String, f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        params
            .as_ref()
            .map(|p| {
                p.iter()
                    .map(|(name, v)| (name.as_str(), Float(*v)))
                    .collect::<BTreeMap<_, _>>()
            })
            .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BTreeMap<String, f64>>, D::Error> {
        let params = Option::<BTreeMap<String, Float>>::deserialize(deserializer)?;
        Ok(params.map(|p| p.into_iter().map(|(name, f)| (name, f.0)).collect()))
    }
}
