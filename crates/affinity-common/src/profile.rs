use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::Value;
use thiserror::Error;

/// Upper bound of the drink / smoke frequency scale (0=never .. 3=often).
pub const HABIT_SCALE_MAX: u8 = 3;
/// Values questionnaire answers are on a 0-10 scale.
pub const VALUE_RATING_MAX: f64 = 10.0;
/// More entries than this is not a questionnaire answer.
pub const MAX_VALUE_ENTRIES: usize = 64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("preferred_age_min ({min}) exceeds preferred_age_max ({max})")]
    InvertedAgeRange { min: u32, max: u32 },
    #[error("values has {count} entries, at most {max} are accepted")]
    TooManyValues { count: usize, max: usize },
}

/// Attachment style. Unknown tags are kept as `Unrecognized` and score as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
    Unrecognized(String),
}

impl AttachmentStyle {
    pub fn as_str(&self) -> &str {
        match self {
            AttachmentStyle::Secure => "SECURE",
            AttachmentStyle::Anxious => "ANXIOUS",
            AttachmentStyle::Avoidant => "AVOIDANT",
            AttachmentStyle::Disorganized => "DISORGANIZED",
            AttachmentStyle::Unrecognized(raw) => raw,
        }
    }

    /// Slot in the 4-wide one-hot encoding, `None` for unrecognized tags.
    pub fn one_hot_index(&self) -> Option<usize> {
        match self {
            AttachmentStyle::Secure => Some(0),
            AttachmentStyle::Anxious => Some(1),
            AttachmentStyle::Avoidant => Some(2),
            AttachmentStyle::Disorganized => Some(3),
            AttachmentStyle::Unrecognized(_) => None,
        }
    }
}

impl From<String> for AttachmentStyle {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SECURE" => AttachmentStyle::Secure,
            "ANXIOUS" => AttachmentStyle::Anxious,
            "AVOIDANT" => AttachmentStyle::Avoidant,
            "DISORGANIZED" => AttachmentStyle::Disorganized,
            _ => AttachmentStyle::Unrecognized(raw),
        }
    }
}

impl From<&str> for AttachmentStyle {
    fn from(raw: &str) -> Self {
        AttachmentStyle::from(raw.to_string())
    }
}

impl From<AttachmentStyle> for String {
    fn from(style: AttachmentStyle) -> Self {
        match style {
            AttachmentStyle::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Value keys recognized by the embedding projection, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Career,
    Family,
    Adventure,
    Stability,
    Growth,
    Independence,
    Community,
    Creativity,
    Health,
    Spirituality,
    Wealth,
    Legacy,
}

impl ValueKey {
    pub const ALL: [ValueKey; 12] = [
        ValueKey::Career,
        ValueKey::Family,
        ValueKey::Adventure,
        ValueKey::Stability,
        ValueKey::Growth,
        ValueKey::Independence,
        ValueKey::Community,
        ValueKey::Creativity,
        ValueKey::Health,
        ValueKey::Spirituality,
        ValueKey::Wealth,
        ValueKey::Legacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKey::Career => "career_importance",
            ValueKey::Family => "family_importance",
            ValueKey::Adventure => "adventure_importance",
            ValueKey::Stability => "stability_importance",
            ValueKey::Growth => "growth_importance",
            ValueKey::Independence => "independence_importance",
            ValueKey::Community => "community_importance",
            ValueKey::Creativity => "creativity_importance",
            ValueKey::Health => "health_importance",
            ValueKey::Spirituality => "spirituality_importance",
            ValueKey::Wealth => "wealth_importance",
            ValueKey::Legacy => "legacy_importance",
        }
    }
}

/// A single questionnaire answer. Anything that is not a number or a string
/// is kept verbatim so it round-trips, but never scores.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRating {
    Number(f64),
    Text(String),
    Other(Value),
}

impl ValueRating {
    /// Strict numeric view: JSON numbers only.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ValueRating::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Lenient numeric view: numbers, or strings holding a finite number.
    pub fn parse_numeric(&self) -> Option<f64> {
        match self {
            ValueRating::Text(raw) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            other => other.as_number(),
        }
    }
}

impl From<Value> for ValueRating {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => ValueRating::Number(v),
                None => ValueRating::Other(Value::Number(n)),
            },
            Value::String(s) => ValueRating::Text(s),
            other => ValueRating::Other(other),
        }
    }
}

impl From<f64> for ValueRating {
    fn from(value: f64) -> Self {
        ValueRating::Number(value)
    }
}

impl From<i32> for ValueRating {
    fn from(value: i32) -> Self {
        ValueRating::Number(value as f64)
    }
}

impl From<&str> for ValueRating {
    fn from(value: &str) -> Self {
        ValueRating::Text(value.to_string())
    }
}

impl Serialize for ValueRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValueRating::Number(v) => serializer.serialize_f64(*v),
            ValueRating::Text(s) => serializer.serialize_str(s),
            ValueRating::Other(v) => v.serialize(serializer),
        }
    }
}

/// Values questionnaire answers, kept in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRatings {
    entries: IndexMap<String, ValueRating>,
}

impl ValueRatings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry; a replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, rating: impl Into<ValueRating>) {
        self.entries.insert(key.into(), rating.into());
    }

    pub fn get(&self, key: &str) -> Option<&ValueRating> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueRating)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ValueRating::parse_numeric)
    }
}

impl<K: Into<String>, V: Into<ValueRating>> FromIterator<(K, V)> for ValueRatings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ratings = ValueRatings::new();
        for (key, value) in iter {
            ratings.insert(key, value);
        }
        ratings
    }
}

impl Serialize for ValueRatings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.entries.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueRatings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatingsVisitor;

        impl<'de> Visitor<'de> for RatingsVisitor {
            type Value = ValueRatings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of value keys to ratings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let capacity = access.size_hint().unwrap_or(0).min(MAX_VALUE_ENTRIES);
                let mut ratings = ValueRatings {
                    entries: IndexMap::with_capacity(capacity),
                };
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    ratings.insert(key, ValueRating::from(value));
                }
                Ok(ratings)
            }
        }

        deserializer.deserialize_map(RatingsVisitor)
    }
}

const fn default_preferred_age_min() -> u32 {
    18
}

const fn default_preferred_age_max() -> u32 {
    99
}

const fn default_max_distance_km() -> u32 {
    100
}

const fn default_reputation_score() -> f64 {
    50.0
}

/// Matching-relevant snapshot of one user. Scorers only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub uuid: String,

    pub age: u32,
    pub gender: String,
    pub location_lat: f64,
    pub location_lon: f64,

    // Big Five (0-100)
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,

    pub attachment_style: AttachmentStyle,
    pub interests: Vec<i64>,
    pub values: ValueRatings,

    #[serde(default)]
    pub wants_kids: Option<bool>,
    #[serde(default)]
    pub has_kids: bool,
    #[serde(default)]
    pub drinks: Option<u8>,
    #[serde(default)]
    pub smokes: Option<u8>,
    #[serde(default)]
    pub religion: Option<i32>,

    #[serde(default = "default_preferred_age_min")]
    pub preferred_age_min: u32,
    #[serde(default = "default_preferred_age_max")]
    pub preferred_age_max: u32,
    #[serde(default)]
    pub preferred_gender: Vec<String>,
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: u32,

    #[serde(default = "default_reputation_score")]
    pub reputation_score: f64,
    #[serde(default)]
    pub is_video_verified: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            user_id: 0,
            uuid: String::new(),
            age: 0,
            gender: String::new(),
            location_lat: 0.0,
            location_lon: 0.0,
            openness: 50.0,
            conscientiousness: 50.0,
            extraversion: 50.0,
            agreeableness: 50.0,
            neuroticism: 50.0,
            attachment_style: AttachmentStyle::Unrecognized(String::new()),
            interests: Vec::new(),
            values: ValueRatings::new(),
            wants_kids: None,
            has_kids: false,
            drinks: None,
            smokes: None,
            religion: None,
            preferred_age_min: default_preferred_age_min(),
            preferred_age_max: default_preferred_age_max(),
            preferred_gender: Vec::new(),
            max_distance_km: default_max_distance_km(),
            reputation_score: default_reputation_score(),
            is_video_verified: false,
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl UserProfile {
    /// Range checks applied at the request boundary. Degraded-but-recognizable
    /// input (unknown attachment tags, empty collections, odd value entries)
    /// passes; scorers resolve it to neutral defaults.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("location_lat", self.location_lat, -90.0, 90.0)?;
        check_range("location_lon", self.location_lon, -180.0, 180.0)?;

        for (field, value) in [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
        ] {
            check_range(field, value, 0.0, 100.0)?;
        }

        check_range("reputation_score", self.reputation_score, 0.0, 100.0)?;

        for (field, value) in [("drinks", self.drinks), ("smokes", self.smokes)] {
            if let Some(v) = value {
                check_range(field, v as f64, 0.0, HABIT_SCALE_MAX as f64)?;
            }
        }

        if self.values.len() > MAX_VALUE_ENTRIES {
            return Err(ValidationError::TooManyValues {
                count: self.values.len(),
                max: MAX_VALUE_ENTRIES,
            });
        }
        for (_, rating) in self.values.iter() {
            if let Some(v) = rating.parse_numeric() {
                check_range("values", v, 0.0, VALUE_RATING_MAX)?;
            }
        }

        if self.preferred_age_min > self.preferred_age_max {
            return Err(ValidationError::InvertedAgeRange {
                min: self.preferred_age_min,
                max: self.preferred_age_max,
            });
        }

        Ok(())
    }

    /// Big Five traits in embedding slot order.
    pub fn big_five(&self) -> [f64; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }
}
