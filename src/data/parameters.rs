//! Render parameters shared by every preset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of the knobs a preset can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Transparency,
    SeeThrough,
    Outline,
    Smoothness,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 4] = [
        ParameterKey::Transparency,
        ParameterKey::SeeThrough,
        ParameterKey::Outline,
        ParameterKey::Smoothness,
    ];

    /// Field name as it appears in serialized parameter sets
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::Transparency => "transparency",
            ParameterKey::SeeThrough => "see_through",
            ParameterKey::Outline => "outline",
            ParameterKey::Smoothness => "smoothness",
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParameterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        ParameterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| format!("unknown parameter '{}'", s))
    }
}

/// One point in the parameter space.
///
/// Equality is field-wise on the values, so two sets built separately with the
/// same numbers compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterValues {
    pub transparency: f32,
    pub see_through: f32,
    pub outline: f32,
    pub smoothness: f32,
}

impl ParameterValues {
    pub fn get(&self, key: ParameterKey) -> f32 {
        match key {
            ParameterKey::Transparency => self.transparency,
            ParameterKey::SeeThrough => self.see_through,
            ParameterKey::Outline => self.outline,
            ParameterKey::Smoothness => self.smoothness,
        }
    }

    pub fn set(&mut self, key: ParameterKey, value: f32) {
        match key {
            ParameterKey::Transparency => self.transparency = value,
            ParameterKey::SeeThrough => self.see_through = value,
            ParameterKey::Outline => self.outline = value,
            ParameterKey::Smoothness => self.smoothness = value,
        }
    }

    /// Copy of `self` with a single knob replaced
    pub fn with(mut self, key: ParameterKey, value: f32) -> Self {
        self.set(key, value);
        self
    }
}

impl fmt::Display for ParameterValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, key) in ParameterKey::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, self.get(*key))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_per_key() {
        let mut values = ParameterValues::default();
        for (i, key) in ParameterKey::ALL.iter().enumerate() {
            values.set(*key, i as f32 + 0.25);
        }
        assert_eq!(values.transparency, 0.25);
        assert_eq!(values.see_through, 1.25);
        assert_eq!(values.outline, 2.25);
        assert_eq!(values.smoothness, 3.25);
    }

    #[test]
    fn test_value_equality() {
        let a = ParameterValues { transparency: 0.5, see_through: 0.2, outline: 0.5, smoothness: 1.0 };
        let b = ParameterValues::default()
            .with(ParameterKey::Transparency, 0.5)
            .with(ParameterKey::SeeThrough, 0.2)
            .with(ParameterKey::Outline, 0.5)
            .with(ParameterKey::Smoothness, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, b.with(ParameterKey::Outline, 0.6));
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("transparency".parse::<ParameterKey>(), Ok(ParameterKey::Transparency));
        assert_eq!("See-Through".parse::<ParameterKey>(), Ok(ParameterKey::SeeThrough));
        assert!("hue".parse::<ParameterKey>().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(ParameterValues::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ParameterKey::ALL {
            assert!(obj.contains_key(key.as_str()), "missing {}", key);
        }
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn test_display_lists_every_knob() {
        let values = ParameterValues { transparency: 0.5, see_through: 0.2, outline: 0.5, smoothness: 1.0 };
        assert_eq!(
            values.to_string(),
            "{transparency: 0.5, see_through: 0.2, outline: 0.5, smoothness: 1}"
        );
    }
}
