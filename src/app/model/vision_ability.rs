use core::{fmt, str::FromStr};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which image inputs a request may carry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VisionAbility {
    None,
    #[default]
    Base64,
    All,
}

/// Accepted spellings in declaration order, primary name first.
const NAMES: [(VisionAbility, &str, &str); 3] = [
    (VisionAbility::None, "none", "disabled"),
    (VisionAbility::Base64, "base64", "base64-only"),
    (VisionAbility::All, "all", "base64-http"),
];

/// Returned for a name outside [`NAMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVisionAbility;

impl VisionAbility {
    #[inline]
    pub const fn as_str(self) -> &'static str { NAMES[self as usize].1 }
}

impl FromStr for VisionAbility {
    type Err = UnknownVisionAbility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NAMES
            .iter()
            .find(|(_, name, alias)| s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(alias))
            .map(|(ability, ..)| *ability)
            .ok_or(UnknownVisionAbility)
    }
}

impl fmt::Display for VisionAbility {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Serialize for VisionAbility {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(self.as_str())
    }
}

// Unknown names fall back to the default.
impl<'de> Deserialize<'de> for VisionAbility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_aliases() {
        let cases = [
            ("none", Ok(VisionAbility::None)),
            ("disabled", Ok(VisionAbility::None)),
            ("base64", Ok(VisionAbility::Base64)),
            ("BASE64-ONLY", Ok(VisionAbility::Base64)),
            ("all", Ok(VisionAbility::All)),
            ("base64-http", Ok(VisionAbility::All)),
            (" All ", Ok(VisionAbility::All)),
            ("everything", Err(UnknownVisionAbility)),
            ("", Err(UnknownVisionAbility)),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<VisionAbility>(), expected, "{name:?}");
        }
    }

    #[test]
    fn test_primary_name() {
        for (ability, name, alias) in NAMES {
            assert_eq!(ability.as_str(), name);
            assert_eq!(ability.to_string(), name);
            assert_eq!(alias.parse::<VisionAbility>(), Ok(ability));
        }
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&VisionAbility::All).unwrap(), r#""all""#);
        let parsed: VisionAbility = serde_json::from_str(r#""disabled""#).unwrap();
        assert_eq!(parsed, VisionAbility::None);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""none""#);

        let unknown: VisionAbility = serde_json::from_str(r#""everything""#).unwrap();
        assert_eq!(unknown, VisionAbility::Base64);
    }

    #[test]
    fn test_rejects_non_strings() {
        assert!(serde_json::from_str::<VisionAbility>("1").is_err());
        assert!(serde_json::from_str::<VisionAbility>("null").is_err());
    }
}
