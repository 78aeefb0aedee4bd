use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Platform-wide 64-bit time-ordered identifier.
///
/// Every addressable resource (user, guild, SKU, application, entitlement)
/// carries one. The gateway and REST API transport snowflakes as decimal
/// strings to survive JSON number precision limits, so serde maps this type
/// to and from the string form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Create a snowflake from its raw integer value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw integer value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for Snowflake {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidSnowflake(s.to_string()))
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snowflake({})", self.0)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SnowflakeVisitor;

        impl serde::de::Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a snowflake encoded as a decimal string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SnowflakeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_string() {
        let id: Snowflake = "175928847299117063".parse().unwrap();
        assert_eq!(id.get(), 175_928_847_299_117_063);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Snowflake>().is_err());
        assert!("abc".parse::<Snowflake>().is_err());
        assert!("-5".parse::<Snowflake>().is_err());
        assert!("12.5".parse::<Snowflake>().is_err());
    }

    #[test]
    fn parse_error_carries_input() {
        let err = "nope".parse::<Snowflake>().unwrap_err();
        assert_eq!(err, TypeError::InvalidSnowflake("nope".into()));
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(format!("{}", Snowflake::new(42)), "42");
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Snowflake::new(1) < Snowflake::new(2));
    }

    #[test]
    fn serde_uses_string_form() {
        let id = Snowflake::new(175_928_847_299_117_063);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"175928847299117063\"");

        let parsed: Snowflake = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_bare_number() {
        assert!(serde_json::from_str::<Snowflake>("42").is_err());
    }
}
