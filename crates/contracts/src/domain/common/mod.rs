use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain `{ success, message }` acknowledgement returned by mutations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: String,
}

/// Accepts `true`, `"1"`, `"true"`, `1` and their negatives. Product flags
/// arrive in any of these shapes depending on how they were stored.
pub fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean, 0/1 or \"true\"/\"false\"")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" | "" => Ok(false),
                other => Err(E::custom(format!("invalid flag value: {other}"))),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Form encoding of a flag, as the multipart endpoints expect
pub fn flag_value(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

/// Numbers that may arrive as JSON strings (`"1200.50"`)
pub fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Text(s) => s
            .trim()
            .replace(',', "")
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid amount: {s}"))),
        Raw::Null => Ok(0.0),
    }
}

/// Two decimals, for prices and totals
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "deserialize_flag")]
        a: bool,
        #[serde(deserialize_with = "deserialize_flag")]
        b: bool,
        #[serde(deserialize_with = "deserialize_flag")]
        c: bool,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: f64,
    }

    #[test]
    fn test_flag_shapes() {
        let parsed: Flags =
            serde_json::from_str(r#"{"a":"1","b":true,"c":"false","amount":"1,200.50"}"#).unwrap();
        assert!(parsed.a);
        assert!(parsed.b);
        assert!(!parsed.c);
        assert_eq!(parsed.amount, 1200.5);

        let parsed: Flags =
            serde_json::from_str(r#"{"a":0,"b":"TRUE","c":null,"amount":15}"#).unwrap();
        assert!(!parsed.a);
        assert!(parsed.b);
        assert!(!parsed.c);
        assert_eq!(parsed.amount, 15.0);
    }

    #[test]
    fn test_message_alias() {
        let msg: ApiMessage = serde_json::from_str(r#"{"success":true,"Message":"done"}"#).unwrap();
        assert_eq!(msg.message, "done");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(flag_value(true), "1");
    }
}
