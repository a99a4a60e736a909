//! Forward-compatible string enums.
//!
//! The service documents a set of known values for many string fields but is
//! free to return new ones. [`open_enum!`] declares the known set and keeps any
//! other value in an `Unrecognized` variant so decoding never fails on a value
//! added by a newer cluster.
//!
//! Polymorphic objects get the same treatment through [`UnknownVariant`]: an
//! object whose discriminator names no known variant is kept whole and encodes
//! back exactly as it was received.

use std::fmt;
use std::marker::PhantomData;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Declares an enum of known wire strings plus an `Unrecognized(String)` variant.
///
/// The generated type serializes as its wire string, parses infallibly through
/// [`std::str::FromStr`] and exposes `KNOWN_VALUES` for tooling.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this client does not know; the raw wire string is kept.
            Unrecognized(String),
        }

        impl $name {
            /// Wire strings of every known variant, in declaration order.
            pub const KNOWN_VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Whether the value is one of the documented variants.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok(match raw {
                    $($wire => $name::$variant,)+
                    other => $name::Unrecognized(other.to_string()),
                })
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw.parse() {
                    Ok(value) => value,
                    Err(never) => match never {},
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(raw.as_str()))
            }
        }
    };
}

pub(crate) use open_enum;

/// A union discriminated by a string field.
pub trait TaggedUnion {
    /// Wire name of the discriminator field.
    const TAG: &'static str;
    /// Discriminator values that have a dedicated variant.
    const KNOWN: &'static [&'static str];
}

/// Implements [`TaggedUnion`] for a union type.
macro_rules! tagged_union {
    ($name:ident, $tag:literal, [$($known:literal),+ $(,)?]) => {
        impl $crate::api::known::TaggedUnion for $name {
            const TAG: &'static str = $tag;
            const KNOWN: &'static [&'static str] = &[$($known),+];
        }
    };
}

pub(crate) use tagged_union;

/// Member of union `T` whose discriminator this client does not know.
///
/// Only objects carrying a string discriminator outside `T::KNOWN` decode into
/// this type, so a known member with missing or malformed fields still fails.
pub struct UnknownVariant<T> {
    raw: Map<String, Value>,
    union: PhantomData<fn() -> T>,
}

impl<T: TaggedUnion> UnknownVariant<T> {
    /// Discriminator value as sent by the service.
    pub fn tag(&self) -> &str {
        self.raw
            .get(T::TAG)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl<T> UnknownVariant<T> {
    /// The object fields, discriminator included.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Consumes the value and returns the object fields.
    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }
}

impl<T> Clone for UnknownVariant<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            union: PhantomData,
        }
    }
}

impl<T> fmt::Debug for UnknownVariant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnknownVariant").field(&self.raw).finish()
    }
}

impl<T> PartialEq for UnknownVariant<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for UnknownVariant<T> {}

impl<T> Serialize for UnknownVariant<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: TaggedUnion> Deserialize<'de> for UnknownVariant<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        match raw.get(T::TAG) {
            Some(Value::String(tag)) if T::KNOWN.contains(&tag.as_str()) => Err(
                D::Error::custom(format_args!("malformed `{tag}` object")),
            ),
            Some(Value::String(_)) => Ok(Self {
                raw,
                union: PhantomData,
            }),
            Some(_) => Err(D::Error::custom(format_args!(
                "`{}` must be a string",
                T::TAG
            ))),
            None => Err(D::Error::missing_field(T::TAG)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::UnknownVariant;

    open_enum! {
        /// Sample enum used to exercise the macro.
        pub enum Color {
            /// Red.
            Red = "Red",
            /// Light blue.
            LightBlue = "LightBlue",
        }
    }

    #[test]
    fn known_values_parse_back_to_themselves() {
        for raw in Color::KNOWN_VALUES {
            let parsed: Color = raw.parse().expect("infallible");
            assert!(parsed.is_known());
            assert_eq!(parsed.as_str(), *raw);
        }
    }

    #[test]
    fn unrecognized_values_survive_decode_and_encode() {
        let value: Color = serde_json::from_value(json!("Ultraviolet")).expect("decode");
        assert_eq!(value, Color::Unrecognized("Ultraviolet".into()));
        assert!(!value.is_known());
        assert_eq!(
            serde_json::to_value(&value).expect("encode"),
            json!("Ultraviolet")
        );
    }

    #[test]
    fn display_uses_wire_string() {
        assert_eq!(Color::LightBlue.to_string(), "LightBlue");
        assert_eq!(Color::from("Red"), Color::Red);
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(tag = "Shape")]
    enum Shape {
        Circle { radius: f64 },
        #[serde(untagged)]
        Unrecognized(UnknownVariant<Shape>),
    }

    tagged_union!(Shape, "Shape", ["Circle"]);

    #[test]
    fn unknown_union_member_encodes_back_unchanged() {
        let raw = json!({"Shape": "Hexagon", "Side": 2, "Label": {"Text": "h"}});
        let shape: Shape = serde_json::from_value(raw.clone()).expect("decode");
        let Shape::Unrecognized(unknown) = &shape else {
            panic!("expected an unrecognized shape, got {shape:?}");
        };
        assert_eq!(unknown.tag(), "Hexagon");
        assert_eq!(unknown.raw()["Side"], json!(2));
        assert_eq!(serde_json::to_value(&shape).expect("encode"), raw);
    }

    #[test]
    fn known_member_with_bad_fields_is_still_an_error() {
        let err = serde_json::from_value::<Shape>(json!({"Shape": "Circle"}));
        assert!(err.is_err());
        let err = serde_json::from_value::<Shape>(json!({"Side": 2}));
        assert!(err.is_err());
        let err = serde_json::from_value::<Shape>(json!({"Shape": 7}));
        assert!(err.is_err());
    }

    #[test]
    fn known_member_still_decodes_to_its_variant() {
        let shape: Shape =
            serde_json::from_value(json!({"Shape": "Circle", "radius": 1.5})).expect("decode");
        assert_eq!(shape, Shape::Circle { radius: 1.5 });
    }
}
