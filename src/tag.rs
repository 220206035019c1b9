//! Closed string-tag enums.
//!
//! Catalog descriptors and settings carry discrete "kind" fields (hero style, card radius,
//! navigation mode, logo icon, ...) as plain strings. Each one maps to a closed enum whose
//! unrecognized tags fall back to a documented default variant instead of failing to parse.

/// Declares a tag enum: `Variant => "tag"` pairs plus the variant used for unknown tags.
///
/// Generates `ALL`, `as_str`, `parse` (strict), `from_tag` (lenient), `Default`,
/// `Display` and string-based serde impls.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $tag, )+
                }
            }

            /// Strict parse: `None` for tags outside the closed set.
            pub fn parse(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Lenient parse: unknown tags map to the default variant.
            pub fn from_tag(tag: &str) -> Self {
                Self::parse(tag).unwrap_or_default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_tag(&tag))
            }
        }
    };
}

pub(crate) use tag_enum;
