//! Declaration macros for shapes and closed-string enumerations
//!
//! Every MediaLive shape is a partial record: a fixed, ordered list of optional
//! fields. `model!` turns such a list into a struct plus its accessors, debug
//! rendering, structural hash, equality and serde mapping. `model_enum!` does the same for
//! token sets.

/// Declares a closed-string enumeration.
///
/// Known tokens get a variant each; anything else is preserved verbatim in
/// `Unknown`. Converting a known token from a string yields exactly the same
/// value as naming the variant, so the two setter forms store identical state.
/// `Unknown` can only be built from an unrecognized token.
macro_rules! model_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
            /// A token not known to this version of the library.
            Unknown($crate::model::enums::UnknownToken),
        }

        impl $name {
            /// Canonical wire tokens, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($token),+];

            /// Returns the canonical wire token.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $token, )+
                    $name::Unknown(token) => token.as_str(),
                }
            }

            /// Returns `true` unless this value came from an unrecognized token.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                match token {
                    $( $token => $name::$variant, )+
                    other => $name::Unknown($crate::model::enums::UnknownToken::new(other.to_owned())),
                }
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                match token.as_str() {
                    $( $token => $name::$variant, )+
                    _ => $name::Unknown($crate::model::enums::UnknownToken::new(token)),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                Ok($name::from(token))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::model::Render for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::model::StructuralHash for $name {
            fn structural_hash(&self) -> i32 {
                $crate::model::hash::str_hash(self.as_str())
            }
        }

        impl $crate::model::StructuralEq for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <String as serde::Deserialize>::deserialize(deserializer).map($name::from)
            }
        }
    };
}

/// Maps a field kind to its storage type.
macro_rules! model_field_type {
    (int) => { i32 };
    (double) => { f64 };
    (boolean) => { bool };
    (string) => { String };
    (enumeration ($t:ty)) => { $t };
    (nested ($t:ty)) => { $t };
    (list ($t:ty)) => { Vec<$t> };
    (map) => { std::collections::HashMap<String, String> };
}

/// Generates the accessor set for one field.
macro_rules! model_accessors {
    (@copy $field:ident, $t:ty) => {
        paste::paste! {
            /// Returns the field value, if present.
            pub fn $field(&self) -> Option<$t> {
                self.$field
            }

            /// Sets the field value. No range checks are applied.
            pub fn [<set_ $field>](&mut self, value: $t) {
                self.$field = Some(value);
            }

            /// Sets the field value and returns `self` for chaining.
            pub fn [<with_ $field>](mut self, value: $t) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Resets the field to absent.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = None;
            }
        }
    };
    (@value $field:ident, $t:ty) => {
        paste::paste! {
            /// Returns the field value, if present.
            pub fn $field(&self) -> Option<&$t> {
                self.$field.as_ref()
            }

            /// Sets the field value.
            pub fn [<set_ $field>](&mut self, value: impl Into<$t>) {
                self.$field = Some(value.into());
            }

            /// Sets the field value and returns `self` for chaining.
            pub fn [<with_ $field>](mut self, value: impl Into<$t>) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Resets the field to absent.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = None;
            }
        }
    };
    ($shape:ident, $wire:literal, $field:ident, int) => {
        model_accessors!(@copy $field, i32);
    };
    ($shape:ident, $wire:literal, $field:ident, double) => {
        model_accessors!(@copy $field, f64);
    };
    ($shape:ident, $wire:literal, $field:ident, boolean) => {
        model_accessors!(@copy $field, bool);
    };
    ($shape:ident, $wire:literal, $field:ident, string) => {
        paste::paste! {
            /// Returns the field value, if present.
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            /// Sets the field value.
            pub fn [<set_ $field>](&mut self, value: impl Into<String>) {
                self.$field = Some(value.into());
            }

            /// Sets the field value and returns `self` for chaining.
            pub fn [<with_ $field>](mut self, value: impl Into<String>) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Resets the field to absent.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = None;
            }
        }
    };
    ($shape:ident, $wire:literal, $field:ident, enumeration, $t:ty) => {
        model_accessors!(@value $field, $t);
    };
    ($shape:ident, $wire:literal, $field:ident, nested, $t:ty) => {
        model_accessors!(@value $field, $t);
    };
    ($shape:ident, $wire:literal, $field:ident, list, $t:ty) => {
        paste::paste! {
            /// Returns the sequence, if present.
            pub fn $field(&self) -> Option<&[$t]> {
                self.$field.as_deref()
            }

            /// Replaces the whole sequence.
            pub fn [<set_ $field>]<I>(&mut self, values: I)
            where
                I: IntoIterator,
                I::Item: Into<$t>,
            {
                self.$field = Some(values.into_iter().map(Into::into).collect());
            }

            /// Replaces the whole sequence and returns `self` for chaining.
            pub fn [<with_ $field>]<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$t>,
            {
                self.[<set_ $field>](values);
                self
            }

            /// Appends to the sequence, creating it first if absent.
            pub fn [<extend_ $field>]<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$t>,
            {
                let values = values.into_iter();
                let capacity = values.size_hint().0;
                self.$field
                    .get_or_insert_with(|| Vec::with_capacity(capacity))
                    .extend(values.map(Into::into));
                self
            }

            /// Resets the sequence to absent.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = None;
            }
        }
    };
    ($shape:ident, $wire:literal, $field:ident, map) => {
        paste::paste! {
            /// Returns the map, if present.
            pub fn $field(&self) -> Option<&std::collections::HashMap<String, String>> {
                self.$field.as_ref()
            }

            /// Replaces the whole map.
            pub fn [<set_ $field>](&mut self, entries: std::collections::HashMap<String, String>) {
                self.$field = Some(entries);
            }

            /// Replaces the whole map and returns `self` for chaining.
            pub fn [<with_ $field>](mut self, entries: std::collections::HashMap<String, String>) -> Self {
                self.[<set_ $field>](entries);
                self
            }

            /// Adds one entry, creating the map first if absent.
            ///
            /// Fails without touching the map if `key` is already present.
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl Into<String>,
                value: impl Into<String>,
            ) -> Result<&mut Self, $crate::error::ModelError> {
                use std::collections::hash_map::Entry;

                let entries = self.$field.get_or_insert_with(std::collections::HashMap::new);
                match entries.entry(key.into()) {
                    Entry::Occupied(existing) => {
                        tracing::warn!(
                            shape = stringify!($shape),
                            field = $wire,
                            key = %existing.key(),
                            "Rejected duplicate map entry"
                        );
                        Err($crate::error::ModelError::DuplicateKey {
                            shape: stringify!($shape),
                            field: $wire,
                            key: existing.key().clone(),
                        })
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(value.into());
                        Ok(self)
                    }
                }
            }

            /// Removes every entry, leaving the map absent.
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = None;
                self
            }
        }
    };
}

/// Declares a shape.
///
/// Fields are written as `"WireName" field_name: kind` where `kind` is one of
/// `int`, `double`, `boolean`, `string`, `enumeration(T)`, `nested(T)`,
/// `list(T)` or `map`. Declaration order is rendering and hashing order.
macro_rules! model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal $field:ident : $kind:ident $( ( $ty:ty ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: Option<model_field_type!($kind $( ($ty) )?)>,
            )*
        }

        impl $name {
            /// Creates an instance with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $( model_accessors!($name, $wire, $field, $kind $(, $ty)?); )*
        }

        impl std::fmt::Display for $name {
            #[allow(unused_mut, unused_assignments, unused_variables)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("{")?;
                let mut separator = "";
                $(
                    if let Some(value) = &self.$field {
                        f.write_str(separator)?;
                        f.write_str(concat!($wire, ": "))?;
                        $crate::model::Render::render(value, f)?;
                        separator = ",";
                    }
                )*
                f.write_str("}")
            }
        }

        impl $crate::model::Render for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::model::StructuralHash for $name {
            fn structural_hash(&self) -> i32 {
                #[allow(unused_mut)]
                let mut hash: i32 = 1;
                $(
                    hash = $crate::model::hash::combine(
                        hash,
                        $crate::model::StructuralHash::structural_hash(&self.$field),
                    );
                )*
                hash
            }
        }

        impl $crate::model::StructuralEq for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                true $( && $crate::model::StructuralEq::structural_eq(&self.$field, &other.$field) )*
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::model::StructuralEq::structural_eq(self, other)
            }
        }

        impl Eq for $name {}

        impl $crate::model::Shape for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$($wire),*];
        }
    };
}
