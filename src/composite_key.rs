//! Immutable three-part numeric keys.
//!
//! A [`CompositeKey`] holds three bounded, non-negative fields. The names and
//! upper bounds come from a [`KeySchema`] marker type, so keys with different
//! schemas are different types and never compare equal to each other.
//! [`PhoneNumber`] is the North American instance: `area code` (0-999),
//! `prefix` (0-999) and `line num` (0-9999).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::error::KeyError;

/// Multiplier used to fold the fields into a hash code.
const HASH_MULTIPLIER: i32 = 31;

// =============================================================================
// Schema: field names and bounds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub max: u16,
}

impl FieldSpec {
    pub const fn new(name: &'static str, max: u16) -> Self {
        FieldSpec { name, max }
    }

    fn check(&self, value: i32) -> Result<u16, KeyError> {
        match u16::try_from(value) {
            Ok(checked) if checked <= self.max => Ok(checked),
            _ => {
                debug!(field = self.name, value, max = self.max, "rejecting key field");
                Err(KeyError::invalid_argument(self.name, value))
            }
        }
    }

    /// Number of decimal digits in the bound; fields are zero-padded to it.
    fn width(&self) -> usize {
        self.max.to_string().len()
    }
}

pub trait KeySchema {
    const FIELDS: [FieldSpec; 3];
}

/// North American Numbering Plan layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nanp;

impl KeySchema for Nanp {
    const FIELDS: [FieldSpec; 3] = [
        FieldSpec::new("area code", 999),
        FieldSpec::new("prefix", 999),
        FieldSpec::new("line num", 9999),
    ];
}

pub type PhoneNumber = CompositeKey<Nanp>;

// =============================================================================
// The key itself
// =============================================================================

pub struct CompositeKey<S> {
    parts: [u16; 3],
    _schema: PhantomData<S>,
}

impl<S: KeySchema> CompositeKey<S> {
    /// Validates each field against its bound. The first field out of range
    /// is reported; no key is built in that case.
    pub fn new(first: i32, second: i32, third: i32) -> Result<Self, KeyError> {
        let [a, b, c] = S::FIELDS;
        Ok(CompositeKey {
            parts: [a.check(first)?, b.check(second)?, c.check(third)?],
            _schema: PhantomData,
        })
    }

    pub fn first(&self) -> u16 {
        self.parts[0]
    }

    pub fn second(&self) -> u16 {
        self.parts[1]
    }

    pub fn third(&self) -> u16 {
        self.parts[2]
    }

    pub fn parts(&self) -> [u16; 3] {
        self.parts
    }

    /// `31 * (31 * first + second) + third`, with `i32` wrapping.
    pub fn hash_code(&self) -> i32 {
        let mut result = i32::from(self.parts[0]);
        for part in &self.parts[1..] {
            result = result
                .wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(i32::from(*part));
        }
        result
    }

    /// Orders by the first field alone, ignoring the rest.
    pub fn cmp_by_first(a: &Self, b: &Self) -> Ordering {
        a.first().cmp(&b.first())
    }
}

impl CompositeKey<Nanp> {
    pub fn area_code(&self) -> u16 {
        self.first()
    }

    pub fn prefix(&self) -> u16 {
        self.second()
    }

    pub fn line_num(&self) -> u16 {
        self.third()
    }
}

// =============================================================================
// Equality, hashing, ordering
// =============================================================================

impl<S> Clone for CompositeKey<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for CompositeKey<S> {}

impl<S> PartialEq for CompositeKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl<S> Eq for CompositeKey<S> {}

impl<S: KeySchema> Hash for CompositeKey<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<S: KeySchema> Ord for CompositeKey<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first()
            .cmp(&other.first())
            .then_with(|| self.second().cmp(&other.second()))
            .then_with(|| self.third().cmp(&other.third()))
    }
}

impl<S: KeySchema> PartialOrd for CompositeKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Text form: zero-padded fields joined by '-'
// =============================================================================

impl<S: KeySchema> fmt::Display for CompositeKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (part, spec)) in self.parts.iter().zip(S::FIELDS.iter()).enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:0width$}", part, width = spec.width())?;
        }
        Ok(())
    }
}

impl<S: KeySchema> fmt::Debug for CompositeKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompositeKey({})", self)
    }
}

impl<S: KeySchema> FromStr for CompositeKey<S> {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = input.trim().split('-').collect();
        if fields.len() != 3 {
            return Err(KeyError::malformed(
                input,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let mut values = [0i32; 3];
        for (slot, (raw, spec)) in values.iter_mut().zip(fields.iter().zip(S::FIELDS.iter())) {
            *slot = raw
                .parse()
                .map_err(|e| KeyError::malformed(input, format!("{}: {}", spec.name, e)))?;
        }

        Self::new(values[0], values[1], values[2])
    }
}

impl<S: KeySchema> Serialize for CompositeKey<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, S: KeySchema> Deserialize<'de> for CompositeKey<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
