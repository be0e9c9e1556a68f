// ABOUTME: Claim set assembly for issued identity tokens
// ABOUTME: Maps identity fields to claim names through a declarative table and computes exp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

use chrono::{DateTime, Duration, Utc};
use make_jwt_core::constants::claims;
use make_jwt_core::{IssueError, IssueResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::{Configuration, IdentityFields};

/// Identity field to claim name mapping, in emission order
pub const CLAIM_TABLE: [(fn(&IdentityFields) -> &str, &str); 5] = [
    (|identity| identity.username.as_str(), claims::SUB),
    (|identity| identity.email.as_str(), claims::EMAIL),
    (|identity| identity.given_name.as_str(), claims::GIVEN_NAME),
    (|identity| identity.family_name.as_str(), claims::FAMILY_NAME),
    (|identity| identity.name.as_str(), claims::NAME),
];

/// A single claim value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValue {
    /// String claim
    Text(String),
    /// Integer claim (timestamps)
    Integer(i64),
}

impl Serialize for ClaimValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
        }
    }
}

/// Claims of one token, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    entries: Vec<(&'static str, ClaimValue)>,
}

impl ClaimSet {
    /// Add or replace a claim
    pub fn insert(&mut self, name: &'static str, value: ClaimValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up a claim by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    /// Expiration timestamp, if set
    #[must_use]
    pub fn expiration(&self) -> Option<i64> {
        match self.get(claims::EXP) {
            Some(ClaimValue::Integer(exp)) => Some(*exp),
            _ => None,
        }
    }

    /// Claim names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

}

impl Serialize for ClaimSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Build the claim set for `config` as issued at `now`.
///
/// Blank identity fields are left out entirely; `exp` is always present.
///
/// # Errors
///
/// Returns `IssueError::Signing` if the expiration does not fit a timestamp.
pub fn build_claims(config: &Configuration, now: DateTime<Utc>) -> IssueResult<ClaimSet> {
    let mut claim_set = ClaimSet::default();

    for (field, claim) in CLAIM_TABLE {
        let value = field(config.identity());
        if !value.trim().is_empty() {
            claim_set.insert(claim, ClaimValue::Text(value.to_owned()));
        }
    }

    let exp = expiration(now, config.lifetime_secs())?;
    claim_set.insert(claims::EXP, ClaimValue::Integer(exp));

    Ok(claim_set)
}

fn expiration(now: DateTime<Utc>, lifetime_secs: u64) -> IssueResult<i64> {
    i64::try_from(lifetime_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .map(|exp| exp.timestamp())
        .ok_or_else(|| IssueError::signing("expiration out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_set_serializes_in_insertion_order() {
        let mut claim_set = ClaimSet::default();
        claim_set.insert(claims::SUB, ClaimValue::Text("alice".into()));
        claim_set.insert(claims::EXP, ClaimValue::Integer(1_700_000_060));

        let json = serde_json::to_string(&claim_set).unwrap();
        assert_eq!(json, r#"{"sub":"alice","exp":1700000060}"#);
    }

    #[test]
    fn test_insert_replaces_existing_claim() {
        let mut claim_set = ClaimSet::default();
        claim_set.insert(claims::EXP, ClaimValue::Integer(1));
        claim_set.insert(claims::EXP, ClaimValue::Integer(2));
        assert_eq!(claim_set.names().count(), 1);
        assert_eq!(claim_set.expiration(), Some(2));
    }

    #[test]
    fn test_lifetime_overflow_is_rejected() {
        assert!(expiration(Utc::now(), u64::MAX).is_err());
    }
}
