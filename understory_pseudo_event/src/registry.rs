// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture registry: an ordered, frozen list of rules plus their basic-types index.
//!
//! Registries are assembled with a [`RegistryBuilder`] during initialization. Optional
//! rule sets are appended there; [`RegistryBuilder::build`] then freezes the list into a
//! [`GestureRegistry`], which has no mutating API.
//!
//! ```
//! use understory_pseudo_event::{GestureRule, RawTypes, RegistryBuilder, key_codes};
//! use understory_pseudo_event::modifiers::has_any_modifier;
//!
//! let mut builder = RegistryBuilder::standard();
//! builder
//!     .push(GestureRule::new("sapinsert", RawTypes::KEYDOWN, |e, _| {
//!         e.key_code == key_codes::INSERT && !has_any_modifier(e)
//!     }))
//!     .unwrap();
//! let registry = builder.build();
//! assert_eq!(registry.rules().last().unwrap().name, "sapinsert");
//! assert!(registry.basic_types().contains(RawTypes::KEYDOWN | RawTypes::CLICK));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::raw::{RawType, RawTypes};
use crate::rule::GestureRule;
use crate::standard::STANDARD_RULES;

/// Rejected rule registrations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A rule with this name is already registered.
    #[error("gesture `{0}` is already registered")]
    DuplicateName(&'static str),
    /// The rule lists no raw types and could never match.
    #[error("gesture `{0}` has no basic types")]
    NoBasicTypes(&'static str),
}

/// Collects rules in registration order.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    rules: Vec<GestureRule>,
}

impl RegistryBuilder {
    /// A builder with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A builder preloaded with [`STANDARD_RULES`].
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Append a rule after all previously registered ones.
    pub fn push(&mut self, rule: GestureRule) -> Result<&mut Self, RegistryError> {
        if rule.basic_types.is_empty() {
            return Err(RegistryError::NoBasicTypes(rule.name));
        }
        if self.rules.iter().any(|r| r.name == rule.name) {
            return Err(RegistryError::DuplicateName(rule.name));
        }
        self.rules.push(rule);
        Ok(self)
    }

    /// Freeze the rules into a registry.
    pub fn build(self) -> GestureRegistry {
        let basic_types = self
            .rules
            .iter()
            .fold(RawTypes::empty(), |acc, r| acc | r.basic_types);
        tracing::debug!(
            rules = self.rules.len(),
            basic_types = ?basic_types,
            "gesture registry built"
        );
        GestureRegistry {
            rules: self.rules.into_boxed_slice(),
            basic_types,
        }
    }
}

/// An immutable, ordered rule list.
#[derive(Clone, Debug)]
pub struct GestureRegistry {
    rules: Box<[GestureRule]>,
    basic_types: RawTypes,
}

impl GestureRegistry {
    /// The standard rule table, frozen.
    pub fn standard() -> Self {
        RegistryBuilder::standard().build()
    }

    /// All rules in registration order.
    pub fn rules(&self) -> &[GestureRule] {
        &self.rules
    }

    /// Union of every rule's basic types.
    pub fn basic_types(&self) -> RawTypes {
        self.basic_types
    }

    /// Rules that may be evaluated for `raw_type`, in registration order.
    pub fn candidates(&self, raw_type: RawType) -> impl Iterator<Item = &GestureRule> {
        let rules: &[GestureRule] = if self.basic_types.has(raw_type) {
            &self.rules
        } else {
            &[]
        };
        rules.iter().filter(move |r| r.accepts(raw_type))
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&GestureRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for GestureRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
