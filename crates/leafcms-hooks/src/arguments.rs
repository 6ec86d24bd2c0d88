//! Hook arguments and positional binding
//!
//! Hook callbacks want ergonomic, domain-meaningful parameter names (`page`,
//! `site`) while the firing site only has positional values and the declared
//! parameter order of the triggering call. This module bridges the two:
//! [`Signature`] is an explicit descriptor of that parameter order, declared
//! once per firing site, and [`Signature::bind`] turns a positional argument
//! list into a named [`HookArguments`] map.
//!
//! # Examples
//!
//! ```ignore
//! use leafcms_hooks::{HookArguments, Signature};
//! use serde_json::json;
//!
//! let signature = Signature::new(["this", "data"]);
//! let args = signature.bind(&[json!({"slug": "home"}), json!({"title": "Home"})], "page");
//!
//! // The receiver slot is rekeyed to the domain type
//! assert!(args.get("page").is_some());
//! assert!(args.get("this").is_none());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Reserved parameter name for the acted-upon receiver
///
/// A parameter declared under this name is rekeyed to the event's type before
/// it is stored, so callbacks see the model keyed by its domain name.
pub const RECEIVER_PARAM: &str = "this";

/// Named hook arguments
///
/// An insertion-ordered name-to-value map. Keys are folded to ASCII lowercase
/// at insertion and lookup is case-insensitive, so `args.get("Page")` and
/// `args.get("page")` resolve to the same value. The ordered-values view
/// ([`HookArguments::values`]) preserves the positional order of the original
/// firing signature, since some consumers invoke callbacks positionally.
///
/// Values are opaque [`serde_json::Value`]s supplied by the caller; the map
/// never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookArguments {
    keys: Vec<String>,
    values: Vec<Value>,
}

impl HookArguments {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named argument
    ///
    /// The key is folded to lowercase. Inserting an existing key replaces its
    /// value in place, keeping the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let key = name.into().to_ascii_lowercase();
        match self.keys.iter().position(|k| *k == key) {
            Some(position) => self.values[position] = value,
            None => {
                self.keys.push(key);
                self.values.push(value);
            }
        }
    }

    /// Look up an argument by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.keys
            .iter()
            .position(|k| k.eq_ignore_ascii_case(name))
            .map(|position| &self.values[position])
    }

    /// The values in original positional order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The argument names in original positional order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Iterate over name/value pairs in positional order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keys.iter().map(String::as_str).zip(self.values.iter())
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the map holds no arguments
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The full name-to-value mapping
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl FromIterator<(String, Value)> for HookArguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Ordered parameter names of a firing site
///
/// An explicit, statically declared signature descriptor: the host constructs
/// one per distinct firing site and passes it into [`Signature::bind`] together
/// with the positional call arguments. This replaces runtime reflection on the
/// triggering method with a plain, testable data structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<String>,
}

impl Signature {
    /// Create a signature from ordered parameter names
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The declared parameter names, in position order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Bind positional arguments to this signature's parameter names
    ///
    /// Each parameter takes the value at its position in `positional`. Firing
    /// with fewer arguments than the signature declares is tolerated: missing
    /// positions bind to [`Value::Null`]. Surplus positional values beyond the
    /// signature are ignored. A parameter named [`RECEIVER_PARAM`] is rekeyed
    /// to `receiver_kind` before insertion.
    ///
    /// Binding is order-preserving, total, and never errors.
    pub fn bind(&self, positional: &[Value], receiver_kind: &str) -> HookArguments {
        let mut args = HookArguments::new();

        for (position, param) in self.params.iter().enumerate() {
            let value = positional.get(position).cloned().unwrap_or(Value::Null);
            let name = if param.eq_ignore_ascii_case(RECEIVER_PARAM) {
                receiver_kind
            } else {
                param.as_str()
            };
            args.insert(name, value);
        }

        debug!(
            params = self.params.len(),
            supplied = positional.len(),
            receiver_kind = %receiver_kind,
            "Bound hook arguments"
        );

        args
    }
}
