//! Hook name parsing
//!
//! Hook names follow the `type[.action]:state` grammar, e.g. `page.create:after`
//! or `site:loaded`. This grammar is a public contract: extensions register
//! against these strings, so any change breaks existing hook names. Internally
//! a name is parsed into a tagged structure exactly once, at ingestion; no
//! downstream code re-parses the string.

use serde::{Deserialize, Serialize};

use crate::error::{HookError, Result};

/// A parsed hook name
///
/// Carries the raw name alongside its parsed parts:
///
/// * `kind` - the hook type: the domain category of the acted-upon entity
///   (e.g. `page`, `site`, `user`)
/// * `action` - the specific operation performed on that type (e.g. `create`,
///   `update`); optional
/// * `state` - the temporal phase of the action (e.g. `before`, `after`)
///
/// The raw name always round-trips: `kind + ("." + action)? + ":" + state`
/// reassembles it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookName {
    /// The full raw name
    raw: String,

    /// The hook type
    kind: String,

    /// The hook action, absent for names like `site:loaded`
    action: Option<String>,

    /// The hook state
    state: String,
}

impl HookName {
    /// Parse a raw hook name
    ///
    /// Splits on the first `:` (the right-hand side is the state), then on the
    /// first `.` of the left-hand side into type and action. Names without a
    /// `.` have no action.
    ///
    /// An empty state (trailing `:`) is accepted as the empty string; existing
    /// extension hook names rely on the grammar being permissive here. An
    /// empty type is rejected, since the type drives receiver renaming and
    /// wildcard derivation.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::MalformedName`] when the name has no `:` separator
    /// or an empty type.
    pub fn parse(name: &str) -> Result<Self> {
        let (head, state) = name
            .split_once(':')
            .ok_or_else(|| HookError::MalformedName(name.to_string()))?;

        let (kind, action) = match head.split_once('.') {
            Some((kind, action)) => (kind, Some(action)),
            None => (head, None),
        };

        if kind.is_empty() {
            return Err(HookError::MalformedName(name.to_string()));
        }

        Ok(Self {
            raw: name.to_string(),
            kind: kind.to_string(),
            action: action.map(str::to_string),
            state: state.to_string(),
        })
    }

    /// The full raw name
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The hook type
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The hook action, if the name carries one
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The hook state
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The broadened `type:state` form with the action dropped
    ///
    /// Lets a subscriber match any action performed on a type: a firing of
    /// `page.create:after` also matches a registration against `page:after`.
    /// Names without an action have no broader form to collapse to.
    pub fn wildcard(&self) -> Option<String> {
        self.action
            .as_deref()
            .map(|_| format!("{}:{}", self.kind, self.state))
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
