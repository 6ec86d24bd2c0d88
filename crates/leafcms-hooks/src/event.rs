//! The hook event aggregate
//!
//! A [`HookEvent`] represents one lifecycle-action firing: it owns the parsed
//! hook name and the named arguments bound for that firing. Instances are
//! constructed once per firing, identity is immutable after construction, and
//! nothing persists across firings. If the host fires hooks concurrently, each
//! firing constructs its own independent event.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::{
    arguments::{HookArguments, Signature},
    error::Result,
    name::HookName,
};

/// One lifecycle-action firing
///
/// Carries the structured hook name (`type[.action]:state`) and the arguments
/// bound for this firing. Identity accessors read the parsed name; argument
/// accessors read the bound map. All operations are synchronous computations
/// over in-memory data; the only failure is a malformed name at construction.
///
/// # Examples
///
/// ```ignore
/// use leafcms_hooks::{HookArguments, HookEvent};
/// use serde_json::json;
///
/// let mut args = HookArguments::new();
/// args.insert("page", json!({"slug": "home"}));
///
/// let event = HookEvent::from_arguments("page.create:after", args)?;
///
/// assert_eq!(event.kind(), "page");
/// assert_eq!(event.wildcard(), Some("page:after".to_string()));
///
/// event
///     .promise("create", |args| println!("created: {:?}", args))
///     .promise("delete", |_| unreachable!("action does not match"));
/// # Ok::<(), leafcms_hooks::HookError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HookEvent {
    name: HookName,
    arguments: HookArguments,
}

impl HookEvent {
    /// Construct an event from a raw name and ready-made named arguments
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::MalformedName`] when the name does not
    /// parse; this is fatal and propagates to the firing site.
    pub fn from_arguments(name: &str, arguments: HookArguments) -> Result<Self> {
        let name = HookName::parse(name)?;

        debug!(
            name = %name,
            argument_count = arguments.len(),
            "Constructed hook event"
        );

        Ok(Self { name, arguments })
    }

    /// Construct an event from a firing-site signature and positional arguments
    ///
    /// Convenience path for firing sites that only have the declared parameter
    /// order and positional values: parses the name, then binds the arguments
    /// with the parsed type as the receiver kind (see [`Signature::bind`]).
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::MalformedName`] when the name does not parse.
    pub fn from_call(name: &str, signature: &Signature, positional: &[Value]) -> Result<Self> {
        let name = HookName::parse(name)?;
        let arguments = signature.bind(positional, name.kind());

        debug!(
            name = %name,
            argument_count = arguments.len(),
            "Constructed hook event from call site"
        );

        Ok(Self { name, arguments })
    }

    /// The full raw hook name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The hook type (e.g. `page`, `site`, `user`)
    pub fn kind(&self) -> &str {
        self.name.kind()
    }

    /// The hook action (e.g. `create`, `update`), if the name carries one
    pub fn action(&self) -> Option<&str> {
        self.name.action()
    }

    /// The hook state (e.g. `before`, `after`)
    pub fn state(&self) -> &str {
        self.name.state()
    }

    /// The bound argument values in original positional order
    pub fn arguments(&self) -> &[Value] {
        self.arguments.values()
    }

    /// Look up a bound argument by name, case-insensitively
    ///
    /// The explicit counterpart to asking an event for its `page` or `site`:
    /// `event.get("page")` returns the bound `page` argument without the event
    /// declaring that accessor in advance. Unknown keys are `None`, never an
    /// error.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// The full name-to-value argument mapping
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.arguments.to_map()
    }

    /// The broadened `type:state` name with the action dropped
    ///
    /// `None` when the name carries no action. See [`HookName::wildcard`].
    pub fn wildcard(&self) -> Option<String> {
        self.name.wildcard()
    }

    /// Conditionally invoke a callback if this event's action matches
    ///
    /// When `action` equals the event's action, `callback` runs exactly once
    /// with the argument values in original positional order; its return value
    /// is discarded. For any other action the callback does not run. Always
    /// returns the event itself, so promises chain against the same firing:
    ///
    /// ```ignore
    /// event
    ///     .promise("create", |args| on_create(args))
    ///     .promise("update", |args| on_update(args));
    /// ```
    ///
    /// At most one callback of such a chain fires per event. Callbacks execute
    /// synchronously on the calling thread; a slow callback blocks its caller
    /// like an ordinary direct call.
    pub fn promise<F>(&self, action: &str, callback: F) -> &Self
    where
        F: FnOnce(&[Value]),
    {
        if self.name.action() == Some(action) {
            debug!(name = %self.name, action = %action, "Promise matched, invoking callback");
            callback(self.arguments.values());
        } else {
            debug!(name = %self.name, action = %action, "Promise did not match");
        }

        self
    }
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())
    }
}
