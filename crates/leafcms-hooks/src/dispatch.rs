//! Action routing for hook events
//!
//! A pull-style dispatch helper built on the same guarantee as chained
//! [`HookEvent::promise`] calls: a group of action-keyed callbacks is
//! registered against one firing, and at most one of them runs. There is no
//! subscriber registry; fan-out across many subscribers is the host's
//! responsibility and happens by driving multiple routers or promise chains.

use serde_json::Value;
use tracing::debug;

use crate::event::HookEvent;

/// Routes one hook event to at most one action-keyed callback
///
/// Routes are matched in registration order and the first match wins, so
/// registering the same action twice keeps the earlier callback. Dispatch
/// consumes the router: a router is built per firing, like the event itself.
///
/// # Examples
///
/// ```ignore
/// use leafcms_hooks::ActionRouter;
///
/// let fired = ActionRouter::new()
///     .on("create", |args| on_create(args))
///     .on("update", |args| on_update(args))
///     .dispatch(&event);
/// ```
#[derive(Default)]
pub struct ActionRouter<'a> {
    routes: Vec<(String, Box<dyn FnOnce(&[Value]) + 'a>)>,
}

impl<'a> ActionRouter<'a> {
    /// Create a router with no routes
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a callback for an expected action
    ///
    /// Returns the router for builder-style chaining.
    pub fn on<F>(mut self, action: impl Into<String>, callback: F) -> Self
    where
        F: FnOnce(&[Value]) + 'a,
    {
        self.routes.push((action.into(), Box::new(callback)));
        self
    }

    /// Dispatch an event to the first matching route
    ///
    /// The matching callback receives the event's argument values in original
    /// positional order; its return value is discarded. Returns whether any
    /// route fired. Events without an action match no route.
    pub fn dispatch(self, event: &HookEvent) -> bool {
        let Some(action) = event.action() else {
            debug!(name = %event.name(), "Event carries no action, no route can match");
            return false;
        };

        for (expected, callback) in self.routes {
            if expected == action {
                debug!(name = %event.name(), action = %action, "Route matched, invoking callback");
                callback(event.arguments());
                return true;
            }
        }

        debug!(name = %event.name(), action = %action, "No route matched");
        false
    }
}
