//! LeafCMS Hook Events
//!
//! In-process event dispatch for platform lifecycle actions.
//!
//! # Overview
//!
//! The hook-event core lets extensions observe and react to lifecycle actions
//! ("a page was created", "a site's title changed") without the platform
//! knowing about the extensions in advance. Each firing constructs one
//! [`HookEvent`] carrying a structured name and the arguments bound for that
//! firing; extension code reacts through conditional, action-keyed callbacks.
//!
//! # Architecture
//!
//! The core is layered internally:
//!
//! 1. **Name parser** (`name`): parses `type[.action]:state` identifiers
//! 2. **Argument binder** (`arguments`): turns positional call arguments into
//!    named arguments using an explicit firing-site signature
//! 3. **Event aggregate** (`event`): identity accessors, argument lookup,
//!    wildcard derivation, and conditional `promise` invocation
//! 4. **Action router** (`dispatch`): at-most-one dispatch over a group of
//!    action-keyed callbacks
//!
//! # Quick Start
//!
//! ```ignore
//! use leafcms_hooks::{HookEvent, Signature};
//! use serde_json::json;
//!
//! // Declared once per firing site: the parameter order of the triggering call
//! let signature = Signature::new(["this", "data"]);
//!
//! // One event per firing; "this" is rekeyed to the hook type ("page")
//! let event = HookEvent::from_call(
//!     "page.create:after",
//!     &signature,
//!     &[json!({"slug": "home"}), json!({"title": "Home"})],
//! )?;
//!
//! assert_eq!(event.kind(), "page");
//! assert_eq!(event.state(), "after");
//!
//! // Subscribers registered against "page:after" match any action on page
//! assert_eq!(event.wildcard(), Some("page:after".to_string()));
//!
//! // At most one callback of a promise chain fires per event
//! event
//!     .promise("create", |args| println!("created: {:?}", args))
//!     .promise("delete", |args| println!("deleted: {:?}", args));
//! # Ok::<(), leafcms_hooks::HookError>(())
//! ```
//!
//! # Naming Grammar
//!
//! Hook names follow `type[.action]:state`, e.g. `page.create:after` or
//! `site:loaded`. The grammar is a public contract consumed by extensions;
//! internally names are parsed once, at ingestion, into [`HookName`].
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T>`, an alias for
//! `std::result::Result<T, HookError>`. The only hard failure is a malformed
//! hook name at construction; binding and lookups are total.
//!
//! # Thread Safety
//!
//! The core performs no I/O and holds no shared mutable state. Events are not
//! shared across concurrent callers: each firing constructs its own instance,
//! and `promise` callbacks execute synchronously on the calling thread.

pub mod arguments;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod name;

// Re-export public types
pub use arguments::{HookArguments, Signature, RECEIVER_PARAM};
pub use dispatch::ActionRouter;
pub use error::{HookError, Result};
pub use event::HookEvent;
pub use name::HookName;
