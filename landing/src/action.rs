//! Call-to-action targets.
//!
//! An [`ActionTarget`] is either an in-page callback or an external link.
//! The enum makes "both" and "neither" unrepresentable; loosely-typed
//! inputs go through [`ActionTarget::resolve`], where the callback wins.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// Zero-argument in-page action, cheap to clone and share between CTAs.
#[derive(Clone)]
pub struct ActionCallback(Arc<dyn Fn() + Send + Sync>);

impl ActionCallback {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the action synchronously.
    pub fn invoke(&self) {
        (self.0)()
    }

    /// Whether two handles share the same underlying closure.
    pub fn same_as(&self, other: &ActionCallback) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ActionCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionCallback(..)")
    }
}

/// Resolved destination of a CTA activation.
#[derive(Clone, Debug)]
pub enum ActionTarget {
    /// Invoke an in-page action, e.g. scroll to the offer.
    Callback(ActionCallback),
    /// Open the URL in a new, opener-less browsing context.
    ExternalLink(String),
}

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// The callback ran.
    Invoked,
    /// Navigation is left to the anchor element; nothing was invoked.
    Navigate(&'a str),
}

impl ActionTarget {
    /// Shorthand for [`ActionTarget::Callback`].
    pub fn callback(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Callback(ActionCallback::new(f))
    }

    /// Shorthand for [`ActionTarget::ExternalLink`].
    pub fn link(url: impl Into<String>) -> Self {
        Self::ExternalLink(url.into())
    }

    /// Build a target from optional parts. The callback takes precedence
    /// when both are set; `None` when neither is.
    pub fn resolve(callback: Option<ActionCallback>, href: Option<String>) -> Option<Self> {
        match (callback, href) {
            (Some(callback), _) => Some(Self::Callback(callback)),
            (None, Some(href)) => Some(Self::ExternalLink(href)),
            (None, None) => None,
        }
    }

    /// Handle a press. Callbacks run here; links only report their URL.
    pub fn activate(&self) -> Activation<'_> {
        match self {
            Self::Callback(callback) => {
                debug!("cta activated: in-page callback");
                callback.invoke();
                Activation::Invoked
            }
            Self::ExternalLink(url) => {
                debug!(%url, "cta activated: external link");
                Activation::Navigate(url)
            }
        }
    }

    /// URL of an external link target.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::ExternalLink(url) => Some(url),
            Self::Callback(_) => None,
        }
    }
}
