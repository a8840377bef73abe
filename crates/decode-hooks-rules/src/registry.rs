//! Hook registry and composition
//!
//! A `Composer` holds an ordered list of hooks and runs them against one
//! (source, destination, value) triple. The first hook that claims the pair
//! decides the result; a hook error aborts the chain.

use std::fmt;
use std::sync::Arc;

use decode_hooks_types::{TypeDescriptor, Value};
use log::trace;
use once_cell::sync::Lazy;

use crate::error::CoerceResult;

/// What a hook did with the value it was handed
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The hook claimed the pair and produced this value
    Coerced(Value),
    /// The hook does not apply; the value is returned untouched
    Passthrough(Value),
}

impl Outcome {
    pub fn is_coerced(&self) -> bool {
        matches!(self, Self::Coerced(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Coerced(v) | Self::Passthrough(v) => v,
        }
    }
}

/// Type alias for hook implementations
pub type HookFn =
    Arc<dyn Fn(&TypeDescriptor, &TypeDescriptor, Value) -> CoerceResult<Outcome> + Send + Sync>;

/// A named coercion hook
#[derive(Clone)]
pub struct Hook {
    name: &'static str,
    func: HookFn,
}

impl Hook {
    /// Wrap a hook implementation
    pub fn new<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(&TypeDescriptor, &TypeDescriptor, Value) -> CoerceResult<Outcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the hook on one triple
    pub fn call(
        &self,
        source: &TypeDescriptor,
        dest: &TypeDescriptor,
        value: Value,
    ) -> CoerceResult<Outcome> {
        (self.func)(source, dest, value)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").field("name", &self.name).finish()
    }
}

static SHARED: Lazy<Composer> = Lazy::new(Composer::all);

/// Ordered chain of hooks
#[derive(Debug, Clone, Default)]
pub struct Composer {
    hooks: Vec<Hook>,
}

impl Composer {
    /// Create an empty composer
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with every built-in hook, in registration order
    pub fn all() -> Self {
        Self {
            hooks: crate::rules::all(),
        }
    }

    /// Process-wide composer with every built-in hook
    pub fn shared() -> &'static Composer {
        &SHARED
    }

    /// Append a hook
    pub fn with(mut self, hook: Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Register a hook implementation at the end of the chain
    pub fn register<F>(&mut self, name: &'static str, func: F)
    where
        F: Fn(&TypeDescriptor, &TypeDescriptor, Value) -> CoerceResult<Outcome>
            + Send
            + Sync
            + 'static,
    {
        self.hooks.push(Hook::new(name, func));
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run the chain on one triple
    ///
    /// Returns the value of the first hook that claims the pair, or `value`
    /// unchanged if none does. The first hook error is returned as-is.
    pub fn apply(
        &self,
        source: &TypeDescriptor,
        dest: &TypeDescriptor,
        value: Value,
    ) -> CoerceResult<Value> {
        let mut value = value;
        for hook in &self.hooks {
            match hook.call(source, dest, value)? {
                Outcome::Coerced(coerced) => {
                    trace!("hook {} coerced {} -> {}", hook.name, source, dest);
                    return Ok(coerced);
                }
                Outcome::Passthrough(untouched) => value = untouched,
            }
        }
        Ok(value)
    }
}
