//! Field lifecycle shared by every input-like component.
//!
//! Each component is a [`Field`] parameterised by a [`FieldKind`]. The kind
//! supplies the per-component strategy (how values normalise, how a commit
//! settles them, how option changes are reconciled) while the
//! [`FieldController`] decides when validation runs and what gets notified.

mod controller;
mod props;
mod state;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use controller::{Effects, FieldController, FieldPhase, ValidationEvent};
pub use props::{ChangeHandler, FieldProps, Transform, ValidationHandler};
pub use state::Field;

use crate::validation::{FieldValue, RequiredWording};

/// Unique identifier for a field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl FieldId {
    /// Allocate a new process-unique id.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Per-component validation strategy.
///
/// Implementors describe how their value type maps onto the shared
/// validation policy. Everything else about the lifecycle is common.
pub trait FieldKind: fmt::Debug + Send + Sync + 'static {
    /// The value the owner reads and writes.
    type Value: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Reduce a value to the form the policy compares.
    fn normalize(&self, value: &Self::Value) -> FieldValue;

    /// Settle a committed value before `format` is applied.
    fn settle(&self, value: Self::Value) -> Self::Value {
        value
    }

    /// Replacement for a value that is no longer acceptable after this kind
    /// changed (for example, its options). `None` keeps the value.
    fn reconcile(&self, _value: &Self::Value) -> Option<Self::Value> {
        None
    }

    /// Phrasing of the default required message.
    fn required_wording(&self) -> RequiredWording {
        RequiredWording::Value
    }

    /// `parse` transform used when the owner does not supply one.
    fn default_parse(&self) -> Option<Transform<Self::Value>> {
        None
    }
}
