use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use super::{
    ChangeHandler, Effects, FieldController, FieldId, FieldKind, FieldPhase, FieldProps,
    ValidationHandler,
};
use crate::validation::{ErrorDisplay, Validatable, ValidationReporter, Verdict};

/// Internal state for a Field
struct FieldInner<K: FieldKind> {
    controller: FieldController<K>,
    on_change: Option<ChangeHandler<K::Value>>,
    on_validation: Option<ValidationHandler>,
    /// Aggregator capability (None once unmounted)
    reporter: Option<Arc<dyn ValidationReporter>>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

impl<K: FieldKind> Drop for FieldInner<K> {
    fn drop(&mut self) {
        if let Some(reporter) = self.reporter.take() {
            reporter.unregister(self.controller.id());
        }
    }
}

/// A mounted form field with shared state.
///
/// `Field` is a cheap-to-clone handle; clones share the same state. The host
/// layer forwards its events (`edit`, `commit`, `focus`, `set_props`) and
/// reads back what to render (`display_value`, `visible_message`).
///
/// Callbacks and aggregator reports are delivered after the internal lock is
/// released, so handlers may read the field or the aggregator freely. When
/// the last handle is dropped the field unregisters from its aggregator.
///
/// Concrete components are aliases of this type, see
/// [`crate::widgets`].
///
/// # Example
///
/// ```ignore
/// let form = Aggregator::new();
/// let name = TextInput::new(
///     FieldProps::new(String::new()).description("Name").required(true),
///     Some(form.reporter()),
/// );
///
/// name.edit("Bob");
/// name.commit("Bob");
/// assert!(form.is_valid());
/// ```
pub struct Field<K: FieldKind> {
    /// Unique identifier for this field instance
    id: FieldId,
    /// Internal state
    inner: Arc<RwLock<FieldInner<K>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl<K: FieldKind> Field<K> {
    /// Mount a field: validate the initial value and report it.
    pub fn mount(
        kind: K,
        props: FieldProps<K::Value>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Self {
        let id = FieldId::new();
        let (controller, effects) = FieldController::mount(id, kind, &props);
        let field = Self {
            id,
            inner: Arc::new(RwLock::new(FieldInner {
                controller,
                on_change: props.on_change,
                on_validation: props.on_validation,
                reporter,
                error_display: ErrorDisplay::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        };
        field.dispatch(effects);
        field
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Read the controller under the lock.
    pub fn with_controller<R>(&self, f: impl FnOnce(&FieldController<K>) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard.controller))
    }

    /// Get the value as the owner knows it.
    pub fn value(&self) -> K::Value {
        self.with_controller(|c| c.value().clone())
            .unwrap_or_default()
    }

    /// Get the value the control should show.
    pub fn display_value(&self) -> K::Value {
        self.with_controller(|c| c.display_value().clone())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> FieldPhase {
        self.with_controller(FieldController::phase)
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.with_controller(FieldController::is_valid)
            .unwrap_or(false)
    }

    /// Get the current validation message, whether or not it is shown.
    pub fn message(&self) -> Option<String> {
        self.with_controller(|c| c.message().map(str::to_string))
            .flatten()
    }

    pub fn is_read_only(&self) -> bool {
        self.with_controller(FieldController::is_read_only)
            .unwrap_or(false)
    }

    /// Check if this field still reports to an aggregator.
    pub fn is_mounted(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.reporter.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Host events
    // -------------------------------------------------------------------------

    /// The owner re-rendered with new props.
    pub fn set_props(&self, props: FieldProps<K::Value>) {
        self.update(move |inner| {
            let effects = inner.controller.set_props(&props);
            inner.on_change = props.on_change;
            inner.on_validation = props.on_validation;
            effects
        });
    }

    /// The user changed the input without committing it.
    pub fn edit(&self, value: impl Into<K::Value>) {
        let value = value.into();
        self.update(|inner| inner.controller.edit(value));
    }

    /// The user committed the input (blur).
    pub fn commit(&self, value: impl Into<K::Value>) {
        let value = value.into();
        self.update(|inner| inner.controller.commit(value));
    }

    /// The control received focus.
    pub fn focus(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.controller.focus()
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Commit the current display value.
    pub fn touch(&self) {
        self.update(|inner| inner.controller.touch());
    }

    /// Replace the field kind, reconciling the value if needed.
    pub fn set_kind(&self, kind: K) {
        self.update(|inner| inner.controller.set_kind(kind));
    }

    /// Remove this field from its aggregator. Later events still update the
    /// field but are no longer reported.
    pub fn unmount(&self) {
        let reporter = self
            .inner
            .write()
            .ok()
            .and_then(|mut guard| guard.reporter.take());
        if let Some(reporter) = reporter {
            debug!("Field {} unmounted", self.id);
            reporter.unregister(self.id);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation display
    // -------------------------------------------------------------------------

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Run a transition under the lock, then deliver its effects.
    fn update(&self, f: impl FnOnce(&mut FieldInner<K>) -> Effects<K::Value>) {
        let effects = match self.inner.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(_) => return,
        };
        self.dirty.store(true, Ordering::SeqCst);
        self.dispatch(effects);
    }

    fn dispatch(&self, effects: Effects<K::Value>) {
        if effects.is_empty() {
            return;
        }

        let (on_change, on_validation, reporter) = match self.inner.read() {
            Ok(guard) => (
                guard.on_change.clone(),
                guard.on_validation.clone(),
                guard.reporter.clone(),
            ),
            Err(_) => return,
        };

        if let (Some(entry), Some(reporter)) = (effects.report, reporter) {
            reporter.report_validation(entry.field_id, entry.has_interacted, entry.message);
        }
        if let (Some(value), Some(handler)) = (effects.change, on_change) {
            handler(&value);
        }
        if let (Some(event), Some(handler)) = (effects.validation, on_validation) {
            handler(&event);
        }
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<K: FieldKind> std::fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Field");
        s.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            s.field("controller", &guard.controller);
        }
        s.finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl<K: FieldKind> Validatable for Field<K> {
    fn field_id(&self) -> FieldId {
        self.id
    }

    fn verdict(&self) -> Verdict {
        self.with_controller(|c| c.verdict().clone())
            .unwrap_or_default()
    }

    fn has_interacted(&self) -> bool {
        self.with_controller(FieldController::has_interacted)
            .unwrap_or(false)
    }

    fn touch(&self) {
        Field::touch(self)
    }

    fn error_display(&self) -> ErrorDisplay {
        Field::error_display(self)
    }
}
