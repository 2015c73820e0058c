//! Form-level collection of per-field verdicts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use super::{ErrorDisplay, FieldError, ValidationResult};
use crate::field::FieldId;

/// Capability handed to fields so they can report their verdicts.
///
/// Fields receive this at mount instead of looking their parent up.
pub trait ValidationReporter: Send + Sync {
    /// Insert or update the entry for a field.
    fn report_validation(&self, field_id: FieldId, has_interacted: bool, message: Option<String>);

    /// Remove the entry for a field that went away.
    fn unregister(&self, field_id: FieldId);
}

/// Latest verdict reported by one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEntry {
    pub field_id: FieldId,
    pub has_interacted: bool,
    pub message: Option<String>,
}

#[derive(Debug, Default)]
struct AggregatorInner {
    /// Entries in first-report order
    entries: Vec<ValidationEntry>,
}

impl AggregatorInner {
    fn position(&self, field_id: FieldId) -> Option<usize> {
        self.entries.iter().position(|e| e.field_id == field_id)
    }
}

/// Collects verdicts from every field of a form.
///
/// The aggregator does no validation itself. It folds reported
/// `(field, has_interacted, message)` triples into an ordered table from
/// which form validity and the error list are derived. Cloning is cheap and
/// every clone shares the same table.
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
/// assert!(!form.is_valid());
/// assert_eq!(form.errors(), vec!["Name is required".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    inner: Arc<RwLock<AggregatorInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reporting handle to pass into fields.
    pub fn reporter(&self) -> Arc<dyn ValidationReporter> {
        Arc::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// True iff no entry currently holds a message.
    pub fn is_valid(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.entries.iter().all(|e| e.message.is_none()))
            .unwrap_or(true)
    }

    /// Outstanding messages in first-report order.
    pub fn errors(&self) -> Vec<String> {
        self.visible_errors(ErrorDisplay::Always)
    }

    /// Outstanding messages, filtered by an interaction gate.
    pub fn visible_errors(&self, display: ErrorDisplay) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .entries
                    .iter()
                    .filter(|e| display.shows(e.has_interacted))
                    .filter_map(|e| e.message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All entries in first-report order.
    pub fn entries(&self) -> Vec<ValidationEntry> {
        self.inner
            .read()
            .map(|guard| guard.entries.clone())
            .unwrap_or_default()
    }

    /// Get the entry for a single field.
    pub fn entry(&self, field_id: FieldId) -> Option<ValidationEntry> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .position(field_id)
                .map(|idx| guard.entries[idx].clone())
        })
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.entries.len())
            .unwrap_or(0)
    }

    /// Check if no field has reported yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot the table as a [`ValidationResult`].
    pub fn result(&self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .entries()
            .into_iter()
            .filter_map(|e| {
                e.message.map(|message| FieldError {
                    field_id: e.field_id,
                    has_interacted: e.has_interacted,
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Insert or update a field's entry. Updates keep the original position.
    pub fn report(&self, field_id: FieldId, has_interacted: bool, message: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            let entry = ValidationEntry {
                field_id,
                has_interacted,
                message,
            };
            match guard.position(field_id) {
                Some(idx) if guard.entries[idx] == entry => return,
                Some(idx) => guard.entries[idx] = entry,
                None => guard.entries.push(entry),
            }
            trace!("Aggregator: {} reported", field_id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove a field's entry.
    pub fn remove(&self, field_id: FieldId) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(idx) = guard.position(field_id)
        {
            guard.entries.remove(idx);
            trace!("Aggregator: {} removed", field_id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove every entry.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.entries.is_empty()
        {
            guard.entries.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if any entry changed since the last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl ValidationReporter for Aggregator {
    fn report_validation(&self, field_id: FieldId, has_interacted: bool, message: Option<String>) {
        self.report(field_id, has_interacted, message);
    }

    fn unregister(&self, field_id: FieldId) {
        self.remove(field_id);
    }
}
