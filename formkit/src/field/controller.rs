//! The per-field lifecycle state machine.
//!
//! `FieldController` owns a field's values, policy and interaction state. It
//! never calls out: every transition returns the [`Effects`] it produced and
//! the caller decides how to deliver them. This keeps callbacks out of any
//! lock the caller might hold.

use std::fmt;

use log::{debug, trace};

use super::{FieldId, FieldKind, FieldProps, Transform};
use crate::validation::{ValidationEntry, ValidationPolicy, Verdict};

/// Where a field is in its edit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPhase {
    /// Mounted, never committed.
    #[default]
    Pristine,
    /// The user is typing; the display value tracks raw keystrokes.
    Editing,
    /// The latest commit produced the current verdict.
    Committed,
}

/// A fresh verdict, as delivered to the owner's `on_validation` handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEvent {
    pub field_id: FieldId,
    pub has_interacted: bool,
    pub is_valid: bool,
    pub message: Option<String>,
}

/// Notifications produced by one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Effects<V> {
    /// New value for the owner's `on_change` handler
    pub change: Option<V>,
    /// Verdict for the owner's `on_validation` handler
    pub validation: Option<ValidationEvent>,
    /// Entry to report to the aggregator
    pub report: Option<ValidationEntry>,
}

impl<V> Effects<V> {
    /// Effects of a transition that changed nothing observable.
    pub fn none() -> Self {
        Self {
            change: None,
            validation: None,
            report: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.change.is_none() && self.validation.is_none() && self.report.is_none()
    }
}

impl<V> Default for Effects<V> {
    fn default() -> Self {
        Self::none()
    }
}

/// Lifecycle controller for one field.
///
/// # Transitions
///
/// - [`mount`](Self::mount): silent validation, reported with
///   `has_interacted = false` so the aggregator knows every field.
/// - [`set_props`](Self::set_props): new owner props. Emits nothing unless
///   the value or the verdict changed.
/// - [`edit`](Self::edit): keystroke. Display tracks input, owner hears the
///   new value, the aggregator only hears about it after a first commit.
/// - [`commit`](Self::commit): blur. Settles and formats the value, marks the
///   field as interacted and reports.
/// - [`focus`](Self::focus): applies `parse` for editing. No validation.
pub struct FieldController<K: FieldKind> {
    id: FieldId,
    kind: K,
    policy: ValidationPolicy,
    format: Option<Transform<K::Value>>,
    parse: Option<Transform<K::Value>>,
    read_only: bool,
    /// Value the owner knows about
    raw_value: K::Value,
    /// Value the control shows
    display_value: K::Value,
    /// Last value passed to `on_change`
    last_notified: K::Value,
    phase: FieldPhase,
    has_interacted: bool,
    verdict: Verdict,
    /// Last entry handed to the aggregator
    reported: Option<ValidationEntry>,
}

impl<K: FieldKind> FieldController<K> {
    /// Create a controller from its initial props and run the mount pass.
    pub fn mount(id: FieldId, kind: K, props: &FieldProps<K::Value>) -> (Self, Effects<K::Value>) {
        let raw_value = props.value.clone();
        let mut controller = Self {
            id,
            policy: props.policy().wording(kind.required_wording()),
            format: props.format.clone(),
            parse: props.parse.clone().or_else(|| kind.default_parse()),
            read_only: props.read_only,
            display_value: raw_value.clone(),
            last_notified: raw_value.clone(),
            raw_value,
            kind,
            phase: FieldPhase::Pristine,
            has_interacted: false,
            verdict: Verdict::Valid,
            reported: None,
        };
        controller.display_value = controller.formatted(&controller.raw_value);
        controller.verdict = controller.evaluate();

        debug!(
            "Field {} mounted ({}): valid={}",
            id,
            controller.policy.description,
            controller.verdict.is_valid()
        );

        let effects = Effects {
            change: None,
            validation: Some(controller.event()),
            report: Some(controller.report()),
        };
        (controller, effects)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// The value as the owner knows it.
    pub fn value(&self) -> &K::Value {
        &self.raw_value
    }

    /// The value as the control shows it.
    pub fn display_value(&self) -> &K::Value {
        &self.display_value
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    pub fn message(&self) -> Option<&str> {
        self.verdict.message()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply new props from the owner.
    pub fn set_props(&mut self, props: &FieldProps<K::Value>) -> Effects<K::Value> {
        self.policy = props.policy().wording(self.kind.required_wording());
        self.format = props.format.clone();
        self.parse = props.parse.clone().or_else(|| self.kind.default_parse());
        self.read_only = props.read_only;

        let value_changed = props.value != self.raw_value;
        if value_changed {
            trace!("Field {}: external value {:?}", self.id, props.value);
            self.raw_value = props.value.clone();
            self.display_value = self.formatted(&self.raw_value);
        }
        self.revalidate(value_changed, false)
    }

    /// Replace the kind (for example with a new option list).
    ///
    /// A value the new kind no longer accepts is substituted and the owner is
    /// told about the substitution even before the first commit, since it
    /// still holds the old value.
    pub fn set_kind(&mut self, kind: K) -> Effects<K::Value> {
        self.kind = kind;
        self.policy.wording = self.kind.required_wording();

        let substitute = self.kind.reconcile(&self.raw_value);
        let value_changed = match substitute {
            Some(value) => {
                debug!("Field {}: value substituted with {:?}", self.id, value);
                self.raw_value = value;
                self.display_value = self.formatted(&self.raw_value);
                true
            }
            None => false,
        };
        self.revalidate(value_changed, value_changed)
    }

    /// Handle a keystroke-level change.
    pub fn edit(&mut self, value: K::Value) -> Effects<K::Value> {
        if self.read_only {
            return Effects::none();
        }

        self.phase = FieldPhase::Editing;
        self.raw_value = value.clone();
        self.display_value = value;
        self.verdict = self.evaluate();

        let mut effects = Effects {
            change: self.take_change(),
            ..Effects::none()
        };
        if self.has_interacted {
            effects.validation = Some(self.event());
            effects.report = Some(self.report());
        }
        effects
    }

    /// Handle a commit (blur) with the control's current input.
    pub fn commit(&mut self, value: K::Value) -> Effects<K::Value> {
        if self.read_only {
            return Effects::none();
        }

        let settled = self.kind.settle(value);
        self.raw_value = self.formatted(&settled);
        self.display_value = self.raw_value.clone();
        self.verdict = self.evaluate();
        self.has_interacted = true;
        self.phase = FieldPhase::Committed;

        debug!(
            "Field {} committed: valid={}",
            self.id,
            self.verdict.is_valid()
        );

        Effects {
            change: self.take_change(),
            validation: Some(self.event()),
            report: Some(self.report()),
        }
    }

    /// Commit whatever the control currently shows.
    pub fn touch(&mut self) -> Effects<K::Value> {
        let value = self.display_value.clone();
        self.commit(value)
    }

    /// Handle focus: show the parsed, editable form of the value.
    ///
    /// Returns whether the display value changed.
    pub fn focus(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let Some(parse) = &self.parse else {
            return false;
        };
        let parsed = parse(&self.display_value);
        if parsed == self.display_value {
            return false;
        }
        self.display_value = parsed;
        true
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn formatted(&self, value: &K::Value) -> K::Value {
        match &self.format {
            Some(format) => format(value),
            None => value.clone(),
        }
    }

    fn evaluate(&self) -> Verdict {
        self.policy
            .evaluate(&self.kind.normalize(&self.display_value))
    }

    fn take_change(&mut self) -> Option<K::Value> {
        if self.raw_value == self.last_notified {
            return None;
        }
        self.last_notified = self.raw_value.clone();
        Some(self.raw_value.clone())
    }

    /// Re-run validation after an external change.
    ///
    /// The aggregator is compared against what it was last told, not against
    /// the previous verdict: an edit before the first commit changes the
    /// verdict without reporting it.
    fn revalidate(&mut self, value_changed: bool, announce: bool) -> Effects<K::Value> {
        let previous = std::mem::take(&mut self.verdict);
        self.verdict = self.evaluate();
        let verdict_changed = previous != self.verdict;
        let report_stale = self.reported.as_ref() != Some(&self.entry());

        if !value_changed && !verdict_changed && !report_stale {
            return Effects::none();
        }

        let mut effects = Effects::none();
        if report_stale || self.has_interacted {
            effects.report = Some(self.report());
        }
        if self.has_interacted {
            effects.validation = Some(self.event());
        }
        if value_changed && (announce || self.has_interacted) {
            effects.change = self.take_change();
        } else if value_changed {
            self.last_notified = self.raw_value.clone();
        }
        effects
    }

    fn event(&self) -> ValidationEvent {
        ValidationEvent {
            field_id: self.id,
            has_interacted: self.has_interacted,
            is_valid: self.verdict.is_valid(),
            message: self.verdict.message().map(str::to_string),
        }
    }

    /// Build the current entry and remember it as reported.
    fn report(&mut self) -> ValidationEntry {
        let entry = self.entry();
        self.reported = Some(entry.clone());
        entry
    }

    fn entry(&self) -> ValidationEntry {
        ValidationEntry {
            field_id: self.id,
            has_interacted: self.has_interacted,
            message: self.verdict.message().map(str::to_string),
        }
    }
}

impl<K: FieldKind> fmt::Debug for FieldController<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldController")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("policy", &self.policy)
            .field("read_only", &self.read_only)
            .field("raw_value", &self.raw_value)
            .field("display_value", &self.display_value)
            .field("phase", &self.phase)
            .field("has_interacted", &self.has_interacted)
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}
