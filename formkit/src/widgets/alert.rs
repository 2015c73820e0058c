//! Alert listing a form's outstanding validation errors.

use crate::validation::{Aggregator, ErrorDisplay};

/// Error summary for a form.
///
/// Which entries appear is controlled by an [`ErrorDisplay`] gate: by default
/// only fields the user has committed are listed, `Always` lists every
/// outstanding error.
#[derive(Debug, Clone)]
pub struct Alert {
    aggregator: Aggregator,
    title: Option<String>,
    display: ErrorDisplay,
    limit: Option<usize>,
}

impl Alert {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            title: None,
            display: ErrorDisplay::default(),
            limit: None,
        }
    }

    /// Set a heading shown above the messages.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Choose which fields' errors are listed.
    pub fn display(mut self, display: ErrorDisplay) -> Self {
        self.display = display;
        self
    }

    /// List at most `limit` messages.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn heading(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Messages to render, in field registration order.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.aggregator.visible_errors(self.display);
        if let Some(limit) = self.limit {
            messages.truncate(limit);
        }
        messages
    }

    /// Number of errors hidden by the limit.
    pub fn overflow(&self) -> usize {
        let total = self.aggregator.visible_errors(self.display).len();
        total.saturating_sub(self.limit.unwrap_or(total))
    }

    /// Whether there is anything to show.
    pub fn is_visible(&self) -> bool {
        !self.messages().is_empty()
    }
}
