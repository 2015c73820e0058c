/// When a validation message should be shown.
///
/// Fields default to [`ErrorDisplay::Interacted`] so a pristine form does not
/// greet the user with errors. Aggregate consumers pick their own gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Show the message once the user has committed the field (default).
    #[default]
    Interacted,
    /// Show the message whenever the value is invalid.
    Always,
    /// Never show the message.
    None,
}

impl ErrorDisplay {
    /// Whether a message is shown for a field in the given interaction state.
    pub fn shows(self, has_interacted: bool) -> bool {
        match self {
            Self::Interacted => has_interacted,
            Self::Always => true,
            Self::None => false,
        }
    }
}
