use super::Generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

/// The status line under the signup form.
///
/// Every `show` returns a token for the hide timer it arms. Showing a new
/// message invalidates earlier tokens, so a timer started for an older
/// message cannot hide a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusState {
    message: Option<StatusMessage>,
    visible: bool,
    timers: Generation,
}

impl StatusState {
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.message = Some(message);
        self.visible = true;
        self.timers.next()
    }

    /// Hides the message if `token` belongs to the one currently shown.
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.is_visible() && self.timers.is_current(token) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.message.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn css_class(&self) -> String {
        match (&self.message, self.visible) {
            (Some(message), true) => message.kind.as_class().to_string(),
            (Some(message), false) => format!("{} hidden", message.kind.as_class()),
            (None, _) => "hidden".to_string(),
        }
    }
}
