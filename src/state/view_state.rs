/// Request lifecycle of a view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A one-line message shown under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Warning }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}
