//! Layout chrome and transient notices.
//!
//! DESIGN
//! ======
//! Presentation-only state kept out of the session: the sidebar's collapsed
//! flag (persisted across reloads) and the current notice banner.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::storage;

const SIDEBAR_KEY: &str = "gradnote_sidebar_collapsed";

/// How long a notice stays on screen.
pub const NOTICE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

/// One banner message. `seq` distinguishes repeats of the same text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl UiState {
    /// Defaults plus the persisted sidebar preference.
    pub fn restore() -> Self {
        Self {
            sidebar_collapsed: storage::read_flag(SIDEBAR_KEY).unwrap_or(false),
            ..Self::default()
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        storage::write_flag(SIDEBAR_KEY, self.sidebar_collapsed);
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(NoticeKind::Success, message.into())
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(NoticeKind::Error, message.into())
    }

    /// Hide the notice, but only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: String) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, message, seq: self.notice_seq });
        self.notice_seq
    }
}
