#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One notice in the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Non-blocking notice stack. Replaces modal alerts: pages push here for
/// action failures, validation messages, and empty-result notices.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, text)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
