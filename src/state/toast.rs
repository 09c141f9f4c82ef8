#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Kind of transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible notifications.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Enqueue a notification and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the notification with the given id, if still visible.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}
