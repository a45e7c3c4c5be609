// ============================================================================
// TOAST STORE - Notificaciones transitorias
// ============================================================================

use std::rc::Rc;

use uuid::Uuid;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub variant: ToastVariant,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(title: impl Into<String>, variant: ToastVariant, duration_ms: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            variant,
            duration_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastStore {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastStore {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}
