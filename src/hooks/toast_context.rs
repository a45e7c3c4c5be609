// ============================================================================
// TOAST CONTEXT - Notificaciones transitorias (éxito / error)
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::Toaster;
use crate::config::CONFIG;
use crate::stores::{Toast, ToastAction, ToastStore, ToastVariant};

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub store: UseReducerHandle<ToastStore>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let store = use_reducer(ToastStore::default);
    let context = ToastContext { store };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <Toaster />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct UseToastHandle {
    dispatcher: UseReducerDispatcher<ToastStore>,
}

impl UseToastHandle {
    pub fn success(&self, title: impl Into<String>) {
        self.show(Toast::new(title, ToastVariant::Default, CONFIG.toast_duration_ms));
    }

    pub fn error(&self, title: impl Into<String>) {
        self.show(Toast::new(title, ToastVariant::Destructive, CONFIG.toast_duration_ms));
    }

    fn show(&self, toast: Toast) {
        let id = toast.id;
        let duration = toast.duration_ms;
        self.dispatcher.dispatch(ToastAction::Push(toast));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(duration, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast() requires a <ToastProvider> ancestor");
    UseToastHandle {
        dispatcher: context.store.dispatcher(),
    }
}
