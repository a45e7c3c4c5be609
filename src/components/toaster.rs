use yew::prelude::*;

use crate::hooks::ToastContext;
use crate::stores::{ToastAction, ToastVariant};

/// Pila de toasts en la esquina superior derecha
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="toaster">
            { for context.store.toasts.iter().map(|toast| {
                let id = toast.id;
                let dispatcher = context.store.dispatcher();
                let on_dismiss = Callback::from(move |_: MouseEvent| {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                let variant = match toast.variant {
                    ToastVariant::Default => "toast-default",
                    ToastVariant::Destructive => "toast-destructive",
                };
                html! {
                    <div key={id.to_string()} class={classes!("toast", variant)} onclick={on_dismiss}>
                        {&toast.title}
                    </div>
                }
            }) }
        </div>
    }
}
