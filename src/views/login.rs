// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::LoginCredentials;
use crate::router::Route;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Validación local antes de tocar la red
pub fn validate_login(username: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let store = auth.store.clone();
        let api = auth.api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let credentials = match validate_login(&input_value(&username_ref), &input_value(&password_ref)) {
                Ok(credentials) => credentials,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            error.set(None);
            submitting.set(true);
            let store = store.clone();
            let api = api.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match store.login(&api, &credentials).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if auth.session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    html! {
        <div class="auth-screen">
            <div class="card auth-card">
                <h1>{"Login"}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    if let Some(message) = &*error {
                        <div class="alert alert-destructive" role="alert">{message}</div>
                    }
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" name="username" ref={username_ref} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" ref={password_ref} />
                    </div>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Login" } }
                    </button>
                </form>
                <p class="auth-footer">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
