// ============================================================================
// REGISTER VIEW
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::RegisterData;
use crate::router::Route;
use crate::views::login::MISSING_FIELDS_MESSAGE;

pub fn validate_registration(
    first_name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterData, &'static str> {
    let (first_name, username, email) = (first_name.trim(), username.trim(), email.trim());
    if first_name.is_empty() || username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address");
    }
    Ok(RegisterData {
        first_name: first_name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let first_name_ref = use_node_ref();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let refs = (
            first_name_ref.clone(),
            username_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
        );
        let error = error.clone();
        let submitting = submitting.clone();
        let store = auth.store.clone();
        let api = auth.api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = match validate_registration(
                &input_value(&refs.0),
                &input_value(&refs.1),
                &input_value(&refs.2),
                &input_value(&refs.3),
            ) {
                Ok(data) => data,
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
                match store.register(&api, &data).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [REGISTER] {}", e);
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
                <h1>{"Register"}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    if let Some(message) = &*error {
                        <div class="alert alert-destructive" role="alert">{message}</div>
                    }
                    <div class="form-group">
                        <label for="firstName">{"First Name"}</label>
                        <input type="text" id="firstName" name="firstName" ref={first_name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" name="username" ref={username_ref} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email" ref={email_ref} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" ref={password_ref} />
                    </div>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Registering..." } else { "Register" } }
                    </button>
                </form>
                <p class="auth-footer">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        assert_eq!(
            validate_registration("", "ann", "a@b.c", "pw"),
            Err(MISSING_FIELDS_MESSAGE)
        );
        assert_eq!(
            validate_registration("Ann", "ann", "a@b.c", ""),
            Err(MISSING_FIELDS_MESSAGE)
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        assert!(validate_registration("Ann", "ann", "ann.example.com", "pw").is_err());
    }

    #[test]
    fn valid_form_builds_register_payload() {
        let data = validate_registration(" Ann ", "ann", "ann@example.com", "pw").unwrap();
        assert_eq!(data.first_name, "Ann");
        assert_eq!(data.email, "ann@example.com");
    }
}
