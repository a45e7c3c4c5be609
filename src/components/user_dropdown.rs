// ============================================================================
// USER DROPDOWN - Perfil actual y cierre de sesión
// ============================================================================
// Al abrirse pide el perfil al servidor para mostrar los puntos al día.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::UserProfile;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct UserDropdownProps {
    pub user: UserProfile,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let open = use_state(|| false);

    let on_toggle = {
        let open = open.clone();
        let store = auth.store.clone();
        let api = auth.api.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = !*open;
            open.set(opening);
            if opening {
                let store = store.clone();
                let api = api.clone();
                spawn_local(async move {
                    store.refresh_user(&api).await;
                });
            }
        })
    };

    let on_logout = {
        let open = open.clone();
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let user = &props.user;
    let initial = user
        .display_name()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <div class="user-dropdown">
            <button type="button" class="avatar" onclick={on_toggle}>{initial}</button>
            if *open {
                <div class="dropdown-menu">
                    <div class="dropdown-header">
                        <p class="dropdown-name">{&user.first_name}</p>
                        <p class="dropdown-email">{&user.email}</p>
                    </div>
                    <div class="dropdown-item">
                        {format!("Points: {}", user.points)}
                    </div>
                    <button type="button" class="dropdown-item logout" onclick={on_logout}>
                        {"Log out"}
                    </button>
                </div>
            }
        </div>
    }
}
