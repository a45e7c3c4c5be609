// ============================================================================
// NAVBAR - Marca, enlaces y menú de usuario
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::UserDropdown;
use crate::hooks::use_auth;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();

    let links = match &auth.session.user {
        Some(user) => html! {
            <>
                <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                <Link<Route> to={Route::Leaderboard} classes="nav-link">{"Leaderboard"}</Link<Route>>
                <UserDropdown user={user.clone()} />
            </>
        },
        None => html! {
            <>
                <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="nav-link">{"Register"}</Link<Route>>
            </>
        },
    };

    html! {
        <header class="navbar">
            <Link<Route> to={Route::Root} classes="navbar-brand">{"Nexorand"}</Link<Route>>
            <nav class="navbar-links">{links}</nav>
        </header>
    }
}
