// ============================================================================
// PROTECTED ROUTE - Bloquea vistas privadas hasta conocer la sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::Redirect;

use crate::hooks::use_auth;
use crate::models::Session;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// La sesión todavía se está resolviendo
    Pending,
    RedirectToLogin,
    Admit,
}

pub fn guard_decision(session: &Session) -> GuardDecision {
    if session.loading {
        GuardDecision::Pending
    } else if session.user.is_none() {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Admit
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth();

    match guard_decision(&auth.session) {
        GuardDecision::Pending => html! {
            <div class="route-loading">{"Loading..."}</div>
        },
        GuardDecision::RedirectToLogin => {
            log::info!("🔒 [GUARD] Sin sesión, redirigiendo a /login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        GuardDecision::Admit => html! { <>{props.children.clone()}</> },
    }
}
