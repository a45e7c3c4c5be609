// ============================================================================
// ROUTER - Tabla de rutas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ProtectedRoute;
use crate::views::{HomeView, LeaderboardView, LoginView, RegisterView};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/home")]
    Home,
    #[at("/leaderboard")]
    Leaderboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        // Raíz y rutas desconocidas terminan en /home
        Route::Root | Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Home => html! {
            <ProtectedRoute><HomeView /></ProtectedRoute>
        },
        Route::Leaderboard => html! {
            <ProtectedRoute><LeaderboardView /></ProtectedRoute>
        },
    }
}
