// ============================================================================
// NEXORAND WEB - Cliente del leaderboard de puntos (Yew + WASM)
// ============================================================================
// Capas:
// - Services: SOLO comunicación API (ApiClient + traits)
// - State: AuthStore reactivo sobre el storage del navegador
// - ViewModels: lógica async por vista, devuelven valores
// - Stores: estado de cada vista (use_reducer)
// - Components / Views: render
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use app::App;

use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y montaje de la app
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("🚀 Nexorand - API en {}", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
