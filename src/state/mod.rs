// ============================================================================
// STATE MODULE - Estado compartido con notificaciones
// ============================================================================

pub mod auth_store;
pub mod reactivity;

pub use auth_store::AuthStore;
pub use reactivity::{ReactiveState, Subscription};
