// ============================================================================
// STORES - Estado por vista (use_reducer)
// ============================================================================

pub mod home_store;
pub mod leaderboard_store;
pub mod toast_store;

pub use home_store::{HomeAction, HomeStore};
pub use leaderboard_store::{LeaderboardAction, LeaderboardStore};
pub use toast_store::{Toast, ToastAction, ToastStore, ToastVariant};
