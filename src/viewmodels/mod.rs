pub mod home_viewmodel;
pub mod leaderboard_viewmodel;
pub mod ranking;

pub use home_viewmodel::{ClaimRefresh, HomeViewModel, TabData};
pub use leaderboard_viewmodel::LeaderboardViewModel;
