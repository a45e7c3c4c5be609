pub mod home;
pub mod leaderboard;
pub mod login;
pub mod register;

pub use home::HomeView;
pub use leaderboard::LeaderboardView;
pub use login::LoginView;
pub use register::RegisterView;
