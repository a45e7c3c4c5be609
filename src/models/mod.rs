pub mod auth;
pub mod leaderboard;
pub mod user;

pub use auth::{AuthResponse, LoginCredentials, RegisterData, Session, StoredSession};
pub use leaderboard::{
    parse_aggregates, parse_history, parse_peers, resolve_points, ApiEnvelope, HistoryEntry,
    LeaderboardEntry, Peer, PointsRow, RankedPeer, Tab,
};
pub use user::{UserPayload, UserProfile};
