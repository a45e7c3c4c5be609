// ============================================================================
// LEADERBOARD VIEWMODEL - Tabla global e historial por usuario
// ============================================================================

use crate::error::ApiError;
use crate::models::{parse_history, parse_peers, HistoryEntry, RankedPeer};
use crate::services::LeaderboardApi;
use crate::viewmodels::ranking::rank_peers;

pub struct LeaderboardViewModel<A> {
    api: A,
}

impl<A: LeaderboardApi> LeaderboardViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Todos los usuarios, de mayor a menor puntuación
    pub async fn load_users(&self) -> Result<Vec<RankedPeer>, ApiError> {
        let envelope = self.api.get_users().await?;
        if envelope.data.is_null() {
            return Err(ApiError::Validation("Invalid user data format".to_string()));
        }
        Ok(rank_peers(parse_peers(envelope.data)?))
    }

    pub async fn load_history(&self, username: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        let envelope = self.api.get_user_history(username).await?;
        parse_history(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::home_viewmodel::fakes::{users_json, FakeLeaderboardApi};
    use futures::executor::block_on;
    use serde_json::{json, Value};

    #[test]
    fn users_sorted_by_points_descending() {
        let api = FakeLeaderboardApi::with_users(users_json(&[("ann", 5), ("bob", 50), ("cid", 50)]));
        let vm = LeaderboardViewModel::new(api);
        let users = block_on(vm.load_users()).unwrap();
        let order: Vec<&str> = users.iter().map(|u| u.peer.username.as_str()).collect();
        assert_eq!(order, vec!["bob", "cid", "ann"]);
    }

    #[test]
    fn missing_user_data_is_a_validation_error() {
        let vm = LeaderboardViewModel::new(FakeLeaderboardApi::with_users(Value::Null));
        assert!(matches!(block_on(vm.load_users()), Err(ApiError::Validation(_))));
    }

    #[test]
    fn history_passes_through_in_server_order() {
        let api = FakeLeaderboardApi::default();
        *api.history.borrow_mut() = Some(Ok(json!([
            { "date": "2024-05-02T08:00:00Z", "pointsAwarded": 3 },
            { "date": "2024-05-01T08:00:00Z", "pointsAwarded": 9 }
        ])));
        let vm = LeaderboardViewModel::new(api);
        let history = block_on(vm.load_history("bob")).unwrap();
        assert_eq!(history.iter().map(|h| h.points_awarded).collect::<Vec<_>>(), vec![3, 9]);
    }

    #[test]
    fn history_with_an_odd_item_still_loads() {
        let api = FakeLeaderboardApi::default();
        *api.history.borrow_mut() = Some(Ok(json!([
            { "date": "2024-05-01", "pointsAwarded": 5 },
            { "pointsAwarded": 1 }
        ])));
        let vm = LeaderboardViewModel::new(api);
        let history = block_on(vm.load_history("bob")).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].date, None);
    }

    #[test]
    fn non_array_history_is_rejected() {
        let api = FakeLeaderboardApi::default();
        *api.history.borrow_mut() = Some(Ok(json!({ "oops": true })));
        let vm = LeaderboardViewModel::new(api);
        assert!(matches!(block_on(vm.load_history("bob")), Err(ApiError::Validation(_))));
    }
}
