// ============================================================================
// LEADERBOARD STORE - Estado de la vista Leaderboard (use_reducer)
// ============================================================================
// Los errores de red/validación terminan aquí como mensaje de alerta y datos
// vacíos; nunca suben al árbol de componentes.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::error::ApiError;
use crate::models::{HistoryEntry, RankedPeer};

pub const USERS_ERROR_MESSAGE: &str = "Failed to load users. Please try again later.";

pub fn history_error_message(username: &str) -> String {
    format!("Failed to load history for {}. Please try again later.", username)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LeaderboardStore {
    pub users: Vec<RankedPeer>,
    pub selected_user: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub modal_open: bool,
    pub error: Option<String>,
}

pub enum LeaderboardAction {
    UsersLoaded(Result<Vec<RankedPeer>, ApiError>),
    HistoryRequested,
    HistoryLoaded {
        username: String,
        result: Result<Vec<HistoryEntry>, ApiError>,
    },
    CloseModal,
}

impl Reducible for LeaderboardStore {
    type Action = LeaderboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeaderboardAction::UsersLoaded(Ok(users)) => next.users = users,
            LeaderboardAction::UsersLoaded(Err(e)) => {
                log::error!("❌ [LEADERBOARD] Error cargando usuarios: {}", e);
                next.users = Vec::new();
                next.error = Some(USERS_ERROR_MESSAGE.to_string());
            }
            LeaderboardAction::HistoryRequested => next.error = None,
            LeaderboardAction::HistoryLoaded {
                username,
                result: Ok(history),
            } => {
                next.history = history;
                next.selected_user = Some(username);
                next.modal_open = true;
            }
            LeaderboardAction::HistoryLoaded {
                username,
                result: Err(e),
            } => {
                log::error!("❌ [LEADERBOARD] Error cargando historial de {}: {}", username, e);
                next.history = Vec::new();
                next.error = Some(history_error_message(&username));
            }
            LeaderboardAction::CloseModal => {
                next.modal_open = false;
                next.history = Vec::new();
                next.selected_user = None;
                next.error = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_history;
    use serde_json::json;

    #[test]
    fn malformed_history_empties_list_and_shows_alert() {
        let store = Rc::new(LeaderboardStore {
            history: parse_history(json!([{ "date": "2024-01-01T00:00:00Z", "pointsAwarded": 1 }]))
                .unwrap(),
            ..LeaderboardStore::default()
        });
        let result = parse_history(json!({ "not": "a list" }));
        let store = store
            .reduce(LeaderboardAction::HistoryRequested)
            .reduce(LeaderboardAction::HistoryLoaded {
                username: "bob".into(),
                result,
            });

        assert!(store.history.is_empty());
        assert!(!store.modal_open);
        assert_eq!(
            store.error.as_deref(),
            Some("Failed to load history for bob. Please try again later.")
        );
    }

    #[test]
    fn loaded_history_opens_the_dialog() {
        let store = Rc::new(LeaderboardStore::default()).reduce(LeaderboardAction::HistoryLoaded {
            username: "amy".into(),
            result: Ok(Vec::new()),
        });
        assert!(store.modal_open);
        assert_eq!(store.selected_user.as_deref(), Some("amy"));
    }

    #[test]
    fn new_history_request_clears_previous_alert() {
        let store = Rc::new(LeaderboardStore {
            error: Some("old".into()),
            ..LeaderboardStore::default()
        })
        .reduce(LeaderboardAction::HistoryRequested);
        assert_eq!(store.error, None);
    }

    #[test]
    fn closing_resets_dialog_state() {
        let store = Rc::new(LeaderboardStore::default())
            .reduce(LeaderboardAction::HistoryLoaded {
                username: "amy".into(),
                result: Ok(Vec::new()),
            })
            .reduce(LeaderboardAction::CloseModal);
        assert!(!store.modal_open);
        assert_eq!(store.selected_user, None);
        assert_eq!(store.error, None);
    }

    #[test]
    fn failed_user_load_falls_back_to_empty_list() {
        let store = Rc::new(LeaderboardStore::default())
            .reduce(LeaderboardAction::UsersLoaded(Err(ApiError::Network("down".into()))));
        assert!(store.users.is_empty());
        assert_eq!(store.error.as_deref(), Some(USERS_ERROR_MESSAGE));
    }
}
