// ============================================================================
// HOME VIEWMODEL - Lista de amigos, pestañas y reclamo de puntos
// ============================================================================
// Devuelve valores; la vista los despacha al HomeStore.
// ============================================================================

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{parse_aggregates, parse_peers, LeaderboardEntry, RankedPeer, Tab};
use crate::services::LeaderboardApi;
use crate::viewmodels::ranking::{rank_entries, rank_peers};

/// Datos rankeados de una pestaña
#[derive(Clone, Debug, PartialEq)]
pub struct TabData {
    pub tab: Tab,
    pub entries: Vec<LeaderboardEntry>,
}

/// Resultado de los re-fetch tras un reclamo exitoso
#[derive(Debug)]
pub struct ClaimRefresh {
    pub friends: Result<Vec<RankedPeer>, ApiError>,
    pub tab: Result<Option<TabData>, ApiError>,
}

pub struct HomeViewModel<A> {
    api: A,
    friends_limit: usize,
}

impl<A: LeaderboardApi> HomeViewModel<A> {
    pub fn new(api: A) -> Self {
        Self::with_friends_limit(api, CONFIG.friends_limit)
    }

    pub fn with_friends_limit(api: A, friends_limit: usize) -> Self {
        Self { api, friends_limit }
    }

    /// Los primeros N usuarios que devuelve el servidor, rankeados entre sí
    pub async fn fetch_friends(&self) -> Result<Vec<RankedPeer>, ApiError> {
        let envelope = self.api.get_users().await?;
        let mut peers = parse_peers(envelope.data)?;
        peers.truncate(self.friends_limit);
        Ok(rank_peers(peers))
    }

    /// `Ok(None)` cuando el servidor responde `success: false`: la vista no
    /// toca su estado en ese caso.
    pub async fn fetch_tab(&self, tab: Tab) -> Result<Option<TabData>, ApiError> {
        let envelope = self.api.get_tab_data(tab).await?;
        if !envelope.success {
            log::warn!(
                "⚠️ [HOME] Pestaña {} sin éxito: {}",
                tab.as_str(),
                envelope.message.unwrap_or_default()
            );
            return Ok(None);
        }
        let rows = parse_aggregates(envelope.data)?;
        Ok(Some(TabData {
            tab,
            entries: rank_entries(rows),
        }))
    }

    pub async fn claim_points(&self, username: &str) -> Result<(), ApiError> {
        self.api.claim_points(username).await?;
        log::info!("✅ [HOME] Puntos reclamados para {}", username);
        Ok(())
    }

    /// Amigos y pestaña activa, una vez cada uno y en orden
    pub async fn refresh_after_claim(&self, active_tab: Tab) -> ClaimRefresh {
        let friends = self.fetch_friends().await;
        let tab = self.fetch_tab(active_tab).await;
        ClaimRefresh { friends, tab }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use crate::models::ApiEnvelope;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// API en memoria que cuenta llamadas por endpoint
    #[derive(Default)]
    pub struct FakeLeaderboardApi {
        pub users: RefCell<Value>,
        pub tabs: RefCell<HashMap<Tab, Value>>,
        pub history: RefCell<Option<Result<Value, ApiError>>>,
        pub claim_error: RefCell<Option<ApiError>>,
        pub users_error: RefCell<Option<ApiError>>,
        pub calls: RefCell<Vec<String>>,
        pub claims: Cell<usize>,
    }

    impl FakeLeaderboardApi {
        pub fn with_users(users: Value) -> Self {
            let api = Self::default();
            *api.users.borrow_mut() = users;
            api
        }

        pub fn count(&self, endpoint: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.as_str() == endpoint).count()
        }

        fn record(&self, endpoint: &str) {
            self.calls.borrow_mut().push(endpoint.to_string());
        }

        fn tab(&self, tab: Tab) -> ApiEnvelope {
            match self.tabs.borrow().get(&tab) {
                Some(data) => ApiEnvelope {
                    success: true,
                    data: data.clone(),
                    message: None,
                },
                None => ApiEnvelope {
                    success: false,
                    data: Value::Null,
                    message: Some("no data".into()),
                },
            }
        }
    }

    impl LeaderboardApi for FakeLeaderboardApi {
        async fn get_users(&self) -> Result<ApiEnvelope, ApiError> {
            self.record("get-users");
            if let Some(err) = self.users_error.borrow().clone() {
                return Err(err);
            }
            Ok(ApiEnvelope {
                success: true,
                data: self.users.borrow().clone(),
                message: None,
            })
        }

        async fn get_user_history(&self, _username: &str) -> Result<ApiEnvelope, ApiError> {
            self.record("your-history");
            let data = self
                .history
                .borrow()
                .clone()
                .unwrap_or_else(|| Ok(json!([])))?;
            Ok(ApiEnvelope {
                success: true,
                data,
                message: None,
            })
        }

        async fn claim_points(&self, _username: &str) -> Result<(), ApiError> {
            self.record("claim-points");
            self.claims.set(self.claims.get() + 1);
            match self.claim_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn get_today_history(&self) -> Result<ApiEnvelope, ApiError> {
            self.record("your-daily-history");
            Ok(self.tab(Tab::Daily))
        }

        async fn get_weekly_data(&self) -> Result<ApiEnvelope, ApiError> {
            self.record("your-weekly-history");
            Ok(self.tab(Tab::Weekly))
        }

        async fn get_monthly_data(&self) -> Result<ApiEnvelope, ApiError> {
            self.record("your-monthly-history");
            Ok(self.tab(Tab::Monthly))
        }
    }

    pub fn users_json(points: &[(&str, i64)]) -> Value {
        Value::Array(
            points
                .iter()
                .map(|(username, points)| {
                    json!({
                        "_id": format!("id-{}", username),
                        "firstName": username.to_uppercase(),
                        "username": username,
                        "Points": points
                    })
                })
                .collect(),
        )
    }
}
