// ============================================================================
// AUTH STORE - Única fuente de verdad de "quién está logueado"
// ============================================================================
// Sesión en memoria (ReactiveState) + registro durable { token, user } bajo la
// clave "user". Toda mutación notifica de forma síncrona a los subscribers.
// ============================================================================

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginCredentials, RegisterData, Session, StoredSession};
use crate::services::AuthApi;
use crate::state::reactivity::{ReactiveState, Subscription};
use crate::utils::{
    load_from_storage, save_to_storage, KeyValueStore, SharedStorage, STORAGE_KEY_SESSION,
};

pub struct AuthStore {
    state: ReactiveState<Session>,
    storage: SharedStorage,
}

impl AuthStore {
    /// Store en estado `loading` hasta que se llame a `restore_session`
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            state: ReactiveState::new(Session::pending()),
            storage,
        }
    }

    pub fn storage(&self) -> SharedStorage {
        self.storage.clone()
    }

    /// Snapshot consistente de la sesión
    pub fn session(&self) -> Session {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    /// Lee el registro guardado. El token se acepta sin validarlo contra el
    /// servidor; un registro corrupto se borra y la sesión queda anónima.
    pub fn restore_session(&self) {
        let session = match load_from_storage::<StoredSession>(self.storage.as_ref(), STORAGE_KEY_SESSION) {
            Ok(Some(stored)) => {
                log::info!("💾 [AUTH] Sesión restaurada para {}", stored.user.username);
                Session::authenticated(stored)
            }
            Ok(None) => {
                log::info!("ℹ️ [AUTH] Sin sesión guardada");
                Session::anonymous()
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Registro de sesión inválido, se descarta: {}", e);
                if let Err(e) = self.storage.remove(STORAGE_KEY_SESSION) {
                    log::error!("❌ [AUTH] No se pudo borrar el registro: {}", e);
                }
                Session::anonymous()
            }
        };
        self.state.set(session);
    }

    pub async fn login<A: AuthApi>(
        &self,
        api: &A,
        credentials: &LoginCredentials,
    ) -> Result<Session, ApiError> {
        self.set_loading(true);
        let result = api.login(credentials).await;
        self.complete_authentication(result)
    }

    pub async fn register<A: AuthApi>(
        &self,
        api: &A,
        data: &RegisterData,
    ) -> Result<Session, ApiError> {
        self.set_loading(true);
        let result = api.register(data).await;
        self.complete_authentication(result)
    }

    /// Borra storage y memoria sin condiciones. Nunca falla.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(STORAGE_KEY_SESSION) {
            log::error!("❌ [AUTH] Error limpiando storage en logout: {}", e);
        }
        self.state.set(Session::anonymous());
        log::info!("👋 [AUTH] Logout");
    }

    /// Refresca el perfil (puntos) desde get-users-info-id. El token no cambia.
    pub async fn refresh_user<A: AuthApi>(&self, api: &A) {
        let token = match self.session().token {
            Some(token) => token,
            None => return,
        };
        match api.get_user_info().await {
            Ok(user) => {
                // Un logout durante la llamada gana: no se resucita la sesión
                if self.session().token.as_deref() != Some(token.as_str()) {
                    return;
                }
                let stored = StoredSession { token, user };
                self.persist(&stored);
                self.state.set(Session::authenticated(stored));
            }
            Err(e) => {
                log::error!("❌ [AUTH] Error refrescando perfil: {}", e);
            }
        }
    }

    fn set_loading(&self, loading: bool) {
        self.state.update(|session| session.loading = loading);
    }

    fn complete_authentication(
        &self,
        result: Result<AuthResponse, ApiError>,
    ) -> Result<Session, ApiError> {
        match result.map_err(classify_auth_error).and_then(into_stored_session) {
            Ok(stored) => {
                log::info!("✅ [AUTH] Sesión iniciada: {}", stored.user.username);
                self.persist(&stored);
                let session = Session::authenticated(stored);
                self.state.set(session.clone());
                Ok(session)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Autenticación fallida: {}", e);
                self.set_loading(false);
                Err(e)
            }
        }
    }

    fn persist(&self, stored: &StoredSession) {
        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_SESSION, stored) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }
    }
}

/// En login/register los rechazos del servidor son credenciales inválidas
fn classify_auth_error(error: ApiError) -> ApiError {
    match error {
        ApiError::Http { status: 400 | 403 | 404 | 409 | 422, message } => ApiError::Auth(message),
        other => other,
    }
}

fn into_stored_session(response: AuthResponse) -> Result<StoredSession, ApiError> {
    let fallback = || {
        response
            .message
            .clone()
            .unwrap_or_else(|| "Authentication failed".to_string())
    };
    let token = response
        .token
        .clone()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Auth(fallback()))?;
    let user = response
        .user
        .clone()
        .ok_or_else(|| ApiError::Validation("Missing user in authentication response".to_string()))?;
    Ok(StoredSession {
        token,
        user: user.into(),
    })
}
