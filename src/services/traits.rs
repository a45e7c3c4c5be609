use crate::error::ApiError;
use crate::models::{ApiEnvelope, AuthResponse, LoginCredentials, RegisterData, Tab, UserProfile};

/// Endpoints /auth/v1/*
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST /auth/v1/login
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    /// POST /auth/v1/register
    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError>;

    /// GET /auth/v1/get-users-info-id
    async fn get_user_info(&self) -> Result<UserProfile, ApiError>;
}

/// Endpoints /user/v1/*
///
/// Las respuestas se devuelven crudas (`ApiEnvelope`); la normalización se hace
/// con `models::parse_*` en el view-model.
#[allow(async_fn_in_trait)]
pub trait LeaderboardApi {
    async fn get_users(&self) -> Result<ApiEnvelope, ApiError>;

    async fn get_user_history(&self, username: &str) -> Result<ApiEnvelope, ApiError>;

    async fn claim_points(&self, username: &str) -> Result<(), ApiError>;

    async fn get_today_history(&self) -> Result<ApiEnvelope, ApiError>;

    async fn get_weekly_data(&self) -> Result<ApiEnvelope, ApiError>;

    async fn get_monthly_data(&self) -> Result<ApiEnvelope, ApiError>;

    /// Datos agregados de la pestaña indicada
    async fn get_tab_data(&self, tab: Tab) -> Result<ApiEnvelope, ApiError> {
        match tab {
            Tab::Daily => self.get_today_history().await,
            Tab::Weekly => self.get_weekly_data().await,
            Tab::Monthly => self.get_monthly_data().await,
        }
    }
}
