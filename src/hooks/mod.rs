pub mod auth_context;
pub mod toast_context;
pub mod use_auth;

pub use auth_context::{AuthContext, AuthProvider};
pub use toast_context::{use_toast, ToastContext, ToastProvider, UseToastHandle};
pub use use_auth::{use_auth, UseAuthHandle};
