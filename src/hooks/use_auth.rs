use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::auth_context::AuthContext;
use crate::models::Session;
use crate::services::ApiClient;
use crate::state::AuthStore;

pub struct UseAuthHandle {
    pub session: Session,
    pub store: Rc<AuthStore>,
    pub api: ApiClient,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let context = use_context::<AuthContext>()
        .expect("use_auth() requires an <AuthProvider> ancestor");

    let logout = {
        let store = context.store.clone();
        Callback::from(move |_: ()| store.logout())
    };

    UseAuthHandle {
        session: context.session,
        store: context.store,
        api: context.api,
        logout,
    }
}
