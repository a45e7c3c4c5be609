// ============================================================================
// AUTH CONTEXT - Comparte el AuthStore con todos los componentes
// ============================================================================
// El provider crea el store (restaurando la sesión desde localStorage), se
// suscribe a sus cambios y publica un snapshot de la sesión en el contexto.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::services::ApiClient;
use crate::state::AuthStore;
use crate::utils::{BrowserStorage, SharedStorage};

#[derive(Clone)]
pub struct AuthContext {
    pub session: Session,
    pub store: Rc<AuthStore>,
    pub api: ApiClient,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Rc::ptr_eq(&self.store, &other.store)
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_memo((), |_| {
        let storage: SharedStorage = Rc::new(BrowserStorage);
        let store = AuthStore::new(storage);
        store.restore_session();
        store
    });

    let session = use_state(|| store.session());

    // Suscripción al store: cada mutación publica un snapshot nuevo
    {
        let store = store.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let weak = Rc::downgrade(&store);
            let subscription = store.subscribe(move || {
                if let Some(store) = weak.upgrade() {
                    session.set(store.session());
                }
            });
            move || drop(subscription)
        });
    }

    let api = {
        let store = store.clone();
        use_memo((), move |_| ApiClient::new(store.storage()))
    };

    let context = AuthContext {
        session: (*session).clone(),
        store: store.clone(),
        api: (*api).clone(),
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
