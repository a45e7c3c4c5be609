// ============================================================================
// APP - Raíz de la aplicación
// ============================================================================
// Router > sesión > toasts > layout > rutas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::hooks::{AuthProvider, ToastProvider};
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <ToastProvider>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </ToastProvider>
            </AuthProvider>
        </BrowserRouter>
    }
}
