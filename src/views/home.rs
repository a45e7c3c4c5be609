// ============================================================================
// HOME VIEW - Pestañas del leaderboard, podio y lista de amigos
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{FriendCard, Podium, RankedList};
use crate::error::ApiError;
use crate::hooks::{use_auth, use_toast};
use crate::models::{RankedPeer, Tab};
use crate::services::ApiClient;
use crate::stores::{HomeAction, HomeStore};
use crate::utils::format_prize;
use crate::viewmodels::ranking::prize_for;
use crate::viewmodels::{HomeViewModel, TabData};

fn apply_friends(
    result: Result<Vec<RankedPeer>, ApiError>,
    dispatcher: &UseReducerDispatcher<HomeStore>,
) {
    match result {
        Ok(friends) => dispatcher.dispatch(HomeAction::FriendsLoaded(friends)),
        Err(e) => log::error!("❌ [HOME] Error cargando amigos: {}", e),
    }
}

fn apply_tab(
    result: Result<Option<TabData>, ApiError>,
    dispatcher: &UseReducerDispatcher<HomeStore>,
) {
    match result {
        Ok(Some(data)) => dispatcher.dispatch(HomeAction::TabLoaded(data)),
        Ok(None) => {}
        Err(e) => log::error!("❌ [HOME] Error cargando pestaña: {}", e),
    }
}

fn load_tab(api: ApiClient, tab: Tab, dispatcher: UseReducerDispatcher<HomeStore>) {
    spawn_local(async move {
        let vm = HomeViewModel::new(api);
        apply_tab(vm.fetch_tab(tab).await, &dispatcher);
    });
}

fn load_friends(api: ApiClient, dispatcher: UseReducerDispatcher<HomeStore>) {
    spawn_local(async move {
        let vm = HomeViewModel::new(api);
        apply_friends(vm.fetch_friends().await, &dispatcher);
    });
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let store = use_reducer(HomeStore::default);
    let active_tab = store.active_tab;

    // Pestaña activa + amigos en cada cambio de pestaña (y al montar)
    {
        let api = auth.api.clone();
        let dispatcher = store.dispatcher();
        use_effect_with(active_tab, move |tab| {
            load_tab(api.clone(), *tab, dispatcher.clone());
            load_friends(api, dispatcher);
            || ()
        });
    }

    let on_give_points = {
        let api = auth.api.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |username: String| {
            let vm = HomeViewModel::new(api.clone());
            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match vm.claim_points(&username).await {
                    Ok(()) => {
                        toast.success(format!("Points claimed successfully for {}", username));
                        let refresh = vm.refresh_after_claim(active_tab).await;
                        apply_friends(refresh.friends, &dispatcher);
                        apply_tab(refresh.tab, &dispatcher);
                    }
                    Err(e) => {
                        log::error!("❌ [HOME] Error reclamando puntos: {}", e);
                        toast.error("Failed to claim points");
                    }
                }
            });
        })
    };

    let tabs = Tab::ALL.iter().map(|&tab| {
        let dispatcher = store.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(HomeAction::SelectTab(tab));
        });
        html! {
            <button
                type="button"
                class={classes!("tab", (tab == active_tab).then_some("active"))}
                {onclick}
            >
                {tab.label()}
            </button>
        }
    });

    let entries = store.entries(active_tab).to_vec();

    html! {
        <div class="home">
            <div class="card leaderboard-card">
                <div class="leaderboard-header">
                    <div>
                        <span class="block">{format!("{} - Today", store.today_total)}</span>
                        <span class="block">{format_prize(prize_for(store.today_total))}</span>
                    </div>
                    <span class="leaderboard-title">{"LeaderBoard"}</span>
                </div>
                <div class="tabs">{ for tabs }</div>
                <Podium entries={entries.clone()} />
                <RankedList {entries} />
            </div>

            <h2 class="section-title">{"Friends List"}</h2>
            <div class="friends-grid">
                { for store.friends.iter().map(|friend| html! {
                    <FriendCard
                        key={friend.key()}
                        friend={friend.clone()}
                        on_give_points={on_give_points.clone()}
                    />
                }) }
            </div>
        </div>
    }
}
