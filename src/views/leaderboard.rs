// ============================================================================
// LEADERBOARD VIEW - Tabla global de usuarios e historial
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::HistoryDialog;
use crate::hooks::use_auth;
use crate::stores::{LeaderboardAction, LeaderboardStore};
use crate::utils::{format_points, ordinal};
use crate::viewmodels::ranking::PodiumPlace;
use crate::viewmodels::LeaderboardViewModel;

fn row_class(place: Option<PodiumPlace>) -> Option<&'static str> {
    place.map(|place| match place {
        PodiumPlace::Gold => "row-gold",
        PodiumPlace::Silver => "row-silver",
        PodiumPlace::Bronze => "row-bronze",
    })
}

fn rank_label(rank: usize) -> Html {
    match PodiumPlace::for_rank(rank) {
        Some(place) => html! {
            <div class={classes!("rank-label", place.css_class())}>
                <span class="trophy">{"🏆"}</span>
                <span class="rank-text">{ordinal(rank)}</span>
            </div>
        },
        None => html! { <span class="rank-plain">{ordinal(rank)}</span> },
    }
}

#[function_component(LeaderboardView)]
pub fn leaderboard_view() -> Html {
    let auth = use_auth();
    let store = use_reducer(LeaderboardStore::default);

    {
        let api = auth.api.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let vm = LeaderboardViewModel::new(api);
                dispatcher.dispatch(LeaderboardAction::UsersLoaded(vm.load_users().await));
            });
            || ()
        });
    }

    let show_history = {
        let api = auth.api.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |username: String| {
            dispatcher.dispatch(LeaderboardAction::HistoryRequested);
            let vm = LeaderboardViewModel::new(api.clone());
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = vm.load_history(&username).await;
                dispatcher.dispatch(LeaderboardAction::HistoryLoaded { username, result });
            });
        })
    };

    let on_close = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LeaderboardAction::CloseModal))
    };

    html! {
        <div class="leaderboard">
            <h2 class="page-title">{"Leaderboard"}</h2>
            if let Some(error) = &store.error {
                <div class="alert alert-destructive" role="alert">{error}</div>
            }
            <div class="card">
                <table class="leaderboard-table">
                    <thead>
                        <tr>
                            <th class="col-rank">{"Rank"}</th>
                            <th>{"Name"}</th>
                            <th class="text-right">{"Points"}</th>
                            <th class="text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for store.users.iter().map(|user| {
                            let username = user.peer.username.clone();
                            let show_history = show_history.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                show_history.emit(username.clone())
                            });
                            html! {
                                <tr
                                    key={user.key()}
                                    class={classes!(row_class(PodiumPlace::for_rank(user.rank)))}
                                >
                                    <td>{rank_label(user.rank)}</td>
                                    <td>
                                        <div class="user-cell">
                                            <span class="user-name">{&user.peer.first_name}</span>
                                            <span class="user-handle">{format!("@{}", user.peer.username)}</span>
                                        </div>
                                    </td>
                                    <td class="text-right points">{format_points(user.peer.points)}</td>
                                    <td class="text-right">
                                        <button type="button" class="btn-ghost" {onclick}>
                                            {"View History"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
            <HistoryDialog
                open={store.modal_open}
                username={store.selected_user.clone()}
                history={store.history.clone()}
                {on_close}
            />
        </div>
    }
}
