use yew::prelude::*;

use crate::models::RankedPeer;
use crate::viewmodels::ranking::PodiumPlace;

#[derive(Properties, PartialEq, Clone)]
pub struct FriendCardProps {
    pub friend: RankedPeer,
    /// Recibe el username del amigo
    pub on_give_points: Callback<String>,
}

#[function_component(FriendCard)]
pub fn friend_card(props: &FriendCardProps) -> Html {
    let RankedPeer { rank, peer } = &props.friend;

    let on_click = {
        let username = peer.username.clone();
        let cb = props.on_give_points.clone();
        Callback::from(move |_: MouseEvent| cb.emit(username.clone()))
    };

    html! {
        <div class="card friend-card">
            <div class="friend-info">
                if let Some(place) = PodiumPlace::for_rank(*rank) {
                    <span class={classes!("trophy", place.css_class())}>{"🏆"}</span>
                }
                <div>
                    <h3 class="friend-name">{&peer.first_name}</h3>
                    <p class="friend-meta">
                        {format!("Points: {} • Rank: {}", peer.points, rank)}
                    </p>
                </div>
            </div>
            <button type="button" class="btn-outline" onclick={on_click}>{"Give Points"}</button>
        </div>
    }
}
