use yew::prelude::*;

use crate::models::LeaderboardEntry;
use crate::viewmodels::ranking::{split_podium, PodiumPlace};

#[derive(Properties, PartialEq)]
pub struct PodiumProps {
    /// Entradas ya rankeadas; solo se muestran las tres primeras
    pub entries: Vec<LeaderboardEntry>,
}

#[function_component(Podium)]
pub fn podium(props: &PodiumProps) -> Html {
    let (top, _) = split_podium(&props.entries);

    html! {
        <div class="podium">
            { for top.iter().map(|entry| {
                let place = PodiumPlace::for_rank(entry.rank).map(|p| p.css_class());
                html! {
                    <div key={entry.key()} class={classes!("podium-place", place)}>
                        <span class="podium-avatar">{"👤"}</span>
                        <span class="podium-name">{&entry.id}</span>
                        <span class="prize">{format!("Prize: ₹{}", entry.total_points)}</span>
                        <span class="points">{entry.total_points}</span>
                    </div>
                }
            }) }
        </div>
    }
}
