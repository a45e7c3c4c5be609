use yew::prelude::*;

use crate::models::LeaderboardEntry;
use crate::viewmodels::ranking::{is_shaded_row, split_podium};

#[derive(Properties, PartialEq)]
pub struct RankedListProps {
    pub entries: Vec<LeaderboardEntry>,
}

/// Entradas desde el puesto 4 en adelante, con filas alternas
#[function_component(RankedList)]
pub fn ranked_list(props: &RankedListProps) -> Html {
    let (_, rest) = split_podium(&props.entries);

    html! {
        <div class="ranked-list">
            { for rest.iter().map(|entry| html! {
                <div
                    key={entry.key()}
                    class={classes!("ranked-row", is_shaded_row(entry.rank).then_some("shaded"))}
                >
                    <div class="ranked-identity">
                        <span class="ranked-name">{&entry.id}</span>
                        <span class="ranked-rank">{format!("Rank: {}", entry.rank)}</span>
                    </div>
                    <div class="ranked-values">
                        <span class="prize">{format!("Prize: ₹{}", entry.total_points)}</span>
                        <span class="points">{entry.total_points}</span>
                    </div>
                </div>
            }) }
        </div>
    }
}
