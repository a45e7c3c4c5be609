// ============================================================================
// HISTORY DIALOG - Historial de puntos de un usuario
// ============================================================================

use yew::prelude::*;

use crate::models::HistoryEntry;
use crate::utils::format_history_date;

#[derive(Properties, PartialEq)]
pub struct HistoryDialogProps {
    pub open: bool,
    pub username: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub on_close: Callback<()>,
}

pub fn dialog_title(username: Option<&str>) -> String {
    match username {
        Some(username) => format!("Points History - {}", username),
        None => "Points History".to_string(),
    }
}

/// Fecha M/D/YYYY, vacía si el servidor no mandó una fecha legible
pub fn date_label(entry: &HistoryEntry) -> String {
    entry.date.as_ref().map(format_history_date).unwrap_or_default()
}

#[function_component(HistoryDialog)]
pub fn history_dialog(props: &HistoryDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    // Los clicks dentro del diálogo no cierran
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = if props.history.is_empty() {
        html! { <div class="history-empty">{"No history available"}</div> }
    } else {
        html! {
            <div class="history-list">
                { for props.history.iter().enumerate().map(|(i, entry)| html! {
                    <div key={i} class="history-row">
                        <span class="history-date">{date_label(entry)}</span>
                        <span class="history-points">{format!("+{} points", entry.points_awarded)}</span>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" onclick={stop}>
                <div class="modal-header">
                    <h3>{dialog_title(props.username.as_deref())}</h3>
                    <button type="button" class="modal-close" onclick={on_close}>{"✕"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_selected_user() {
        assert_eq!(dialog_title(Some("bob")), "Points History - bob");
        assert_eq!(dialog_title(None), "Points History");
    }

    #[test]
    fn unreadable_dates_render_blank() {
        let entry = HistoryEntry {
            date: None,
            points_awarded: 4,
        };
        assert_eq!(date_label(&entry), "");
    }

    #[test]
    fn readable_dates_render_short_us_format() {
        use chrono::TimeZone;
        let entry = HistoryEntry {
            date: chrono::Utc.with_ymd_and_hms(2024, 12, 25, 9, 0, 0).single(),
            points_awarded: 4,
        };
        assert_eq!(date_label(&entry), "12/25/2024");
    }
}
