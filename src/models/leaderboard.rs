// ============================================================================
// LEADERBOARD MODELS - Formas del servidor → tipos canónicos
// ============================================================================
// Toda respuesta de /user/v1/* pasa por parse_* antes de llegar al ranking.
// ============================================================================

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Envoltorio `{ success, data, message }` de la API de usuarios
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pestañas de la Home
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Daily, Tab::Weekly, Tab::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Daily => "Daily",
            Tab::Weekly => "Weekly",
            Tab::Monthly => "Monthly",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Daily => "daily",
            Tab::Weekly => "weekly",
            Tab::Monthly => "monthly",
        }
    }
}

/// Fila de `get-users`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "firstName", default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(rename = "Points", default, deserialize_with = "lenient_points")]
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPeer {
    pub rank: usize,
    pub peer: Peer,
}

impl RankedPeer {
    /// Clave estable para listas con key; el rank desempata ids vacíos
    pub fn key(&self) -> String {
        row_key(&self.peer.id, self.rank)
    }
}

/// Fila agregada (diaria/semanal/mensual) ya normalizada
#[derive(Clone, Debug, PartialEq)]
pub struct PointsRow {
    pub id: String,
    pub total_points: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub total_points: i64,
    pub rank: usize,
}

impl LeaderboardEntry {
    pub fn key(&self) -> String {
        row_key(&self.id, self.rank)
    }
}

fn row_key(id: &str, rank: usize) -> String {
    if id.is_empty() {
        format!("rank-{}", rank)
    } else {
        id.to_string()
    }
}

/// `date` queda en `None` si el servidor manda algo que no es una fecha
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "pointsAwarded", default, deserialize_with = "lenient_points")]
    pub points_awarded: i64,
}

#[derive(Deserialize)]
struct RawAggregate {
    #[serde(rename = "_id", default)]
    id: Value,
    #[serde(rename = "totalPointsAwarded", default, deserialize_with = "lenient_points")]
    total_points_awarded: i64,
    #[serde(rename = "totalPoints", default, deserialize_with = "lenient_points")]
    total_points: i64,
}

// null, números y strings se aceptan como texto
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_to_string(Value::deserialize(deserializer)?))
}

// Enteros tal cual, decimales truncados, strings numéricos parseados; lo demás es 0
fn lenient_points<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(points_from_value(&Value::deserialize(deserializer)?))
}

fn points_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
            .unwrap_or(0),
        _ => 0,
    }
}

// RFC 3339, fecha sola (YYYY-MM-DD) o epoch en milisegundos
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(date_from_value(&Value::deserialize(deserializer)?))
}

fn date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|date| date.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(|naive| Utc.from_utc_datetime(&naive))
                })
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

/// Primer valor presente y distinto de cero entre totalPointsAwarded y
/// totalPoints; 0 si ninguno.
pub fn resolve_points(total_points_awarded: Option<i64>, total_points: Option<i64>) -> i64 {
    total_points_awarded
        .filter(|points| *points != 0)
        .or(total_points.filter(|points| *points != 0))
        .unwrap_or(0)
}

fn expect_array(data: Value, what: &str) -> Result<Vec<Value>, ApiError> {
    match data {
        Value::Array(items) => Ok(items),
        other => Err(ApiError::Validation(format!(
            "Invalid {} data format: expected a list, got {}",
            what,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn id_to_string(id: Value) -> String {
    match id {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// Un elemento que no es objeto se descarta; el resto de la lista sigue
fn parse_items<T, F>(data: Value, what: &str, convert: F) -> Result<Vec<T>, ApiError>
where
    F: Fn(Value) -> Result<T, serde_json::Error>,
{
    Ok(expect_array(data, what)?
        .into_iter()
        .filter_map(|item| match convert(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("⚠️ [DATA] Entrada de {} descartada: {}", what, e);
                None
            }
        })
        .collect())
}

pub fn parse_peers(data: Value) -> Result<Vec<Peer>, ApiError> {
    parse_items(data, "user", serde_json::from_value::<Peer>)
}

pub fn parse_aggregates(data: Value) -> Result<Vec<PointsRow>, ApiError> {
    parse_items(data, "leaderboard", |item| {
        let raw = serde_json::from_value::<RawAggregate>(item)?;
        Ok(PointsRow {
            id: id_to_string(raw.id),
            total_points: resolve_points(Some(raw.total_points_awarded), Some(raw.total_points)),
        })
    })
}

pub fn parse_history(data: Value) -> Result<Vec<HistoryEntry>, ApiError> {
    parse_items(data, "history", serde_json::from_value::<HistoryEntry>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn awarded_total_wins_over_running_total() {
        assert_eq!(resolve_points(Some(30), Some(90)), 30);
    }

    #[test]
    fn zero_awarded_falls_through_to_running_total() {
        assert_eq!(resolve_points(Some(0), Some(90)), 90);
        assert_eq!(resolve_points(None, Some(90)), 90);
    }

    #[test]
    fn missing_fields_resolve_to_zero() {
        assert_eq!(resolve_points(None, None), 0);
    }

    #[test]
    fn aggregates_are_normalized() {
        let rows = parse_aggregates(json!([
            { "_id": "alice", "totalPointsAwarded": 40 },
            { "_id": "bob", "totalPoints": 25 },
            { "_id": "carol" },
            { "_id": 7, "totalPointsAwarded": 5 }
        ]))
        .unwrap();
        assert_eq!(
            rows,
            vec![
                PointsRow { id: "alice".into(), total_points: 40 },
                PointsRow { id: "bob".into(), total_points: 25 },
                PointsRow { id: "carol".into(), total_points: 0 },
                PointsRow { id: "7".into(), total_points: 5 },
            ]
        );
    }

    #[test]
    fn non_array_history_is_a_validation_error() {
        let err = parse_history(json!({ "message": "nothing here" })).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("history")));
        assert!(parse_history(Value::Null).is_err());
    }

    #[test]
    fn history_entries_parse_iso_dates() {
        let history = parse_history(json!([
            { "date": "2024-05-01T10:00:00.000Z", "pointsAwarded": 10 }
        ]))
        .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].points_awarded, 10);
        assert_eq!(
            history[0].date.map(|d| d.to_rfc3339()).as_deref(),
            Some("2024-05-01T10:00:00+00:00")
        );
    }

    #[test]
    fn history_accepts_date_only_and_epoch_millis() {
        let history = parse_history(json!([
            { "date": "2024-05-01", "pointsAwarded": 5 },
            { "date": 1714557600000i64, "pointsAwarded": 2 }
        ]))
        .unwrap();
        assert_eq!(
            history[0].date.map(|d| d.to_rfc3339()).as_deref(),
            Some("2024-05-01T00:00:00+00:00")
        );
        assert_eq!(
            history[1].date.map(|d| d.to_rfc3339()).as_deref(),
            Some("2024-05-01T10:00:00+00:00")
        );
    }

    #[test]
    fn one_odd_history_item_keeps_the_rest() {
        let history = parse_history(json!([
            { "date": "2024-05-01T10:00:00Z", "pointsAwarded": 10 },
            { "pointsAwarded": 3 },
            { "date": "someday", "pointsAwarded": "7" },
            42
        ]))
        .unwrap();
        assert_eq!(history.len(), 3);
        assert!(history[0].date.is_some());
        assert_eq!(history[1].date, None);
        assert_eq!(history[2].date, None);
        assert_eq!(history[2].points_awarded, 7);
    }

    #[test]
    fn null_name_does_not_drop_the_user_list() {
        let peers = parse_peers(json!([
            { "_id": "1", "firstName": "Ann", "username": "ann", "Points": 4 },
            { "_id": "2", "firstName": null, "username": "bob", "Points": null }
        ]))
        .unwrap();
        assert_eq!(peers.len(), 2);
        assert_eq!(peers[1].first_name, "");
        assert_eq!(peers[1].points, 0);
    }

    #[test]
    fn fractional_totals_are_truncated() {
        let rows = parse_aggregates(json!([
            { "_id": "a", "totalPoints": 2.5 },
            { "_id": "b", "totalPoints": 4 },
            { "_id": "c", "totalPointsAwarded": "oops", "totalPoints": 9.9 }
        ]))
        .unwrap();
        let totals: Vec<i64> = rows.iter().map(|r| r.total_points).collect();
        assert_eq!(totals, vec![2, 4, 9]);
    }

    #[test]
    fn empty_ids_get_rank_based_keys() {
        let entry = |id: &str, rank| LeaderboardEntry {
            id: id.into(),
            total_points: 0,
            rank,
        };
        assert_eq!(entry("", 2).key(), "rank-2");
        assert_eq!(entry("", 3).key(), "rank-3");
        assert_eq!(entry("alice", 1).key(), "alice");
        let peer = RankedPeer {
            rank: 5,
            peer: parse_peers(json!([{ "_id": null, "username": "x" }])).unwrap().remove(0),
        };
        assert_eq!(peer.key(), "rank-5");
    }

    #[test]
    fn peers_default_missing_points_to_zero() {
        let peers = parse_peers(json!([
            { "_id": "1", "firstName": "Ann", "username": "ann" }
        ]))
        .unwrap();
        assert_eq!(peers[0].points, 0);
        assert!(parse_peers(json!("oops")).is_err());
    }
}
