// ============================================================================
// RANKING - Orden y posición calculados en cliente
// ============================================================================
// El rank nunca viene de la red: siempre se recalcula aquí a partir de la
// secuencia en memoria. Orden estable: en empate conserva el orden de entrada.
// ============================================================================

use crate::models::{LeaderboardEntry, Peer, PointsRow, RankedPeer};
use crate::utils::{PODIUM_SIZE, PRIZE_RATE};

/// Ordena de mayor a menor y asigna rank = posición + 1
pub fn rank_by_points<T, F>(mut items: Vec<T>, points: F) -> Vec<(usize, T)>
where
    F: Fn(&T) -> i64,
{
    // sort_by es estable
    items.sort_by(|a, b| points(b).cmp(&points(a)));
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index + 1, item))
        .collect()
}

pub fn rank_entries(rows: Vec<PointsRow>) -> Vec<LeaderboardEntry> {
    rank_by_points(rows, |row| row.total_points)
        .into_iter()
        .map(|(rank, row)| LeaderboardEntry {
            id: row.id,
            total_points: row.total_points,
            rank,
        })
        .collect()
}

pub fn rank_peers(peers: Vec<Peer>) -> Vec<RankedPeer> {
    rank_by_points(peers, |peer| peer.points)
        .into_iter()
        .map(|(rank, peer)| RankedPeer { rank, peer })
        .collect()
}

/// (podio, resto)
pub fn split_podium<T>(ranked: &[T]) -> (&[T], &[T]) {
    ranked.split_at(ranked.len().min(PODIUM_SIZE))
}

pub fn total_points(entries: &[LeaderboardEntry]) -> i64 {
    entries.iter().map(|entry| entry.total_points).sum()
}

pub fn prize_for(total: i64) -> f64 {
    total as f64 * PRIZE_RATE
}

/// Filas alternas de la lista (rank impar sombreado)
pub fn is_shaded_row(rank: usize) -> bool {
    rank % 2 == 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PodiumPlace {
    Gold,
    Silver,
    Bronze,
}

impl PodiumPlace {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(PodiumPlace::Gold),
            2 => Some(PodiumPlace::Silver),
            3 => Some(PodiumPlace::Bronze),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PodiumPlace::Gold => "trophy-gold",
            PodiumPlace::Silver => "trophy-silver",
            PodiumPlace::Bronze => "trophy-bronze",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, total_points: i64) -> PointsRow {
        PointsRow {
            id: id.to_string(),
            total_points,
        }
    }

    fn ids(entries: &[LeaderboardEntry]) -> Vec<(&str, usize)> {
        entries.iter().map(|e| (e.id.as_str(), e.rank)).collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_entries(vec![row("a", 50), row("b", 80), row("c", 80)]);
        assert_eq!(ids(&ranked), vec![("b", 1), ("c", 2), ("a", 3)]);
    }

    #[test]
    fn zero_point_rows_sink_to_the_bottom() {
        let ranked = rank_entries(vec![row("zero", 0), row("x", 3), row("y", 1)]);
        assert_eq!(ids(&ranked), vec![("x", 1), ("y", 2), ("zero", 3)]);
    }

    #[test]
    fn ranks_are_consecutive_from_one() {
        let rows: Vec<PointsRow> = (0..25).map(|i| row(&format!("u{}", i), (i * 7) % 11)).collect();
        let ranked = rank_entries(rows);
        for (index, entry) in ranked.iter().enumerate() {
            assert_eq!(entry.rank, index + 1);
        }
        assert!(ranked.windows(2).all(|w| w[0].total_points >= w[1].total_points));
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank_entries(Vec::new()).is_empty());
        let (podium, rest) = split_podium::<LeaderboardEntry>(&[]);
        assert!(podium.is_empty() && rest.is_empty());
    }

    #[test]
    fn podium_takes_at_most_three() {
        let ranked = rank_entries(vec![row("a", 4), row("b", 3), row("c", 2), row("d", 1), row("e", 0)]);
        let (podium, rest) = split_podium(&ranked);
        assert_eq!(podium.len(), 3);
        assert_eq!(rest.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![4, 5]);

        let short = rank_entries(vec![row("a", 1), row("b", 2)]);
        let (podium, rest) = split_podium(&short);
        assert_eq!(podium.len(), 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn peers_rank_by_points() {
        let peer = |username: &str, points| Peer {
            id: username.to_string(),
            first_name: username.to_uppercase(),
            username: username.to_string(),
            points,
        };
        let ranked = rank_peers(vec![peer("ann", 10), peer("bob", 30), peer("cid", 10)]);
        let order: Vec<(&str, usize)> = ranked.iter().map(|r| (r.peer.username.as_str(), r.rank)).collect();
        assert_eq!(order, vec![("bob", 1), ("ann", 2), ("cid", 3)]);
    }

    #[test]
    fn daily_total_and_prize() {
        let ranked = rank_entries(vec![row("a", 100), row("b", 30)]);
        assert_eq!(total_points(&ranked), 130);
        assert!((prize_for(130) - 97.5).abs() < f64::EPSILON);
    }

    #[test]
    fn alternating_rows_and_trophies() {
        assert!(is_shaded_row(5));
        assert!(!is_shaded_row(4));
        assert_eq!(PodiumPlace::for_rank(1), Some(PodiumPlace::Gold));
        assert_eq!(PodiumPlace::for_rank(3), Some(PodiumPlace::Bronze));
        assert_eq!(PodiumPlace::for_rank(4), None);
    }
}
