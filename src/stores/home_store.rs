// ============================================================================
// HOME STORE - Estado de la vista Home (use_reducer)
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{LeaderboardEntry, RankedPeer, Tab};
use crate::viewmodels::ranking::total_points;
use crate::viewmodels::TabData;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HomeStore {
    pub active_tab: Tab,
    pub friends: Vec<RankedPeer>,
    pub daily: Vec<LeaderboardEntry>,
    pub weekly: Vec<LeaderboardEntry>,
    pub monthly: Vec<LeaderboardEntry>,
    /// Suma de puntos de la pestaña diaria
    pub today_total: i64,
}

pub enum HomeAction {
    SelectTab(Tab),
    FriendsLoaded(Vec<RankedPeer>),
    TabLoaded(TabData),
}

impl HomeStore {
    pub fn entries(&self, tab: Tab) -> &[LeaderboardEntry] {
        match tab {
            Tab::Daily => &self.daily,
            Tab::Weekly => &self.weekly,
            Tab::Monthly => &self.monthly,
        }
    }
}

impl Reducible for HomeStore {
    type Action = HomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HomeAction::SelectTab(tab) => next.active_tab = tab,
            HomeAction::FriendsLoaded(friends) => next.friends = friends,
            // Gana la última respuesta en llegar, sin importar el orden de envío
            HomeAction::TabLoaded(TabData { tab, entries }) => match tab {
                Tab::Daily => {
                    next.today_total = total_points(&entries);
                    next.daily = entries;
                }
                Tab::Weekly => next.weekly = entries,
                Tab::Monthly => next.monthly = entries,
            },
        }
        Rc::new(next)
    }
}
