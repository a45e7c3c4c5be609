pub mod friend_card;
pub mod history_dialog;
pub mod layout;
pub mod navbar;
pub mod podium;
pub mod protected_route;
pub mod ranked_list;
pub mod toaster;
pub mod user_dropdown;

pub use friend_card::FriendCard;
pub use history_dialog::HistoryDialog;
pub use layout::Layout;
pub use navbar::Navbar;
pub use podium::Podium;
pub use protected_route::{guard_decision, GuardDecision, ProtectedRoute};
pub use ranked_list::RankedList;
pub use toaster::Toaster;
pub use user_dropdown::UserDropdown;
