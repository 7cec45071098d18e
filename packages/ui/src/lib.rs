//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod storage;
pub use storage::{make_repo, make_storage, AppStorage};

mod session;
pub use session::{use_config, use_session, LogoutButton, SessionProvider};

pub mod notice;
pub use notice::{show_notice, use_notice, NoticeHost, NoticeState};

mod navbar;
pub use navbar::Navbar;

mod attraction_card;
pub use attraction_card::{format_price, parse_price, AttractionCard};

mod order_table;
pub use order_table::OrderTable;
