use log::Level;

/// SOL/USD quote endpoint. Kept for when the price widget ships.
pub const SOL_PRICE_API: &str = "https://api.coingecko.com/api/v3/simple/price?ids=solana&vs_currencies=usd";

/// The price fetch is wired up but switched off in this snapshot.
pub const PRICE_FETCH_ENABLED: bool = false;

pub const SPOTLIGHT_VAR_X: &str = "--mouse-x";
pub const SPOTLIGHT_VAR_Y: &str = "--mouse-y";

/// Header turns compact past this scroll offset, in px.
pub const HEADER_COMPACT_AFTER: f64 = 40.0;

pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Home", href: "/" },
    NavItem { title: "About", href: "#about" },
    NavItem { title: "Team", href: "#team" },
    NavItem { title: "Roadmap", href: "#roadmap" },
    NavItem { title: "T&C", href: "#terms" },
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
