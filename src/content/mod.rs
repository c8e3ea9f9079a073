//! Static display records.
//!
//! Everything here is compile-time configuration: facility cards, headline
//! statistics, timeline phases and news, dashboard metrics and outbound links.
//! Localized labels are not stored here; each list shares its length with
//! the matching array in the content dictionary and is zipped with it at
//! render time.

pub mod dashboard;
pub mod facilities;
pub mod links;
pub mod stats;
pub mod timeline;

/// Icon glyphs used across the page.
///
/// Only the glyph name is part of the page model; the artwork comes from
/// the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowUpRight,
    Banknote,
    BedDouble,
    Building,
    Droplets,
    ExternalLink,
    Flame,
    Globe,
    Hammer,
    Home,
    Image,
    Layers,
    Mail,
    MapPin,
    Menu,
    Route,
    Scroll,
    Server,
    Settings,
    Ship,
    TrendingUp,
    Users,
    Warehouse,
    X,
    Zap,
}

impl Icon {
    /// Kebab-case glyph name, used as the `icon-*` CSS class suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Banknote => "banknote",
            Icon::BedDouble => "bed-double",
            Icon::Building => "building",
            Icon::Droplets => "droplets",
            Icon::ExternalLink => "external-link",
            Icon::Flame => "flame",
            Icon::Globe => "globe",
            Icon::Hammer => "hammer",
            Icon::Home => "home",
            Icon::Image => "image",
            Icon::Layers => "layers",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::Route => "route",
            Icon::Scroll => "scroll",
            Icon::Server => "server",
            Icon::Settings => "settings",
            Icon::Ship => "ship",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::Warehouse => "warehouse",
            Icon::X => "x",
            Icon::Zap => "zap",
        }
    }
}
