//! Navigation model shared by the navbar and the pages
//!
//! The entries are static and their paths must match the routes declared on
//! [`crate::Route`]; the tests below keep the two in sync.

/// Glyphs used next to navigation links and feature cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Gamepad,
    Info,
    Play,
    Github,
    Star,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Gamepad => "🎮",
            Icon::Info => "ℹ️",
            Icon::Play => "▶️",
            Icon::Github => "🐙",
            Icon::Star => "⭐",
        }
    }
}

/// One link of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

impl NavEntry {
    /// An entry is active when its path is exactly the current path
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }

    pub fn class(&self, current_path: &str) -> &'static str {
        if self.is_active(current_path) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        path: "/",
        label: "首页",
        icon: Icon::Home,
    },
    NavEntry {
        path: "/game",
        label: "开始游戏",
        icon: Icon::Gamepad,
    },
    NavEntry {
        path: "/about",
        label: "关于",
        icon: Icon::Info,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;

    #[test]
    fn test_exactly_one_entry_active_per_declared_path() {
        for path in ["/", "/game", "/about"] {
            let active: Vec<&str> = NAV_ENTRIES
                .iter()
                .filter(|entry| entry.is_active(path))
                .map(|entry| entry.path)
                .collect();
            assert_eq!(active, vec![path]);
        }
    }

    #[test]
    fn test_no_entry_active_on_unknown_path() {
        assert!(NAV_ENTRIES.iter().all(|entry| !entry.is_active("/xyz")));
        // prefix of another path must not count
        assert!(!NAV_ENTRIES[0].is_active("/game"));
    }

    #[test]
    fn test_class_follows_active_state() {
        let game = NAV_ENTRIES[1];
        assert_eq!(game.class("/game"), "nav-link active");
        assert_eq!(game.class("/"), "nav-link");
        assert_eq!(game.class("/about"), "nav-link");
    }

    #[test]
    fn test_entries_match_declared_routes() {
        for entry in NAV_ENTRIES.iter() {
            let route: Route = entry.path.parse().unwrap();
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} has no page",
                entry.path
            );
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn test_entry_order_and_labels() {
        let labels: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["首页", "开始游戏", "关于"]);
        assert_eq!(NAV_ENTRIES[1].icon, Icon::Gamepad);
    }
}
