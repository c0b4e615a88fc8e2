//! # Tabs
//!
//! The four dashboard destinations and the circular adjacency between them.
//!
//! ```text
//!   next:      home → shop → about → profile → home
//!   previous:  home → profile → about → shop → home
//! ```
//!
//! Both mappings are exhaustive `match`es, so adding a tab without wiring its
//! neighbours fails to compile.

/// A top-level dashboard destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Shop,
    About,
    Profile,
}

impl Tab {
    /// All tabs in bottom-bar order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Shop, Tab::About, Tab::Profile];

    /// Tab reached by a left swipe.
    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Shop,
            Tab::Shop => Tab::About,
            Tab::About => Tab::Profile,
            Tab::Profile => Tab::Home,
        }
    }

    /// Tab reached by a right swipe.
    pub fn previous(self) -> Tab {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Shop => Tab::Home,
            Tab::About => Tab::Shop,
            Tab::Profile => Tab::About,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Shop => "Shop",
            Tab::About => "About",
            Tab::Profile => "Profile",
        }
    }

    /// Route segment, e.g. `"shop"`.
    pub fn name(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Shop => "shop",
            Tab::About => "about",
            Tab::Profile => "profile",
        }
    }

    /// Position in the bottom bar (0-based).
    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Shop => 1,
            Tab::About => 2,
            Tab::Profile => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_are_inverse() {
        for tab in Tab::ALL {
            assert_eq!(tab.previous().next(), tab);
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn test_four_steps_return_to_start() {
        for tab in Tab::ALL {
            let mut forward = tab;
            let mut backward = tab;
            for _ in 0..4 {
                forward = forward.next();
                backward = backward.previous();
            }
            assert_eq!(forward, tab);
            assert_eq!(backward, tab);
        }
    }

    #[test]
    fn test_next_is_a_single_cycle() {
        // Fewer than four steps never comes back
        for tab in Tab::ALL {
            let mut current = tab.next();
            for _ in 1..4 {
                assert_ne!(current, tab);
                current = current.next();
            }
        }
    }

    #[test]
    fn test_swipe_order() {
        assert_eq!(Tab::Home.next(), Tab::Shop);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Profile);
        assert_eq!(Tab::Shop.previous(), Tab::Home);
    }

    #[test]
    fn test_index_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn test_display_uses_route_name() {
        assert_eq!(Tab::About.to_string(), "about");
    }
}
