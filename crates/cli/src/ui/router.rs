use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    Features,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Features];

    pub fn tag(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Features => "features",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Features => "Features",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.tag() == s)
            .ok_or_else(|| format!("unknown tab {s:?}"))
    }
}

/// Holds the active top-level view.
#[derive(Debug, Default)]
pub struct Router {
    active: Tab,
}

impl Router {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn set_active(&mut self, tab: Tab) {
        self.active = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        assert_eq!("features".parse::<Tab>(), Ok(Tab::Features));
        assert_eq!(Tab::Home.to_string(), "home");
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn switches_active_tab() {
        let mut router = Router::default();
        assert_eq!(router.active(), Tab::Home);
        router.set_active(Tab::Features);
        assert_eq!(router.active(), Tab::Features);
        assert_eq!(router.active().index(), 1);
    }
}
