//! Static route table for the public site and the admin area.
//!
//! DESIGN
//! ======
//! Entries are tried in order and the first structural match wins. Static
//! segments compare literally; `:name` segments capture one non-empty segment.
//! The table never changes after construction.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Screen rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Search,
    Results,
    AirbnbDetail,
    AdminLogin,
    AdminDashboard,
    AdminAirbnbs,
    AdminAirbnbAdd,
    AdminHosts,
    AdminHostAdd,
    AdminRoomTypes,
    AdminRoomTypeAdd,
    AdminCounties,
    AdminCountyAdd,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Search => "Search",
            Self::Results => "Results",
            Self::AirbnbDetail => "Listing",
            Self::AdminLogin => "Admin Login",
            Self::AdminDashboard => "Dashboard",
            Self::AdminAirbnbs => "Airbnbs",
            Self::AdminAirbnbAdd => "Add Airbnb",
            Self::AdminHosts => "Hosts",
            Self::AdminHostAdd => "Add Host",
            Self::AdminRoomTypes => "Room Types",
            Self::AdminRoomTypeAdd => "Add Room Type",
            Self::AdminCounties => "Counties",
            Self::AdminCountyAdd => "Add County",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
    pub requires_auth: bool,
    pub name: Option<&'static str>,
}

impl RouteEntry {
    pub const fn public(path: &'static str, view: View, name: &'static str) -> Self {
        Self { path, view, requires_auth: false, name: Some(name) }
    }

    pub const fn protected(path: &'static str, view: View, name: &'static str) -> Self {
        Self { path, view, requires_auth: true, name: Some(name) }
    }

    /// Captured params if `path` (already normalized) fits this entry's pattern.
    fn capture(&self, path: &str) -> Option<Vec<(&'static str, String)>> {
        let mut pattern = segments(self.path);
        let mut actual = segments(path);
        let mut params = Vec::new();
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(a)) => {
                    if let Some(param) = p.strip_prefix(':') {
                        params.push((param, a.to_owned()));
                    } else if p != a {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

/// Every route the application serves, in matching order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::public("/", View::Landing, "landing"),
    RouteEntry::public("/search", View::Search, "search"),
    RouteEntry::public("/results", View::Results, "results"),
    RouteEntry::public("/airbnb/:id", View::AirbnbDetail, "airbnb-detail"),
    RouteEntry::public("/admin/login", View::AdminLogin, "admin-login"),
    RouteEntry::protected("/admin/dashboard", View::AdminDashboard, "admin-dashboard"),
    RouteEntry::protected("/admin/airbnbs", View::AdminAirbnbs, "admin-airbnbs"),
    RouteEntry::protected("/admin/airbnbs/add", View::AdminAirbnbAdd, "admin-airbnbs-add"),
    RouteEntry::protected("/admin/hosts", View::AdminHosts, "admin-hosts"),
    RouteEntry::protected("/admin/hosts/add", View::AdminHostAdd, "admin-hosts-add"),
    RouteEntry::protected("/admin/room-types", View::AdminRoomTypes, "admin-room-types"),
    RouteEntry::protected("/admin/room-types/add", View::AdminRoomTypeAdd, "admin-room-types-add"),
    RouteEntry::protected("/admin/counties", View::AdminCounties, "admin-counties"),
    RouteEntry::protected("/admin/counties/add", View::AdminCountyAdd, "admin-counties-add"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
}

/// A resolved location: the entry plus captured `:params`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { entries: ROUTES.to_vec() }
    }
}

impl RouteTable {
    /// Build a table from `entries`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share a path.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|earlier| earlier.path == entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry whose pattern matches `location`.
    ///
    /// Query string, fragment and a trailing slash are ignored.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let path = normalize(location);
        self.entries
            .iter()
            .find_map(|entry| entry.capture(path).map(|params| RouteMatch { entry, params }))
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == Some(name))
    }

    /// Whether navigating to `location` needs a confirmed session.
    /// Unknown locations are public.
    pub fn requires_auth(&self, location: &str) -> bool {
        self.resolve(location).is_some_and(|m| m.entry.requires_auth)
    }
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
