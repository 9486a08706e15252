use super::*;

const PROTECTED: &[&str] = &[
    "/admin/dashboard",
    "/admin/airbnbs",
    "/admin/airbnbs/add",
    "/admin/hosts",
    "/admin/hosts/add",
    "/admin/room-types",
    "/admin/room-types/add",
    "/admin/counties",
    "/admin/counties/add",
];

#[test]
fn default_table_lists_every_route_once() {
    let table = RouteTable::default();
    assert_eq!(table.entries().len(), 14);
    assert!(RouteTable::new(ROUTES.to_vec()).is_ok());
}

#[test]
fn admin_area_is_protected_except_login() {
    let table = RouteTable::default();
    for entry in table.entries() {
        let expected = PROTECTED.contains(&entry.path);
        assert_eq!(entry.requires_auth, expected, "{}", entry.path);
    }
    assert!(!table.requires_auth("/admin/login"));
}

#[test]
fn resolve_static_paths() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/").map(|m| m.entry.view), Some(View::Landing));
    assert_eq!(table.resolve("/search").map(|m| m.entry.view), Some(View::Search));
    assert_eq!(table.resolve("/admin/hosts/add").map(|m| m.entry.view), Some(View::AdminHostAdd));
}

#[test]
fn resolve_captures_params() {
    let table = RouteTable::default();
    let matched = table.resolve("/airbnb/42").unwrap();
    assert_eq!(matched.entry.view, View::AirbnbDetail);
    assert_eq!(matched.param("id"), Some("42"));
    assert_eq!(matched.param("slug"), None);
}

#[test]
fn resolve_ignores_query_fragment_and_trailing_slash() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/results?county=Nairobi").map(|m| m.entry.view), Some(View::Results));
    assert_eq!(table.resolve("/admin/dashboard/").map(|m| m.entry.view), Some(View::AdminDashboard));
    assert_eq!(table.resolve("/admin/counties#top").map(|m| m.entry.view), Some(View::AdminCounties));
}

#[test]
fn resolve_unknown_paths() {
    let table = RouteTable::default();
    assert!(table.resolve("/airbnb").is_none());
    assert!(table.resolve("/airbnb/42/edit").is_none());
    assert!(table.resolve("/admin/unknown").is_none());
    assert!(!table.requires_auth("/admin/unknown"));
}

#[test]
fn first_match_wins() {
    let table = RouteTable::new(vec![
        RouteEntry::public("/airbnb/:id", View::AirbnbDetail, "detail"),
        RouteEntry::protected("/airbnb/new", View::AdminAirbnbAdd, "new"),
    ])
    .unwrap();
    assert_eq!(table.resolve("/airbnb/new").map(|m| m.entry.view), Some(View::AirbnbDetail));
}

#[test]
fn duplicate_paths_are_rejected() {
    let err = RouteTable::new(vec![
        RouteEntry::public("/search", View::Search, "search"),
        RouteEntry::public("/search", View::Results, "results"),
    ])
    .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicatePath("/search"));
}

#[test]
fn by_name_finds_entry() {
    let table = RouteTable::default();
    assert_eq!(table.by_name("admin-login").map(|e| e.path), Some("/admin/login"));
    assert!(table.by_name("missing").is_none());
}

#[test]
fn every_view_has_a_title() {
    let table = RouteTable::default();
    assert!(table.entries().iter().all(|e| !e.view.title().is_empty()));
}
