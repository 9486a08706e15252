use super::*;

#[test]
fn admin_views_get_the_session_bar() {
    assert!(is_admin_view(View::AdminDashboard));
    assert!(is_admin_view(View::AdminCountyAdd));
    assert!(!is_admin_view(View::AdminLogin));
    assert!(!is_admin_view(View::AirbnbDetail));
}
