/// Authorization-gate decisions, the route table and the navigation menu.
use client::auth::guard::{self, AccessDecision, RouteRequirement, authorize};
use client::auth::session::Session;
use client::{nav, routes};
use shared::types::{Identity, Role};

fn authenticated(role: Role) -> Session {
    Session::Authenticated {
        identity: Identity {
            subject_id: "42".to_string(),
            display_name: "a@b.com".to_string(),
            role,
            email: "a@b.com".to_string(),
        },
        credential: "h.p.s".to_string(),
    }
}

fn admin_only() -> RouteRequirement {
    RouteRequirement::any_of([Role::Admin])
}

// ---------------------------------------------------------------------------
// Gate decisions
// ---------------------------------------------------------------------------

#[test]
fn anonymous_is_always_redirected_to_login() {
    for requirement in [None, Some(admin_only())] {
        let decision = authorize(&Session::Anonymous, requirement.as_ref(), "/rooms");
        assert_eq!(
            decision,
            AccessDecision::RedirectTo {
                path: guard::LOGIN_PATH,
                from: Some("/rooms".to_string()),
            }
        );
    }
}

#[test]
fn login_redirect_carries_the_requested_path() {
    let decision = authorize(&Session::Anonymous, None, "/admin/bookings");
    let AccessDecision::RedirectTo { from, .. } = decision else {
        panic!("expected a redirect");
    };
    assert_eq!(from.as_deref(), Some("/admin/bookings"));
}

#[test]
fn authenticated_without_requirement_is_admitted() {
    let decision = authorize(&authenticated(Role::User), None, "/");
    assert_eq!(decision, AccessDecision::Admit);
}

#[test]
fn wrong_role_is_redirected_home() {
    let decision = authorize(&authenticated(Role::User), Some(&admin_only()), "/admin/users");
    assert_eq!(
        decision,
        AccessDecision::RedirectTo {
            path: guard::HOME_PATH,
            from: None,
        }
    );
}

#[test]
fn matching_role_is_admitted() {
    let requirement = RouteRequirement::any_of([Role::Admin, Role::Manager]);
    let decision = authorize(&authenticated(Role::Admin), Some(&requirement), "/admin/bookings");
    assert_eq!(decision, AccessDecision::Admit);
}

#[test]
fn unknown_role_matches_only_an_explicit_listing() {
    let auditor = authenticated(Role::Other("Auditor".to_string()));

    let admin_req = admin_only();
    assert!(!authorize(&auditor, Some(&admin_req), "/admin/users").is_admitted());

    let explicit = RouteRequirement::any_of([Role::Other("Auditor".to_string())]);
    assert!(authorize(&auditor, Some(&explicit), "/audits").is_admitted());
}

#[test]
fn role_matching_is_case_sensitive() {
    let lowercase_admin = authenticated(Role::Other("admin".to_string()));
    assert!(!authorize(&lowercase_admin, Some(&admin_only()), "/admin/users").is_admitted());
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn manager_reaches_shared_management_views_but_not_admin_ones() {
    let session = authenticated(Role::Manager);

    let shared_req = RouteRequirement::any_of([Role::Admin, Role::Manager]);
    assert_eq!(
        authorize(&session, Some(&shared_req), "/admin/bookings"),
        AccessDecision::Admit
    );

    assert_eq!(
        authorize(&session, Some(&admin_only()), "/admin/users"),
        AccessDecision::RedirectTo {
            path: guard::HOME_PATH,
            from: None,
        }
    );
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

#[test]
fn route_table_matches_the_application_views() {
    let paths: Vec<&str> = routes::route_table().iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/",
            "/rooms",
            "/my-bookings",
            "/admin/users",
            "/admin/rooms",
            "/admin/bookings",
        ]
    );
}

#[test]
fn dashboard_and_rooms_admit_any_authenticated_identity() {
    for path in ["/", "/rooms"] {
        let route = routes::find_route(path).unwrap();
        assert!(route.requirement.is_none(), "{path} must have no requirement");
    }
}

#[test]
fn admin_routes_require_the_expected_roles() {
    let users = routes::find_route("/admin/users").unwrap();
    assert_eq!(users.requirement.unwrap().roles(), [Role::Admin]);

    let bookings = routes::find_route("/admin/bookings").unwrap();
    assert_eq!(
        bookings.requirement.unwrap().roles(),
        [Role::Admin, Role::Manager]
    );
}

#[test]
fn navigate_applies_the_route_requirement() {
    assert!(routes::navigate(&authenticated(Role::Admin), "/admin/users").is_admitted());
    assert!(!routes::navigate(&authenticated(Role::User), "/admin/users").is_admitted());
    assert!(routes::navigate(&authenticated(Role::Manager), "/admin/bookings").is_admitted());
}

#[test]
fn navigate_to_unknown_path_redirects_home_when_authenticated() {
    let decision = routes::navigate(&authenticated(Role::User), "/no-such-page");
    assert_eq!(
        decision,
        AccessDecision::RedirectTo {
            path: guard::HOME_PATH,
            from: None,
        }
    );
}

#[test]
fn navigate_to_unknown_path_redirects_anonymous_to_login() {
    let decision = routes::navigate(&Session::Anonymous, "/no-such-page");
    assert_eq!(
        decision,
        AccessDecision::RedirectTo {
            path: guard::LOGIN_PATH,
            from: Some("/no-such-page".to_string()),
        }
    );
}

// ---------------------------------------------------------------------------
// Navigation menu
// ---------------------------------------------------------------------------

#[test]
fn plain_user_menu_has_own_bookings_but_no_management() {
    let labels: Vec<&str> = nav::nav_items(&Role::User).iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Dashboard", "Rooms", "My Bookings"]);
}

#[test]
fn manager_menu_has_all_bookings_only() {
    let labels: Vec<&str> = nav::nav_items(&Role::Manager)
        .iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(labels, ["Dashboard", "Rooms", "All Bookings"]);
}

#[test]
fn admin_menu_has_the_full_management_section() {
    let labels: Vec<&str> = nav::nav_items(&Role::Admin)
        .iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(
        labels,
        ["Dashboard", "Rooms", "Users", "Manage Rooms", "All Bookings"]
    );
}

#[test]
fn unknown_role_sees_only_the_common_entries() {
    let labels: Vec<&str> = nav::nav_items(&Role::Other("Auditor".to_string()))
        .iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(labels, ["Dashboard", "Rooms"]);
}

#[test]
fn every_menu_entry_is_admitted_by_the_gate_for_its_role() {
    for role in [
        Role::Admin,
        Role::Manager,
        Role::User,
        Role::Other("Auditor".to_string()),
    ] {
        let session = authenticated(role.clone());
        for item in nav::nav_items(&role) {
            assert!(
                routes::navigate(&session, item.path).is_admitted(),
                "menu entry {} must be reachable for {role:?}",
                item.path
            );
        }
    }
}
