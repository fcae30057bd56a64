use shared::types::Role;

/// One entry in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Menu entries visible to `role`, in display order.
///
/// The menu mirrors the route gate: it hides what the gate would redirect
/// away from, so a user never sees an entry they cannot open. My Bookings is
/// shown to plain users only; managers and admins reach bookings through the
/// management section instead.
pub fn nav_items(role: &Role) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Dashboard",
            path: "/",
        },
        NavItem {
            label: "Rooms",
            path: "/rooms",
        },
    ];

    if *role == Role::User {
        items.push(NavItem {
            label: "My Bookings",
            path: "/my-bookings",
        });
    }

    if matches!(role, Role::Admin | Role::Manager) {
        if *role == Role::Admin {
            items.push(NavItem {
                label: "Users",
                path: "/admin/users",
            });
            items.push(NavItem {
                label: "Manage Rooms",
                path: "/admin/rooms",
            });
        }
        items.push(NavItem {
            label: "All Bookings",
            path: "/admin/bookings",
        });
    }

    items
}
