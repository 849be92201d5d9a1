//! Pages of the admin area: sidebar entries and the permission each requires.

use contracts::system::roles::permissions;

use crate::system::auth::gate::has_permission;

/// Resolves to the first page the signed-in user may open.
pub const ADMIN_ROOT: &str = "/admin";
pub const FORBIDDEN_PATH: &str = "/forbidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminPage {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub permission: &'static str,
}

pub static ADMIN_PAGES: [AdminPage; 8] = [
    AdminPage {
        path: "/admin/analysis",
        label: "Analysis",
        icon: "bar-chart",
        permission: permissions::ANALYSIS,
    },
    AdminPage {
        path: "/admin/brands",
        label: "Brands",
        icon: "tag",
        permission: permissions::BRANDS,
    },
    AdminPage {
        path: "/admin/categories",
        label: "Categories",
        icon: "folder",
        permission: permissions::CATEGORIES,
    },
    AdminPage {
        path: "/admin/products",
        label: "Products",
        icon: "package",
        permission: permissions::PRODUCTS,
    },
    AdminPage {
        path: "/admin/orders",
        label: "Orders",
        icon: "shopping-cart",
        permission: permissions::ORDERS,
    },
    AdminPage {
        path: "/admin/sale-programs",
        label: "Sale programs",
        icon: "percent",
        permission: permissions::SALE_PROGRAMS,
    },
    AdminPage {
        path: "/admin/users",
        label: "Users",
        icon: "users",
        permission: permissions::USERS,
    },
    AdminPage {
        path: "/admin/roles",
        label: "Roles",
        icon: "shield",
        permission: permissions::ROLES,
    },
];

/// Page owning `path`, matched on whole path segments.
pub fn page_for(path: &str) -> Option<&'static AdminPage> {
    let path = path.trim_end_matches('/');
    ADMIN_PAGES.iter().find(|page| {
        path == page.path
            || path
                .strip_prefix(page.path)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Permission needed to open `path`; `None` for paths outside the page table.
pub fn required_permission(path: &str) -> Option<&'static str> {
    page_for(path).map(|page| page.permission)
}

/// First sidebar page `granted` opens; `None` when the account can open none.
pub fn first_allowed_page(granted: &[String]) -> Option<&'static AdminPage> {
    ADMIN_PAGES
        .iter()
        .find(|page| has_permission(granted, page.permission))
}

/// Where `/admin` sends the user once the permission set is known.
pub fn landing_path(granted: &[String]) -> &'static str {
    first_allowed_page(granted)
        .map(|page| page.path)
        .unwrap_or(FORBIDDEN_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_required_permission_by_segment() {
        assert_eq!(required_permission("/admin/brands"), Some(permissions::BRANDS));
        assert_eq!(required_permission("/admin/brands/"), Some(permissions::BRANDS));
        assert_eq!(required_permission("/admin/orders/42"), Some(permissions::ORDERS));
        assert_eq!(required_permission("/admin/brandsx"), None);
        assert_eq!(required_permission("/admin"), None);
        assert_eq!(required_permission("/signin"), None);
    }

    #[test]
    fn test_every_page_has_distinct_path() {
        for (i, a) in ADMIN_PAGES.iter().enumerate() {
            assert!(a.path.starts_with(ADMIN_ROOT));
            for b in &ADMIN_PAGES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
        assert_eq!(page_for("/admin/analysis").map(|p| p.label), Some("Analysis"));
    }

    #[test]
    fn test_landing_page_follows_permissions() {
        assert_eq!(landing_path(&granted(&[permissions::BRANDS])), "/admin/brands");
        assert_eq!(
            landing_path(&granted(&[permissions::ROLES, permissions::ORDERS])),
            "/admin/orders"
        );
        assert_eq!(landing_path(&granted(&[permissions::ADMIN])), "/admin/analysis");
        assert_eq!(landing_path(&[]), FORBIDDEN_PATH);
        assert_eq!(first_allowed_page(&granted(&["Permissions.Unknown"])), None);
    }
}
