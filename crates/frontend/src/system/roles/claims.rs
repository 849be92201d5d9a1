//! Permission selection for the role claims editor.

use contracts::system::roles::{permissions, Role};

/// Human label for a permission value: `Permissions.SalePrograms.Manage`
/// becomes `SalePrograms: Manage`.
pub fn permission_label(value: &str) -> String {
    let rest = value.strip_prefix("Permissions.").unwrap_or(value);
    match rest.split_once('.') {
        Some((area, action)) => format!("{}: {}", area, action),
        None => rest.to_string(),
    }
}

/// Adds or removes `value`, keeping the set free of duplicates.
pub fn toggle(selected: &mut Vec<String>, value: &str, on: bool) {
    selected.retain(|v| v != value);
    if on {
        selected.push(value.to_string());
    }
}

/// Selection in display order. Values granted by the backend that the UI
/// does not know are kept at the end so saving does not drop them.
pub fn ordered(selected: &[String]) -> Vec<String> {
    let mut result: Vec<String> = permissions::ALL
        .iter()
        .filter(|p| selected.iter().any(|s| s == *p))
        .map(|p| p.to_string())
        .collect();
    for value in selected {
        if !result.contains(value) {
            result.push(value.clone());
        }
    }
    result
}

pub fn initial_selection(role: &Role) -> Vec<String> {
    ordered(&role.permissions().map(str::to_string).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::RoleClaim;

    #[test]
    fn test_permission_label() {
        assert_eq!(permission_label(permissions::SALE_PROGRAMS), "SalePrograms: Manage");
        assert_eq!(permission_label(permissions::ADMIN), "Admin");
        assert_eq!(permission_label("Custom"), "Custom");
    }

    #[test]
    fn test_toggle_has_no_duplicates() {
        let mut selected = vec![permissions::BRANDS.to_string()];
        toggle(&mut selected, permissions::BRANDS, true);
        assert_eq!(selected.len(), 1);
        toggle(&mut selected, permissions::ORDERS, true);
        toggle(&mut selected, permissions::BRANDS, false);
        assert_eq!(selected, vec![permissions::ORDERS.to_string()]);
    }

    #[test]
    fn test_ordered_keeps_unknown_values() {
        let selected = vec![
            "Permissions.Legacy.Export".to_string(),
            permissions::USERS.to_string(),
            permissions::BRANDS.to_string(),
        ];
        assert_eq!(
            ordered(&selected),
            vec![
                permissions::BRANDS.to_string(),
                permissions::USERS.to_string(),
                "Permissions.Legacy.Export".to_string(),
            ]
        );
    }

    #[test]
    fn test_initial_selection_reads_permission_claims() {
        let role = Role {
            id: "r1".into(),
            name: "Support".into(),
            description: None,
            claims: vec![
                RoleClaim::permission(permissions::ORDERS),
                RoleClaim::permission(permissions::ADMIN),
            ],
        };
        assert_eq!(
            initial_selection(&role),
            vec![permissions::ADMIN.to_string(), permissions::ORDERS.to_string()]
        );
    }
}
