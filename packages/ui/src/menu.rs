use store::Role;

/// Icon shape used by [`MenuEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Gauge,
    UsersGear,
    Book,
    FileLines,
    Envelope,
    PaperPlane,
    Robot,
    PenToSquare,
}

/// A side-menu link restricted to a set of roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: MenuIcon,
    pub roles: &'static [Role],
}

impl MenuEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL: &[Role] = &[Role::Admin, Role::Utilisateur];
const ADMIN: &[Role] = &[Role::Admin];

#[rustfmt::skip]
pub const MENU: [MenuEntry; 8] = [
    MenuEntry { label: "Dashboard", path: "/dashboard", icon: MenuIcon::Gauge, roles: ALL },
    MenuEntry { label: "Utilisateurs", path: "/utilisateurs", icon: MenuIcon::UsersGear, roles: ADMIN },
    MenuEntry { label: "Règlementaires", path: "/reglements", icon: MenuIcon::Book, roles: ALL },
    MenuEntry { label: "Rapports", path: "/rapports", icon: MenuIcon::FileLines, roles: ADMIN },
    MenuEntry { label: "Emails", path: "/emails", icon: MenuIcon::Envelope, roles: ADMIN },
    MenuEntry { label: "Emails Envoyés", path: "/emails-envoyes", icon: MenuIcon::PaperPlane, roles: ALL },
    MenuEntry { label: "Assistant AI", path: "/chatbot", icon: MenuIcon::Robot, roles: ALL },
    MenuEntry { label: "Prompt Edit", path: "/prompt", icon: MenuIcon::PenToSquare, roles: ALL },
];

/// Menu entries visible to `role`, in menu order.
pub fn visible_menu(role: Option<Role>) -> Vec<MenuEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    MENU.iter().filter(|e| e.allows(role)).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        visible_menu(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_utilisateur_never_sees_admin_entries() {
        let entries = visible_menu(Some(Role::Utilisateur));
        assert!(entries.iter().all(|e| e.allows(Role::Utilisateur)));
        let labels = labels(Some(Role::Utilisateur));
        assert!(!labels.contains(&"Utilisateurs"));
        assert!(!labels.contains(&"Rapports"));
        assert!(!labels.contains(&"Emails"));
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_admin_sees_everything_in_order() {
        assert_eq!(
            labels(Some(Role::Admin)),
            MENU.iter().map(|e| e.label).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_no_session_or_unknown_role_sees_nothing() {
        assert!(visible_menu(None).is_empty());
        assert!(visible_menu(Some(Role::Unknown)).is_empty());
    }
}
