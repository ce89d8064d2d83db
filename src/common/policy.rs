// src/common/policy.rs

use crate::models::user::{User, UserRole};

// O acesso ao painel é decidido pelo papel do usuário, verificado por
// função de política — nada de comparar e-mail hardcoded.

/// Papéis com acesso ao back-office.
pub fn role_can_access_panel(role: UserRole) -> bool {
    matches!(role, UserRole::Admin | UserRole::Staff)
}

pub fn can_access_panel(user: &User) -> bool {
    role_can_access_panel(user.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_staff_access_panel() {
        assert!(role_can_access_panel(UserRole::Admin));
        assert!(role_can_access_panel(UserRole::Staff));
    }

    #[test]
    fn customer_has_no_panel_access() {
        assert!(!role_can_access_panel(UserRole::Customer));
    }
}
