//! Activation rules for the user entity.

use super::user::User;

/// Domain service guarding active-status transitions.
pub struct ActivationPolicy;

impl ActivationPolicy {
    /// A user can only be activated while inactive.
    pub fn can_activate(user: &User) -> bool {
        !user.active
    }

    /// A user can only be deactivated while active.
    pub fn can_deactivate(user: &User) -> bool {
        user.active
    }
}
