//! Who may post marks and view rosters.

use crate::entities::{CourseSession, User};
use crate::enums::Role;

/// Admins may manage any course session; a teacher only the sessions they own.
#[must_use]
pub fn can_manage_session(actor: &User, session: &CourseSession) -> bool {
    if actor.role.can_update_any_marks() {
        return true;
    }
    actor.role == Role::Teacher && session.teacher_id.as_deref() == Some(actor.id.as_str())
}
