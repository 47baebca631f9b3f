use crate::domain::models::{
    board::{Board, BoardMember},
    photo::Photo,
    user::ROLE_ADMIN,
};
use crate::error::AppError;

/// Acting identity resolved from the session, passed explicitly into every
/// authorization check instead of being read from ambient request state.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub role: String,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Single decision type consumed by every entity handler. Handlers never
/// branch on roles inline; they ask this module and act on the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NotBoardMember,
    PhotoLocked,
    NotPhotoOwner,
    NotResourceOwner,
    AdminRequired,
}

impl DenyReason {
    fn message(&self) -> &'static str {
        match self {
            DenyReason::NotBoardMember => "Not a member of this board",
            DenyReason::PhotoLocked => "Photo is locked",
            DenyReason::NotPhotoOwner => "Not authorized to edit this photo",
            DenyReason::NotResourceOwner => "Not authorized",
            DenyReason::AdminRequired => "Admin access required",
        }
    }
}

impl Decision {
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(AppError::Forbidden(reason.message().to_string())),
        }
    }
}

/// Board read/send: admins bypass, everyone else needs a membership row.
pub fn board_access(ctx: &AuthContext, membership: Option<&BoardMember>) -> Decision {
    if ctx.is_admin() || membership.is_some() {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::NotBoardMember)
    }
}

/// Board create/rename/delete/membership management, user management and the
/// admin time-card views.
pub fn admin_only(ctx: &AuthContext) -> Decision {
    if ctx.is_admin() {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::AdminRequired)
    }
}

/// Photo edit, ordered checks, first match wins:
/// admin always; a locked photo then blocks everyone else, owner included;
/// owner; board member via allow_user_editing + can_edit; otherwise deny.
pub fn photo_edit(
    ctx: &AuthContext,
    photo: &Photo,
    board: Option<&Board>,
    membership: Option<&BoardMember>,
) -> Decision {
    if ctx.is_admin() {
        return Decision::Allow;
    }
    if photo.is_locked {
        return Decision::Deny(DenyReason::PhotoLocked);
    }
    if photo.user_id == ctx.user_id {
        return Decision::Allow;
    }
    if photo.board_id.is_some() {
        let board_allows = board.map(|b| b.allow_user_editing).unwrap_or(false);
        let member_can_edit = membership.map(|m| m.can_edit).unwrap_or(false);
        if board_allows && member_can_edit {
            return Decision::Allow;
        }
    }
    Decision::Deny(DenyReason::NotPhotoOwner)
}

/// Only admins may flip the lock flag; everyone else keeps the stored value.
pub fn photo_lock_value(ctx: &AuthContext, photo: &Photo, requested: Option<bool>) -> bool {
    if ctx.is_admin() {
        requested.unwrap_or(photo.is_locked)
    } else {
        photo.is_locked
    }
}

/// Photo delete: uploader or admin.
pub fn photo_delete(ctx: &AuthContext, photo: &Photo) -> Decision {
    if ctx.is_admin() || photo.user_id == ctx.user_id {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::NotResourceOwner)
    }
}

/// Contact mutation: creator or admin.
pub fn contact_mutation(ctx: &AuthContext, created_by: &str) -> Decision {
    if ctx.is_admin() || created_by == ctx.user_id {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::NotResourceOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::ROLE_USER;
    use chrono::Utc;

    fn ctx(user_id: &str, role: &str) -> AuthContext {
        AuthContext { user_id: user_id.to_string(), role: role.to_string() }
    }

    fn photo(owner: &str, board_id: Option<i64>, locked: bool) -> Photo {
        Photo {
            id: 1,
            user_id: owner.to_string(),
            project_id: None,
            board_id,
            contact_id: None,
            url: "https://example.com/p.jpg".to_string(),
            file_type: "image".to_string(),
            notes: None,
            markup_data: None,
            is_locked: locked,
            created_at: Utc::now(),
        }
    }

    fn board(allow_user_editing: bool) -> Board {
        Board {
            id: 7,
            name: "Site A".to_string(),
            board_type: "group".to_string(),
            created_by: "admin-1".to_string(),
            allow_user_editing,
            created_at: Utc::now(),
        }
    }

    fn membership(can_edit: bool) -> BoardMember {
        BoardMember {
            id: 1,
            board_id: 7,
            user_id: "u2".to_string(),
            can_edit,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn admin_edits_anything() {
        let p = photo("u1", None, true);
        assert_eq!(photo_edit(&ctx("a1", ROLE_ADMIN), &p, None, None), Decision::Allow);
    }

    #[test]
    fn locked_photo_blocks_owner() {
        let p = photo("u1", None, true);
        assert_eq!(
            photo_edit(&ctx("u1", ROLE_USER), &p, None, None),
            Decision::Deny(DenyReason::PhotoLocked)
        );
    }

    #[test]
    fn owner_edits_unlocked_photo() {
        let p = photo("u1", None, false);
        assert_eq!(photo_edit(&ctx("u1", ROLE_USER), &p, None, None), Decision::Allow);
    }

    #[test]
    fn board_member_needs_both_flags() {
        let p = photo("u1", Some(7), false);

        let b = board(true);
        let m = membership(true);
        assert_eq!(photo_edit(&ctx("u2", ROLE_USER), &p, Some(&b), Some(&m)), Decision::Allow);

        // Board flag off: member's own can_edit is irrelevant
        let b = board(false);
        assert_eq!(
            photo_edit(&ctx("u2", ROLE_USER), &p, Some(&b), Some(&m)),
            Decision::Deny(DenyReason::NotPhotoOwner)
        );

        // Board allows, member lacks can_edit
        let b = board(true);
        let m = membership(false);
        assert_eq!(
            photo_edit(&ctx("u2", ROLE_USER), &p, Some(&b), Some(&m)),
            Decision::Deny(DenyReason::NotPhotoOwner)
        );
    }

    #[test]
    fn non_member_cannot_edit_board_photo() {
        let p = photo("u1", Some(7), false);
        let b = board(true);
        assert_eq!(
            photo_edit(&ctx("u3", ROLE_USER), &p, Some(&b), None),
            Decision::Deny(DenyReason::NotPhotoOwner)
        );
    }

    #[test]
    fn lock_flag_only_moves_for_admins() {
        let p = photo("u1", None, false);
        assert!(photo_lock_value(&ctx("a1", ROLE_ADMIN), &p, Some(true)));
        assert!(!photo_lock_value(&ctx("u1", ROLE_USER), &p, Some(true)));

        let locked = photo("u1", None, true);
        assert!(photo_lock_value(&ctx("u1", ROLE_USER), &locked, Some(false)));
    }

    #[test]
    fn board_access_requires_membership_or_admin() {
        assert_eq!(board_access(&ctx("a1", ROLE_ADMIN), None), Decision::Allow);
        assert_eq!(board_access(&ctx("u2", ROLE_USER), Some(&membership(false))), Decision::Allow);
        assert_eq!(
            board_access(&ctx("u3", ROLE_USER), None),
            Decision::Deny(DenyReason::NotBoardMember)
        );
    }

    #[test]
    fn delete_is_owner_or_admin() {
        let p = photo("u1", None, false);
        assert_eq!(photo_delete(&ctx("u1", ROLE_USER), &p), Decision::Allow);
        assert_eq!(photo_delete(&ctx("a1", ROLE_ADMIN), &p), Decision::Allow);
        assert_eq!(
            photo_delete(&ctx("u2", ROLE_USER), &p),
            Decision::Deny(DenyReason::NotResourceOwner)
        );
    }
}
