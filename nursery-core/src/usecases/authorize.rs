use super::prelude::*;

/// Resolves the requester supplied by the session layer and gates on
/// a minimum role.
pub fn authorize_user_by_id(db: &dyn Db, id: &Id, min_required_role: Role) -> Result<User> {
    if let Some(user) = db.try_get_user(id)? {
        return crate::authorization::authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(|_| Error::Unauthorized);
    }
    Err(Error::Unauthorized)
}
