use crate::error::AuthError;
use crate::identity::Identity;
use crate::identity::Role;

/// Decide whether an authenticated identity holds the required role.
///
/// Exact match on the flat role set: an admin-gated check fails for every
/// non-admin role, and a user-gated check fails for admins. Calling this
/// with anything other than the output of a successful authentication is a
/// programming error, which the type system rules out: an [`Identity`]
/// cannot be obtained any other way.
pub fn authorize(identity: &Identity, required: Role) -> Result<(), AuthError> {
    if identity.role() == required {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
