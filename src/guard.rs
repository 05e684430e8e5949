use crate::{error::AppError, models::User, stores::auth::AuthState};

/// The signed-in user, or `Unauthorized` when there is no session.
pub fn ensure_authenticated(state: &AuthState) -> Result<&User, AppError> {
    match (&state.user, state.is_authenticated) {
        (Some(user), true) => Ok(user),
        _ => Err(AppError::Unauthorized),
    }
}

pub fn ensure_admin(state: &AuthState) -> Result<&User, AppError> {
    let user = ensure_authenticated(state)?;
    if !user.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}
