use crate::errors::{AppError, AppResult};
use crate::models::{SignInForm, SignUpForm, User};
use crate::services::RecordId;
use crate::state::AppState;

impl AppState {
    /// Always appends, duplicate usernames included.
    pub fn sign_up(&mut self, form: SignUpForm) -> RecordId {
        tracing::info!("Signing up user: {}", form.username);
        self.users
            .push(User::new(form.username, form.password, form.email))
    }

    pub fn sign_in(&mut self, form: &SignInForm) -> AppResult<RecordId> {
        match self
            .users
            .find(|user| user.authenticate(&form.username, &form.password))
        {
            Some(id) => {
                tracing::info!("User logged in: {}", form.username);
                self.session = Some(id);
                Ok(id)
            }
            None => {
                tracing::warn!("Failed login attempt for user: {}", form.username);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// First half of the forget-password flow.
    pub fn find_account(&self, username: &str, email: &str) -> AppResult<RecordId> {
        self.users
            .find(|user| user.owns_email(username, email))
            .ok_or_else(|| {
                tracing::warn!("Password reset requested for unknown account: {}", username);
                AppError::AccountNotFound
            })
    }

    pub fn reset_password(&mut self, id: RecordId, new_password: String) -> AppResult<()> {
        let user = self.users.get_mut(id).ok_or(AppError::UserNotFound(id))?;
        user.password = new_password;
        tracing::info!("Password reset for user: {}", user.username);
        Ok(())
    }

    pub fn log_out(&mut self) -> AppResult<()> {
        let id = self.session.take().ok_or(AppError::NoActiveSession)?;
        if let Some(user) = self.users.get(id) {
            tracing::info!("User logged out: {}", user.username);
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.and_then(|id| self.users.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up_form(username: &str, password: &str, email: &str) -> SignUpForm {
        SignUpForm {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        }
    }

    fn sign_in_form(username: &str, password: &str) -> SignInForm {
        SignInForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn create_test_state() -> AppState {
        let mut state = AppState::default();
        state.sign_up(sign_up_form("alice", "pw1", "alice@example.com"));
        state.sign_up(sign_up_form("bob", "pw2", "bob@example.com"));
        state
    }

    #[test]
    fn test_sign_up_appends_verbatim() {
        let mut state = create_test_state();
        let id = state.sign_up(sign_up_form(" carol ", "", "not-an-email"));

        assert_eq!(state.users.len(), 3);
        let user = state.users.get(id).unwrap();
        assert_eq!(user.username, " carol ");
        assert_eq!(user.password, "");
        assert_eq!(user.email, "not-an-email");
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_sign_up_allows_duplicate_usernames() {
        let mut state = create_test_state();
        state.sign_up(sign_up_form("alice", "other", "alice2@example.com"));
        assert_eq!(state.users.len(), 3);
    }

    #[test]
    fn test_sign_in_success_sets_session() {
        let mut state = create_test_state();
        let id = state.sign_in(&sign_in_form("bob", "pw2")).unwrap();

        assert_eq!(state.session, Some(id));
        assert_eq!(state.current_user().unwrap().username, "bob");
    }

    #[test]
    fn test_sign_in_failure_leaves_session() {
        let mut state = create_test_state();
        state.sign_in(&sign_in_form("alice", "pw1")).unwrap();

        let err = state.sign_in(&sign_in_form("bob", "wrong")).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(state.current_user().unwrap().username, "alice");

        assert!(state.sign_in(&sign_in_form("ALICE", "pw1")).is_err());
    }

    #[test]
    fn test_sign_in_uses_first_match() {
        let mut state = create_test_state();
        let dup = state.sign_up(sign_up_form("alice", "pw1", "second@example.com"));

        let id = state.sign_in(&sign_in_form("alice", "pw1")).unwrap();
        assert_ne!(id, dup);
        assert_eq!(state.current_user().unwrap().email, "alice@example.com");
    }

    #[test]
    fn test_sign_in_duplicate_with_other_password() {
        let mut state = create_test_state();
        let dup = state.sign_up(sign_up_form("alice", "pw9", "second@example.com"));

        assert_eq!(state.sign_in(&sign_in_form("alice", "pw9")).unwrap(), dup);
    }

    #[test]
    fn test_reset_password_changes_credentials() {
        let mut state = create_test_state();
        let id = state.find_account("alice", "alice@example.com").unwrap();
        state.reset_password(id, "fresh".to_string()).unwrap();

        assert!(state.sign_in(&sign_in_form("alice", "pw1")).is_err());
        assert!(state.sign_in(&sign_in_form("alice", "fresh")).is_ok());
    }

    #[test]
    fn test_find_account_needs_matching_email() {
        let state = create_test_state();
        assert!(matches!(
            state.find_account("alice", "bob@example.com"),
            Err(AppError::AccountNotFound)
        ));
        assert!(state.find_account("nobody", "alice@example.com").is_err());
    }

    #[test]
    fn test_reset_is_visible_through_session() {
        let mut state = create_test_state();
        state.sign_in(&sign_in_form("bob", "pw2")).unwrap();

        let id = state.find_account("bob", "bob@example.com").unwrap();
        state.reset_password(id, "changed".to_string()).unwrap();
        assert_eq!(state.current_user().unwrap().password, "changed");
    }

    #[test]
    fn test_log_out() {
        let mut state = create_test_state();
        assert!(matches!(state.log_out(), Err(AppError::NoActiveSession)));

        state.sign_in(&sign_in_form("alice", "pw1")).unwrap();
        state.log_out().unwrap();
        assert!(!state.is_logged_in());
        assert_eq!(state.users.len(), 2);
    }
}
