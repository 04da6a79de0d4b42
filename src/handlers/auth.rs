use std::io::{BufRead, Write};
use crate::errors::{AppError, AppResult};
use crate::handlers::Console;
use crate::models::{ResetPasswordForm, SignInForm, SignUpForm};
use crate::state::AppState;

pub fn handle_sign_up<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    let form = SignUpForm {
        username: console.prompt("Enter username: ")?,
        password: console.prompt("Enter password: ")?,
        email: console.prompt("Enter email: ")?,
    };

    state.sign_up(form);
    console.say("User signed up successfully!")
}

pub fn handle_sign_in<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    let form = SignInForm {
        username: console.prompt("Enter username: ")?,
        password: console.prompt("Enter password: ")?,
    };

    match state.sign_in(&form) {
        Ok(_) => console.say("User logged in successfully!"),
        Err(AppError::InvalidCredentials) => console.say("Invalid username or password."),
        Err(e) => Err(e),
    }
}

pub fn handle_forget_password<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    let form = ResetPasswordForm {
        username: console.prompt("Enter username: ")?,
        email: console.prompt("Enter email: ")?,
    };

    // Only ask for the new password once the account is known
    let id = match state.find_account(&form.username, &form.email) {
        Ok(id) => id,
        Err(AppError::AccountNotFound) => return console.say("Invalid username or email."),
        Err(e) => return Err(e),
    };

    let new_password = console.prompt("Enter new password: ")?;
    state.reset_password(id, new_password)?;
    console.say("Password updated successfully!")
}

pub fn handle_log_out<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    match state.log_out() {
        Ok(()) => console.say("User logged out successfully!"),
        Err(AppError::NoActiveSession) => console.say("No user is currently logged in."),
        Err(e) => Err(e),
    }
}
