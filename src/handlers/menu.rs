use std::io::{BufRead, Write};
use crate::errors::{AppError, AppResult, StorageError};
use crate::handlers::{auth, search, Console};
use crate::services::FileStore;
use crate::state::AppState;

const MAIN_MENU: &str = "1. Sign Up\n2. Sign In\n3. Forget Password\n4. Log Out\n5. Exit";
const JOB_BOARD_MENU: &str = "1. Search Jobs\n2. Log Out";
const CHOICE_PROMPT: &str = "Choose an option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    SignUp,
    SignIn,
    ForgetPassword,
    LogOut,
    Exit,
}

impl MainChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::SignUp),
            2 => Some(Self::SignIn),
            3 => Some(Self::ForgetPassword),
            4 => Some(Self::LogOut),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Runs the menus until Exit (or end of input), then saves both collections.
///
/// Returns whether everything was saved.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    store: &FileStore,
    console: &mut Console<R, W, E>,
) -> AppResult<bool> {
    loop {
        match main_menu(state, console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(AppError::InputClosed) => {
                tracing::info!("Input closed, saving and exiting");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    save_and_exit(state, store, console)
}

fn main_menu<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<Flow> {
    console.say(MAIN_MENU)?;
    let choice: i64 = console.prompt_number(CHOICE_PROMPT)?;

    match MainChoice::from_number(choice) {
        Some(MainChoice::SignUp) => auth::handle_sign_up(state, console)?,
        Some(MainChoice::SignIn) => auth::handle_sign_in(state, console)?,
        Some(MainChoice::ForgetPassword) => auth::handle_forget_password(state, console)?,
        Some(MainChoice::LogOut) => auth::handle_log_out(state, console)?,
        Some(MainChoice::Exit) => return Ok(Flow::Exit),
        None => console.say("Invalid choice. Please try again.")?,
    }

    if state.is_logged_in() {
        job_board_menu(state, console)?;
    }
    Ok(Flow::Continue)
}

// Repeats until the user logs out
fn job_board_menu<R: BufRead, W: Write, E: Write>(
    state: &mut AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    if let Some(user) = state.current_user() {
        tracing::debug!("Job board opened for {}", user.username);
    }

    loop {
        console.say(JOB_BOARD_MENU)?;
        let choice: i64 = console.prompt_number(CHOICE_PROMPT)?;

        match choice {
            1 => search::handle_search(state, console)?,
            2 => return auth::handle_log_out(state, console),
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }
}

/// Saves users and jobs independently and reports failures apart from success.
pub fn save_and_exit<R: BufRead, W: Write, E: Write>(
    state: &AppState,
    store: &FileStore,
    console: &mut Console<R, W, E>,
) -> AppResult<bool> {
    let failures: Vec<StorageError> = [
        store.save_users(state.users.as_slice()).err(),
        store.save_jobs(state.jobs.as_slice()).err(),
    ]
    .into_iter()
    .flatten()
    .collect();

    for e in &failures {
        tracing::error!("Failed to save data: {}", e);
        console.complain(format!("Error saving data: {}", e))?;
    }

    if failures.is_empty() {
        console.say("Data saved. Exiting...")?;
        Ok(true)
    } else {
        console.say("Data could not be fully saved. Exiting...")?;
        Ok(false)
    }
}
