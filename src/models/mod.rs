mod user;
mod forms;
mod job;

pub use user::User;
pub use forms::{SignUpForm, SignInForm, ResetPasswordForm, SearchForm};
pub use job::Job;
