mod console;
mod auth;
mod search;
mod menu;

pub use console::{Console, StdConsole};
pub use menu::run_session;
