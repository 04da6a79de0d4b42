use std::io::{BufRead, Write};
use crate::errors::AppResult;
use crate::handlers::Console;
use crate::models::SearchForm;
use crate::services::{search_jobs, SearchOutcome};
use crate::state::AppState;

pub fn handle_search<R: BufRead, W: Write, E: Write>(
    state: &AppState,
    console: &mut Console<R, W, E>,
) -> AppResult<()> {
    let form = SearchForm {
        max_experience: console.prompt_number("Enter required experience (years): ")?,
        min_salary: console.prompt_number("Enter minimum salary: ")?,
        category: console.prompt("Enter job category: ")?,
    };

    match search_jobs(state.jobs.as_slice(), &form) {
        SearchOutcome::Found(jobs) => {
            for job in jobs {
                console.say(job)?;
            }
            Ok(())
        }
        SearchOutcome::NoMatch => console.say("No jobs match your criteria."),
    }
}
