use crate::models::{Job, SearchForm};

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Matching jobs in collection order, never empty.
    Found(Vec<&'a Job>),
    NoMatch,
}

pub fn search_jobs<'a>(jobs: &'a [Job], form: &SearchForm) -> SearchOutcome<'a> {
    let category = form.category.to_lowercase();
    let matches: Vec<&Job> = jobs
        .iter()
        .filter(|job| {
            job.experience <= form.max_experience
                && job.salary >= form.min_salary
                && job.category.to_lowercase() == category
        })
        .collect();

    tracing::debug!(
        "Search (experience <= {}, salary >= {}, category {:?}) matched {} of {} jobs",
        form.max_experience,
        form.min_salary,
        form.category,
        matches.len(),
        jobs.len()
    );

    if matches.is_empty() {
        SearchOutcome::NoMatch
    } else {
        SearchOutcome::Found(matches)
    }
}
