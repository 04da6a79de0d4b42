use serde::{Deserialize, Serialize};
use std::fmt;

// Seed data only, there is no runtime path that creates or edits a job
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Job {
    pub title: String,
    pub category: String,
    pub experience: i32,  // Minimum years required
    pub salary: f64,
}

#[cfg(test)]
impl Job {
    pub fn new(title: &str, category: &str, experience: i32, salary: f64) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            experience,
            salary,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole salaries
        write!(
            f,
            "Job{{title='{}', category='{}', experience={}, salary={:?}}}",
            self.title, self.category, self.experience, self.salary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let job = Job::new("Engineer", "Tech", 2, 80000.0);
        assert_eq!(
            job.to_string(),
            "Job{title='Engineer', category='Tech', experience=2, salary=80000.0}"
        );
    }

    #[test]
    fn test_display_keeps_fraction() {
        let job = Job::new("Clerk", "Admin", 5, 30000.5);
        assert!(job.to_string().ends_with("salary=30000.5}"));
    }
}
