// Values collected from the console for each menu action

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ResetPasswordForm {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    pub max_experience: i32,
    pub min_salary: f64,
    pub category: String,
}
