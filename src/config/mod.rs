use crate::domain::model::Name;

pub const DEFAULT_USER: &str = "Gopher";

/// Compiled-in application settings. Nothing here is read from flags,
/// files or the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user: Name,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: Name::from(DEFAULT_USER),
        }
    }
}
