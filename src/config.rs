use crate::models::Subject;
use crate::storage::resolve_data_path;
use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BEHAVIORS: [&str; 6] =
    ["Eating", "Digging", "Grooming", "Sleeping", "Playing", "Exploring"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub port: u16,
    /// Behaviors offered by the page and accepted by the log endpoint.
    /// Empty means any non-empty behavior is accepted.
    pub behaviors: Vec<String>,
    pub subject1_name: String,
    pub subject2_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: resolve_data_path(),
            port: DEFAULT_PORT,
            behaviors: DEFAULT_BEHAVIORS.iter().map(|b| b.to_string()).collect(),
            subject1_name: "Rabbit 1".to_string(),
            subject2_name: "Rabbit 2".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = env::var("PORT").ok().and_then(|value| value.parse::<u16>().ok()) {
            config.port = port;
        }
        if let Ok(list) = env::var("APP_BEHAVIORS") {
            config.behaviors = parse_behaviors(&list);
        }
        if let Ok(name) = env::var("APP_SUBJECT1_NAME") {
            config.subject1_name = name;
        }
        if let Ok(name) = env::var("APP_SUBJECT2_NAME") {
            config.subject2_name = name;
        }

        config
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn subject_name(&self, subject: Subject) -> &str {
        match subject {
            Subject::Subject1 => &self.subject1_name,
            Subject::Subject2 => &self.subject2_name,
        }
    }

    /// Buttons shown on the page. An open vocabulary still gets the defaults.
    pub fn page_behaviors(&self) -> Vec<&str> {
        if self.behaviors.is_empty() {
            DEFAULT_BEHAVIORS.to_vec()
        } else {
            self.behaviors.iter().map(String::as_str).collect()
        }
    }

    pub fn accepts(&self, behavior: &str) -> bool {
        self.behaviors.is_empty() || self.behaviors.iter().any(|known| known == behavior)
    }
}

fn parse_behaviors(list: &str) -> Vec<String> {
    let mut behaviors: Vec<String> = Vec::new();
    for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        if !behaviors.iter().any(|known| known == item) {
            behaviors.push(item.to_string());
        }
    }
    behaviors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_list_is_trimmed_and_deduplicated() {
        let parsed = parse_behaviors(" Eating, Digging ,,Eating,Hopping ");
        assert_eq!(parsed, ["Eating", "Digging", "Hopping"]);
    }

    #[test]
    fn empty_allow_list_accepts_anything() {
        let mut config = AppConfig::default();
        assert!(config.accepts("Eating"));
        assert!(!config.accepts("Juggling"));

        config.behaviors.clear();
        assert!(config.accepts("Juggling"));
        assert_eq!(config.page_behaviors(), DEFAULT_BEHAVIORS);
    }

    #[test]
    fn subject_names_default() {
        let config = AppConfig::default();
        assert_eq!(config.subject_name(Subject::Subject1), "Rabbit 1");
        assert_eq!(config.subject_name(Subject::Subject2), "Rabbit 2");
    }
}
