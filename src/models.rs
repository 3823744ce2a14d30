use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the two tracked individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Subject1,
    Subject2,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::Subject1, Subject::Subject2];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Subject1 => "subject1",
            Subject::Subject2 => "subject2",
        }
    }

    /// The partner that also receives a copy of a joint event.
    pub fn other(self) -> Subject {
        match self {
            Subject::Subject1 => Subject::Subject2,
            Subject::Subject2 => Subject::Subject1,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject(pub String);

impl fmt::Display for UnknownSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subject '{}'", self.0)
    }
}

impl std::error::Error for UnknownSubject {}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "subject1" => Ok(Subject::Subject1),
            "subject2" => Ok(Subject::Subject2),
            other => Err(UnknownSubject(other.to_string())),
        }
    }
}

/// A single recorded behavior. Never mutated once it is in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub behavior: String,
    pub timestamp: DateTime<Utc>,
    pub together: bool,
    pub note: String,
}

/// Per-subject event logs, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogStore {
    #[serde(default)]
    pub(crate) subject1: Vec<Entry>,
    #[serde(default)]
    pub(crate) subject2: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorCount {
    pub behavior: String,
    pub count: u64,
    pub together_count: u64,
    pub shared_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dominance {
    Joint,
    Individual,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OverallStats {
    pub total: u64,
    pub shared: u64,
    pub solo: u64,
    pub shared_pct: f64,
    pub solo_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub behavior: String,
    pub count: u64,
    pub together_count: u64,
    pub shared_pct: f64,
    pub dominance: Dominance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub subject: Subject,
    pub bars: Vec<ChartBar>,
    pub stats: OverallStats,
    pub summary: String,
    pub scale_max: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub behavior: String,
    pub iso_timestamp: String,
    pub together_label: &'static str,
    pub escaped_note: String,
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub subject: String,
    pub behavior: String,
    #[serde(default)]
    pub together: bool,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub reset: bool,
}

#[derive(Debug, Serialize)]
pub struct SubjectInfo {
    pub id: Subject,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BehaviorsResponse {
    pub behaviors: Vec<String>,
    pub subjects: Vec<SubjectInfo>,
}
