//! Top-level navigation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A top-level section of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Learn,
    Techniques,
    Assessment,
    Quiz,
    Create,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Learn,
        Section::Techniques,
        Section::Assessment,
        Section::Quiz,
        Section::Create,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Learn => "learn",
            Section::Techniques => "techniques",
            Section::Assessment => "assessment",
            Section::Quiz => "quiz",
            Section::Create => "create",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Learn => "Aprender",
            Section::Techniques => "Técnicas",
            Section::Assessment => "Evaluación",
            Section::Quiz => "Práctica Docente",
            Section::Create => "Diseñador IA",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Which section is on screen. Switching has no other effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shell {
    current: Section,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn navigate(&mut self, section: Section) {
        self.current = section;
    }

    /// The brand link always leads back to the learning section.
    pub fn go_home(&mut self) {
        self.current = Section::Learn;
    }
}
