use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Parses a platform tag. Accepts Rust target names (`windows`, `macos`,
    /// `linux`) as well as the `win32` and `darwin` spellings.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "windows" | "win32" => Some(Platform::Windows),
            "macos" | "darwin" => Some(Platform::MacOS),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// The platform this binary runs on, if it is one of the known ones.
    pub fn current() -> Option<Self> {
        Self::from_tag(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
