use std::fmt;
use std::path::{Path, PathBuf};

/// Which content the sync client tracks: drafts or published items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncMode {
    Preview,
    Live,
}

impl SyncMode {
    pub fn from_preview(is_preview: bool) -> Self {
        if is_preview {
            Self::Preview
        } else {
            Self::Live
        }
    }

    /// Cache namespace directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preview => f.write_str("Preview"),
            Self::Live => f.write_str("Live"),
        }
    }
}

/// Settings a sync client is built with.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncClientConfig {
    pub guid: String,
    pub api_key: String,
    pub mode: SyncMode,
    pub languages: Vec<String>,
    pub channels: Vec<String>,
    /// Cache directory for this mode. Preview and live never share one.
    pub cache_path: PathBuf,
}

impl SyncClientConfig {
    /// Builds a config whose cache lives under `<cache_root>/<preview|live>`.
    pub fn new(
        guid: impl Into<String>,
        api_key: impl Into<String>,
        mode: SyncMode,
        language_code: impl Into<String>,
        channel_name: impl Into<String>,
        cache_root: &Path,
    ) -> Self {
        Self {
            guid: guid.into(),
            api_key: api_key.into(),
            mode,
            languages: vec![language_code.into()],
            channels: vec![channel_name.into()],
            cache_path: cache_root.join(mode.as_str()),
        }
    }
}

// Keep API keys out of logs.
impl fmt::Debug for SyncClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncClientConfig")
            .field("guid", &self.guid)
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .field("languages", &self.languages)
            .field("channels", &self.channels)
            .field("cache_path", &self.cache_path)
            .finish()
    }
}
