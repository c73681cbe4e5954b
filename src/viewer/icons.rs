use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::transport::errors::ViewerError;

pub const DEFAULT_ICON_BASE: &str = "modules/mod_mumbleViewer/images";

/// Status markers in the order they are rendered before a user's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Authenticated,
    Suppressed,
    SelfDeafened,
    ServerDeafened,
    SelfMuted,
    ServerMuted,
}

impl IconKind {
    pub const ALL: [IconKind; 6] = [
        IconKind::Authenticated,
        IconKind::Suppressed,
        IconKind::SelfDeafened,
        IconKind::ServerDeafened,
        IconKind::SelfMuted,
        IconKind::ServerMuted,
    ];

    /// Key used in icon mapping files.
    pub fn key(self) -> &'static str {
        match self {
            IconKind::Authenticated => "authenticated",
            IconKind::Suppressed => "suppressed",
            IconKind::SelfDeafened => "self_deafened",
            IconKind::ServerDeafened => "server_deafened",
            IconKind::SelfMuted => "self_muted",
            IconKind::ServerMuted => "server_muted",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    fn file_name(self) -> &'static str {
        match self {
            IconKind::Authenticated => "authenticated.png",
            IconKind::Suppressed => "muted_suppressed.png",
            IconKind::SelfDeafened => "deafened_self.png",
            IconKind::ServerDeafened => "deafened_server.png",
            IconKind::SelfMuted => "muted_self.png",
            IconKind::ServerMuted => "muted_server.png",
        }
    }

    fn alt(self) -> &'static str {
        match self {
            IconKind::Authenticated => "Authenticated",
            IconKind::Suppressed => "Suppressed",
            IconKind::SelfDeafened => "Self-Deafened",
            IconKind::ServerDeafened => "Server-Deafened",
            IconKind::SelfMuted => "Self-Muted",
            IconKind::ServerMuted => "Server-Muted",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub alt: String,
}

impl Icon {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    icons: [Icon; 6],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IconEntry {
    Src(String),
    Full { src: String, alt: Option<String> },
}

impl IconSet {
    /// Stock file names and alt texts under `base`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let icons = IconKind::ALL.map(|kind| {
            let src = if base.is_empty() {
                kind.file_name().to_string()
            } else {
                format!("{base}/{}", kind.file_name())
            };
            Icon::new(src, kind.alt())
        });
        Self { icons }
    }

    pub fn get(&self, kind: IconKind) -> &Icon {
        &self.icons[kind.index()]
    }

    pub fn set(&mut self, kind: IconKind, icon: Icon) {
        self.icons[kind.index()] = icon;
    }

    /// Overlays a JSON object keyed by [`IconKind::key`] onto the defaults.
    /// Values are either a bare `src` string or `{"src": .., "alt": ..}`.
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let entries: HashMap<String, IconEntry> = serde_json::from_str(raw)
            .map_err(|err| ViewerError::InvalidConfig(format!("icon mapping: {err}")))?;
        let mut icons = Self::default();

        for (key, entry) in entries {
            let Some(kind) = IconKind::from_key(&key) else {
                log::warn!("ignoring unknown icon key {key:?}");
                continue;
            };
            let icon = match entry {
                IconEntry::Src(src) => Icon::new(src, kind.alt()),
                IconEntry::Full { src, alt } => {
                    Icon::new(src, alt.unwrap_or_else(|| kind.alt().to_string()))
                }
            };
            icons.set(kind, icon);
        }

        Ok(icons)
    }

    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::with_base(DEFAULT_ICON_BASE)
    }
}
