//! Keyboard shortcut registry and documentation.

use statedeck_core::GalleryConfig;
use statedeck_core::input::{KEY_NEXT, KEY_PREVIOUS};

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub description: &'static str,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, description: &'static str) -> Self {
        Self {
            key: key.into(),
            description,
        }
    }

    /// Format the shortcut for display (e.g., "P").
    pub fn format(&self) -> String {
        if self.key.chars().count() == 1 {
            self.key.to_uppercase()
        } else {
            self.key.clone()
        }
    }
}

/// Registry of the gallery's keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// All shortcuts for a configuration.
    pub fn all(config: &GalleryConfig) -> Vec<Shortcut> {
        vec![
            Shortcut::new(
                config.activate_key.as_str(),
                "Hold to listen, release to process",
            ),
            Shortcut::new(KEY_PREVIOUS, "Previous variant"),
            Shortcut::new(KEY_NEXT, "Next variant"),
        ]
    }

    /// Log all shortcuts at info level.
    pub fn log_all(config: &GalleryConfig) {
        for shortcut in Self::all(config) {
            log::info!("  {:12} {}", shortcut.format(), shortcut.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("p", "").format(), "P");
        assert_eq!(Shortcut::new("ArrowLeft", "").format(), "ArrowLeft");
    }

    #[test]
    fn test_registry_follows_activate_key() {
        let config = GalleryConfig {
            activate_key: "r".to_string(),
            ..GalleryConfig::default()
        };
        let all = ShortcutRegistry::all(&config);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].format(), "R");
        assert_eq!(all[1].key, KEY_PREVIOUS);
        assert_eq!(all[2].key, KEY_NEXT);
    }
}
