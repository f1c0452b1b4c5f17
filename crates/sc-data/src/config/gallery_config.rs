//! Gallery configuration file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use sc_core::{CloseFilterPolicy, Route, SessionSettings};

use crate::sources::{EmbeddedSource, JsonFileSource, ShowcaseSource};
use crate::DataError;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// External catalog document; the built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
    
    /// Filter behaviour when a showcase is closed
    pub close_filter_policy: CloseFilterPolicy,
    
    /// Deep link applied at startup, e.g. `/showcase/3`
    pub initial_route: Option<String>,
    
    /// Window settings
    pub window: WindowConfig,
}

/// Window settings for the app shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Showcase Gallery".to_string(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            close_filter_policy: CloseFilterPolicy::default(),
            initial_route: None,
            window: WindowConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Load a configuration file.
    ///
    /// A relative `catalog_path` is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&text)?;
        
        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
    
    /// Parse and validate configuration JSON
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
    
    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), DataError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(DataError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if let Some(route) = &self.initial_route {
            if !route.trim_start().starts_with('/') {
                return Err(DataError::Config(format!("initial_route must start with '/', got {:?}", route)));
            }
        }
        Ok(())
    }
    
    /// Session settings derived from this configuration
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            close_filter_policy: self.close_filter_policy,
        }
    }
    
    /// Startup route
    pub fn initial_route(&self) -> Route {
        self.initial_route
            .as_deref()
            .map(Route::parse)
            .unwrap_or_default()
    }
    
    /// The catalog source this configuration points at
    pub fn source(&self) -> Box<dyn ShowcaseSource> {
        match &self.catalog_path {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(EmbeddedSource::new()),
        }
    }
}
