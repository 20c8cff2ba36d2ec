use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError, SlideDeck};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub slider: SliderConfig,
    pub menu: MenuConfig,
    pub slides: SlideDeck,
}

impl AppConfig {
    /// Reads a JSON config file. Missing sections fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.slider.validate()?;
        Ok(config)
    }
}

/// Tuning for the carousel controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Share of the surface width a drag must exceed to change slide.
    pub drag_threshold_ratio: f32,
    /// Duration of the slide animation the surface is expected to run.
    pub transition_ms: u64,
    /// Longest the transition lock may be held before `tick` releases it.
    /// `None` keeps the lock until the surface reports the end.
    pub lock_timeout_ms: Option<u64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            drag_threshold_ratio: 0.15,
            transition_ms: 400,
            lock_timeout_ms: Some(1_000),
        }
    }
}

impl SliderConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn lock_timeout(&self) -> Option<Duration> {
        self.lock_timeout_ms.map(Duration::from_millis)
    }

    /// Checks the ratio lies in `[0, 1)` and the lock outlasts the animation.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.drag_threshold_ratio;
        if !(0.0..1.0).contains(&ratio) {
            return Err(ShowcaseError::InvalidConfig(format!(
                "drag_threshold_ratio must be in [0, 1), got {ratio}"
            )));
        }
        if let Some(timeout) = self.lock_timeout_ms {
            if timeout < self.transition_ms {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "lock_timeout_ms ({timeout}) is shorter than transition_ms ({})",
                    self.transition_ms
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the burger navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Viewports wider than this close an open menu on resize.
    pub desktop_breakpoint: f32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 1024.0,
        }
    }
}
