//! Timed input scripts that stand in for a live browser session.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    DocumentEvent, MenuView, Page, PageEvent, PresentationSurface, Result, SlideInfoPanel,
};

/// One event and the offset from the start of the script it fires at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub at_ms: u64,
    pub event: PageEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_surface_width")]
    pub surface_width: f32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default)]
    pub events: Vec<ScriptStep>,
}

fn default_surface_width() -> f32 {
    960.0
}

fn default_viewport_width() -> f32 {
    768.0
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses a script and orders its steps by time. Steps sharing a
    /// timestamp keep their written order.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut script: Script = serde_json::from_str(raw)?;
        script.events.sort_by_key(|step| step.at_ms);
        Ok(script)
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: usize,
    pub forced_releases: usize,
    pub final_index: usize,
    pub final_title: String,
    pub menu_open: bool,
}

/// Feeds every step into `page`, ticking the clock before each one.
///
/// The script's viewport width is applied as an initial resize so the menu
/// sees the same layout the script was written for.
pub fn replay<S, P, V>(page: &mut Page<S, P, V>, script: &Script, origin: Instant) -> ReplayReport
where
    S: PresentationSurface,
    P: SlideInfoPanel,
    V: MenuView,
{
    page.handle(
        PageEvent::Document(DocumentEvent::Resize {
            viewport_width: script.viewport_width,
        }),
        origin,
    );

    let mut forced_releases = 0;
    for step in &script.events {
        let now = origin + Duration::from_millis(step.at_ms);
        if page.tick(now) {
            forced_releases += 1;
        }
        debug!(at_ms = step.at_ms, event = ?step.event, "replaying event");
        page.handle(step.event, now);
    }

    ReplayReport {
        steps: script.events.len(),
        forced_releases,
        final_index: page.carousel().current_index(),
        final_title: page.carousel().current_slide().title.clone(),
        menu_open: page.menu().is_open(),
    }
}
