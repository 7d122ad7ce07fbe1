use std::sync::mpsc;

use crate::foundation::{
    core::{Point, Viewport},
    error::{AuroraError, AuroraResult},
};

pub(crate) mod entities;
pub(crate) mod perf;
pub(crate) mod renderer;

/// Signal from the embedding environment, applied at the start of the next frame.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// The drawing surface changed size.
    Resize(Viewport),
    /// The pointer moved; only the cursor target is updated.
    PointerMove(Point),
    /// The pointer was pressed; spawns a shockwave.
    PointerDown(Point),
    /// An external agent asked for a theme by name or alias.
    ThemeChanged(String),
    /// Landing (reduced-motion) mode toggled.
    LandingMode(bool),
}

/// Cloneable handle for queueing [`HostEvent`]s into a [`crate::Renderer`].
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::Sender<HostEvent>,
}

impl EventSender {
    pub(crate) fn new(tx: mpsc::Sender<HostEvent>) -> Self {
        Self { tx }
    }

    /// Queue an event. Fails only once the renderer has been dropped.
    pub fn send(&self, event: HostEvent) -> AuroraResult<()> {
        self.tx
            .send(event)
            .map_err(|_| AuroraError::lifecycle("renderer dropped; event discarded"))
    }

    /// Queue a theme change by name or alias.
    pub fn set_theme(&self, name: impl Into<String>) -> AuroraResult<()> {
        self.send(HostEvent::ThemeChanged(name.into()))
    }
}
