use crate::core::{PanGrab, Viewport};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Pan/Zoom der Zeichenfläche
    pub viewport: Viewport,
    /// Laufender Pan-Drag (mittlere Maustaste oder Modifier + Drag)
    pub pan_grab: Option<PanGrab>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
            pan_grab: None,
        }
    }
}
