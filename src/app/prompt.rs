//! Synchrone Benutzer-Nachfragen (Texteingabe, Farbwahl, Hinweise).
//!
//! Der Controller ruft die Nachfrage auf und verarbeitet die Antwort bzw.
//! deren Fehlen (`None` = abgebrochen oder später per Intent nachgeliefert).

use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Anlass einer Texteingabe
#[derive(Debug, Clone, PartialEq)]
pub enum TextRequest {
    /// Neue Beschriftung an `position`
    NewLabel { position: Vec2 },
    /// Bestehende Beschriftung `index` mit aktuellem Text
    EditLabel { index: usize, current: String },
}

/// Farbwahl für eine Verbindung
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRequest {
    /// Index der Verbindung
    pub index: usize,
    /// Aktuelle Farbe (Hex)
    pub current: String,
}

/// Fähigkeit des Hosts, den Benutzer zu fragen oder zu informieren.
pub trait UserPrompt {
    /// Fragt einen Text ab.
    fn request_text(&mut self, request: TextRequest) -> Option<String>;
    /// Fragt eine Farbe ab (Hex-String).
    fn request_color(&mut self, request: ColorRequest) -> Option<String>;
    /// Zeigt einen nicht-fatalen Hinweis.
    fn notify(&mut self, message: &str);
    /// Verwirft noch offene Text- und Farbanfragen.
    fn cancel_pending(&mut self);
}

/// Nachfrage ohne Benutzer: bricht jede Eingabe ab, Hinweise gehen ins Log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl UserPrompt for NoPrompt {
    fn request_text(&mut self, request: TextRequest) -> Option<String> {
        log::debug!("Texteingabe ohne Benutzer abgebrochen: {:?}", request);
        None
    }

    fn request_color(&mut self, request: ColorRequest) -> Option<String> {
        log::debug!("Farbwahl ohne Benutzer abgebrochen: {:?}", request);
        None
    }

    fn notify(&mut self, message: &str) {
        log::info!("Hinweis: {}", message);
    }

    fn cancel_pending(&mut self) {}
}

#[derive(Debug, Default)]
struct Script {
    texts: VecDeque<Option<String>>,
    colors: VecDeque<Option<String>>,
    text_requests: Vec<TextRequest>,
    color_requests: Vec<ColorRequest>,
    notices: Vec<String>,
    cancellations: usize,
}

/// Vorab festgelegte Antworten (Automatisierung, Tests).
///
/// Klone teilen sich dieselbe Antwort-Warteschlange; so bleibt nach der
/// Übergabe an den Controller ein Handle zum Auswerten.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    script: Rc<RefCell<Script>>,
}

impl ScriptedPrompt {
    /// Erstellt eine leere Vorgabe (alle Nachfragen → `None`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht die nächste Antwort auf eine Texteingabe ein.
    pub fn push_text(&self, answer: Option<&str>) {
        self.script
            .borrow_mut()
            .texts
            .push_back(answer.map(str::to_string));
    }

    /// Reiht die nächste Antwort auf eine Farbwahl ein.
    pub fn push_color(&self, answer: Option<&str>) {
        self.script
            .borrow_mut()
            .colors
            .push_back(answer.map(str::to_string));
    }

    /// Bisher gestellte Textanfragen
    pub fn text_requests(&self) -> Vec<TextRequest> {
        self.script.borrow().text_requests.clone()
    }

    /// Bisher gestellte Farbanfragen
    pub fn color_requests(&self) -> Vec<ColorRequest> {
        self.script.borrow().color_requests.clone()
    }

    /// Bisher angezeigte Hinweise
    pub fn notices(&self) -> Vec<String> {
        self.script.borrow().notices.clone()
    }

    /// Wie oft offene Anfragen verworfen wurden
    pub fn cancellations(&self) -> usize {
        self.script.borrow().cancellations
    }
}

impl UserPrompt for ScriptedPrompt {
    fn request_text(&mut self, request: TextRequest) -> Option<String> {
        let mut script = self.script.borrow_mut();
        script.text_requests.push(request);
        script.texts.pop_front().flatten()
    }

    fn request_color(&mut self, request: ColorRequest) -> Option<String> {
        let mut script = self.script.borrow_mut();
        script.color_requests.push(request);
        script.colors.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.script.borrow_mut().notices.push(message.to_string());
    }

    fn cancel_pending(&mut self) {
        self.script.borrow_mut().cancellations += 1;
    }
}
