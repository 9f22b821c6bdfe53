/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index der selektierten Verbindung (höchstens eine)
    pub selected_connection: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_connection = None;
    }

    /// Prüft, ob die Verbindung `index` selektiert ist.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_connection == Some(index)
    }
}
