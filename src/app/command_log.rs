//! Verlauf ausgeführter Commands einer Sitzung.
//!
//! Pointer-Updates landen nicht im Verlauf, sie kommen bei jeder
//! Mausbewegung. Änderungen am Dokument (Verbindungen, Beschriftungen)
//! werden zusätzlich gezählt; der Zähler überlebt das Kürzen des Verlaufs.

use super::AppCommand;

/// Ausgeführte Commands in Reihenfolge plus Anzahl der Dokument-Änderungen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    document_edits: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Leerer Verlauf
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen ausgeführten Command auf.
    ///
    /// Bei `MAX_ENTRIES` wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if matches!(command, AppCommand::UpdatePointer { .. }) {
            return;
        }
        if command.edits_document() {
            self.document_edits += 1;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl der Dokument-Änderungen seit Sitzungsbeginn
    pub fn document_edits(&self) -> usize {
        self.document_edits
    }

    /// Letzte Änderung an Verbindungen oder Beschriftungen
    pub fn last_document_edit(&self) -> Option<&AppCommand> {
        self.entries.iter().rev().find(|c| c.edits_document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn record_drops_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(AppCommand::ZoomIn);
        }
        log.record(AppCommand::ZoomOut);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.last(), Some(&AppCommand::ZoomOut));
    }

    #[test]
    fn pointer_updates_are_not_recorded() {
        let mut log = CommandLog::new();

        log.record(AppCommand::UpdatePointer {
            position: Vec2::new(1.0, 2.0),
        });

        assert!(log.is_empty());
    }

    #[test]
    fn document_edits_are_counted_separately() {
        let mut log = CommandLog::new();

        log.record(AppCommand::CompleteArc { target: 4 });
        log.record(AppCommand::ZoomIn);
        log.record(AppCommand::SelectConnection { connection: 0 });
        log.record(AppCommand::ClearAll);

        assert_eq!(log.len(), 4);
        assert_eq!(log.document_edits(), 2);
        assert_eq!(log.last_document_edit(), Some(&AppCommand::ClearAll));
    }
}
