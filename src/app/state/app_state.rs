use crate::app::CommandLog;
use crate::core::{
    BlockCount, BlockLayout, Connection, ConnectionGraph, ConnectorModel, CurveStyle, HitTester,
    LabelStore, ZoomLimits,
};
use crate::persistence::{self, DiagramDocument, KeyValueStore, MemoryStore};
use crate::shared::EditorOptions;
use glam::Vec2;

use super::{InteractionState, SelectionState, UiState, ViewState};

/// Hauptzustand einer Editor-Sitzung
pub struct AppState {
    /// Klemmenanzahl der Sitzung (bestimmt den Speicher-Schlüssel)
    pub block_count: BlockCount,
    /// Feste Anschlüsse (nach Sitzungsstart unveränderlich)
    pub connectors: ConnectorModel,
    /// Alle Verbindungen
    pub graph: ConnectionGraph,
    /// Alle Beschriftungen
    pub labels: LabelStore,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Pointer-Interaktion (Drag-Modus, Start-Anschluss, Doppel-Tap)
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Farben, Größen, Toleranzen)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Lokaler Speicher für den Autosave
    pub store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Erstellt eine Sitzung mit Standard-Optionen und flüchtigem Speicher
    pub fn new(block_count: BlockCount) -> Self {
        Self::open(
            block_count,
            EditorOptions::default(),
            Box::new(MemoryStore::new()),
        )
    }

    /// Öffnet eine Sitzung und lädt den gespeicherten Zustand aus `store`.
    pub fn open(
        block_count: BlockCount,
        options: EditorOptions,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let layout = BlockLayout::centered(
            block_count,
            Vec2::new(options.canvas_width, options.canvas_height),
            Vec2::new(options.block_width, options.block_height),
        );
        let connectors = ConnectorModel::generate(layout);
        let doc = persistence::load(store.as_ref(), block_count)
            .normalized(&connectors, options.max_labels);

        log::info!(
            "Sitzung mit {} Klemmen gestartet ({} Verbindungen, {} Beschriftungen)",
            block_count,
            doc.connections.len(),
            doc.labels.len()
        );

        Self {
            block_count,
            connectors,
            graph: ConnectionGraph::from_connections(doc.connections),
            labels: LabelStore::from_labels(doc.labels, options.max_labels),
            view: ViewState::new(),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            store,
        }
    }

    /// Aktueller Zustand als Dokument `{connections, labels}`
    pub fn document(&self) -> DiagramDocument {
        DiagramDocument {
            connections: self.graph.as_slice().to_vec(),
            labels: self.labels.as_slice().to_vec(),
        }
    }

    /// Selektierte Verbindung (falls vorhanden)
    pub fn selected_connection(&self) -> Option<&Connection> {
        self.selection
            .selected_connection
            .and_then(|index| self.graph.get(index))
    }

    /// Hit-Tests gegen den aktuellen Zustand
    pub fn hit_tester(&self) -> HitTester<'_> {
        HitTester::new(
            &self.connectors,
            &self.graph,
            &self.labels,
            self.options.hit_params(),
        )
    }

    /// Krümmung neuer und umgehängter Verbindungen
    pub fn curve_style(&self) -> CurveStyle {
        CurveStyle {
            curvature: self.options.curvature,
        }
    }

    /// Erlaubter Zoom-Bereich
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.options.viewport_scale_min, self.options.viewport_scale_max)
    }

    /// Anzahl der Verbindungen (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.graph.len()
    }

    /// Anzahl der Beschriftungen (für UI-Anzeige)
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
