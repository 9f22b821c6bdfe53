//! Use-Case: Verbindungen erstellen und Enden umhängen.

use crate::app::use_cases::persistence::autosave;
use crate::app::AppState;
use crate::core::ConnectionEnd;

/// Verbindet die Anschlüsse `a` und `b` mit der Standardfarbe.
///
/// Self-Loops, unbekannte Anschlüsse und Duplikate (in beliebiger Richtung)
/// werden stillschweigend verworfen.
pub fn create_connection(state: &mut AppState, a: u32, b: u32) -> Option<usize> {
    let style = state.curve_style();
    let color = state.options.connection_color_default.clone();
    match state.graph.create(&state.connectors, a, b, style, &color) {
        Ok(index) => {
            log::info!("Verbindung {}→{} erstellt (Index {})", a, b, index);
            autosave(state);
            Some(index)
        }
        Err(e) => {
            log::debug!("Verbindung {}→{} abgelehnt: {}", a, b, e);
            None
        }
    }
}

/// Hängt das Ende `end` an den Anschluss `connector` und berechnet die
/// Krümmung neu. Abgelehnte Ziele lassen die Verbindung unverändert.
pub fn retarget_endpoint(
    state: &mut AppState,
    connection: usize,
    end: ConnectionEnd,
    connector: u32,
) {
    let style = state.curve_style();
    match state
        .graph
        .retarget_endpoint(&state.connectors, connection, end, connector, style)
    {
        Ok(()) => {
            log::info!(
                "Ende {:?} von Verbindung {} auf Anschluss {} umgehängt",
                end,
                connection,
                connector
            );
            autosave(state);
        }
        Err(e) => log::debug!("Umhängen abgelehnt: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BlockCount;

    fn state() -> AppState {
        AppState::new(BlockCount::new(2).expect("gültige Anzahl"))
    }

    #[test]
    fn create_saves_under_session_key() {
        let mut state = state();

        let index = create_connection(&mut state, 1, 4);

        assert_eq!(index, Some(0));
        let saved = state.store.get("clema_2").expect("lesbar");
        assert!(saved.is_some_and(|json| json.contains("\"a\":1")));
    }

    #[test]
    fn self_loop_and_reverse_duplicate_are_ignored() {
        let mut state = state();
        create_connection(&mut state, 1, 4);

        assert_eq!(create_connection(&mut state, 2, 2), None);
        assert_eq!(create_connection(&mut state, 4, 1), None);
        assert_eq!(state.graph.len(), 1);
    }

    #[test]
    fn retarget_onto_existing_pair_is_rejected() {
        let mut state = state();
        create_connection(&mut state, 1, 4);
        create_connection(&mut state, 3, 4);

        retarget_endpoint(&mut state, 0, ConnectionEnd::A, 3);

        let conn = state.graph.get(0).expect("Verbindung");
        assert_eq!((conn.a, conn.b), (1, 4));
    }

    #[test]
    fn retarget_recomputes_control_point() {
        let mut state = state();
        create_connection(&mut state, 1, 4);
        let before = state.graph.get(0).map(|c| c.cp).expect("Verbindung");

        retarget_endpoint(&mut state, 0, ConnectionEnd::A, 3);

        let conn = state.graph.get(0).expect("Verbindung");
        assert_eq!((conn.a, conn.b), (3, 4));
        assert_ne!(conn.cp, before);
    }
}
