use clema_editor::core::hit_test::HitTester;
use clema_editor::core::label::is_sanitized;
use clema_editor::core::{sanitize_text, CurveStyle};
use clema_editor::shared::curve_geometry::quadratic_bezier;
use clema_editor::{AppState, BlockCount, Label, LabelStore};
use glam::Vec2;

const STYLE: CurveStyle = CurveStyle { curvature: 0.3 };

fn state(n: u32) -> AppState {
    AppState::new(BlockCount::new(n).expect("gültige Anzahl"))
}

#[test]
fn test_no_duplicate_or_self_loop_for_any_pair() {
    let mut state = state(4);
    let ids: Vec<u32> = state.connectors.iter().map(|c| c.id).collect();

    for &p in &ids {
        for &q in &ids {
            let _ = state
                .graph
                .create(&state.connectors, p, q, STYLE, "#0074D9");
        }
    }

    let n = ids.len();
    assert_eq!(state.graph.len(), n * (n - 1) / 2);
    assert!(state.graph.iter().all(|c| c.a != c.b));
}

#[test]
fn test_arc_hit_is_complete_along_every_connection() {
    let mut state = state(6);
    for (a, b) in [(1, 12), (2, 3), (5, 9), (4, 11)] {
        state
            .graph
            .create(&state.connectors, a, b, STYLE, "#0074D9")
            .expect("Verbindung sollte gültig sein");
    }
    let hits = HitTester::new(
        &state.connectors,
        &state.graph,
        &state.labels,
        state.options.hit_params(),
    );

    for (index, conn) in state.graph.iter().enumerate() {
        let p0 = state.connectors.position(conn.a).expect("Anschluss a");
        let p2 = state.connectors.position(conn.b).expect("Anschluss b");
        for k in 1..100 {
            let t = k as f32 / 100.0;
            let point = quadratic_bezier(p0, conn.cp, p2, t);
            let hit = hits.arc(point);
            assert!(hit.is_some(), "t={} auf Verbindung {} verfehlt", t, index);
        }
    }
}

#[test]
fn test_label_cap_holds_at_maximum() {
    let mut store = LabelStore::new(20);
    for i in 0..20 {
        store
            .add(Vec2::new(i as f32, 0.0), "x")
            .expect("unter dem Maximum sollte Platz sein");
    }

    let rejected = store.add(Vec2::ZERO, "zuviel");

    assert!(rejected.is_err());
    assert_eq!(store.len(), 20);
}

#[test]
fn test_sanitized_text_only_contains_allowed_characters() {
    let inputs = [
        "L1 + L2",
        "<script>alert('x')</script>",
        "Ölpumpe #3 → Motor",
        "a=b; (c,d): e.f-g_h",
        "\t\n",
    ];
    for input in inputs {
        let text = sanitize_text(input);
        assert!(is_sanitized(&text), "'{}' enthält unerlaubte Zeichen", text);
    }

    let store = LabelStore::from_labels(
        vec![Label {
            x: 0.0,
            y: 0.0,
            text: "<b>fett</b>".to_string(),
        }],
        20,
    );
    assert_eq!(store.get(0).map(|l| l.text.as_str()), Some("bfettb"));
}
