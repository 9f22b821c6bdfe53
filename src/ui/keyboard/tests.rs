use super::*;

fn key_event(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

fn collect_with_key_event(event: egui::Event, has_selection: bool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, has_selection);
        });
    });

    events
}

#[test]
fn test_delete_with_selection_emits_delete_intent() {
    let events = collect_with_key_event(key_event(egui::Key::Delete), true);

    assert_eq!(events, vec![AppIntent::DeleteConnectionRequested]);
}

#[test]
fn test_delete_without_selection_is_ignored() {
    let events = collect_with_key_event(key_event(egui::Key::Delete), false);

    assert!(events.is_empty());
}

#[test]
fn test_escape_emits_cancel() {
    let events = collect_with_key_event(key_event(egui::Key::Escape), false);

    assert_eq!(events, vec![AppIntent::CancelRequested]);
}

#[test]
fn test_other_keys_are_ignored() {
    let events = collect_with_key_event(key_event(egui::Key::A), true);

    assert!(events.is_empty());
}
