//! Blockierende Fehlermeldung (z.B. nicht plotbarer Ausdruck).

use crate::app::{AppIntent, AppState};
use crate::shared::Message;

/// Zeigt die aktive Meldung als Modal und gibt erzeugte Events zurück.
pub fn show_alert(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(text) = state.ui.alert.as_deref() else {
        return events;
    };

    let modal = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(text);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button(state.text(Message::AlertOk)).clicked())
            .inner
    });

    // OK, Escape oder Klick neben das Modal bestätigen die Meldung
    if modal.inner || modal.should_close() {
        events.push(AppIntent::AlertDismissed);
    }

    events
}
