//! Objekt-Historie: Buchführung über alle erzeugten Zeichenobjekte.
//!
//! Die Zeichenfläche besitzt die eigentlichen Objekte; die Historie ist eine
//! parallele Projektion in Erstellungsreihenfolge. Anzeigenamen werden aus
//! dem Eintragstyp über die aktuelle Sprache abgeleitet.

use crate::core::{Color, ObjectId};
use crate::shared::{Language, Message};
use glam::DVec2;
use indexmap::IndexMap;

/// Typ und Nutzdaten eines Historien-Eintrags.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Point { position: DVec2 },
    Line { point_ids: [ObjectId; 2] },
    Circle { point_ids: [ObjectId; 3] },
    /// Eingabe des Benutzers und der daraus normalisierte Ausdruck
    Function { input: String, normalized: String },
}

impl EntryKind {
    /// Konstruktionspunkte, die beim Löschen mitentfernt werden.
    pub fn constituent_point_ids(&self) -> &[ObjectId] {
        match self {
            EntryKind::Line { point_ids } => point_ids,
            EntryKind::Circle { point_ids } => point_ids,
            EntryKind::Point { .. } | EntryKind::Function { .. } => &[],
        }
    }

    /// Anzeigename in der gegebenen Sprache.
    pub fn display_name(&self, language: Language) -> String {
        let message = match self {
            EntryKind::Point { position } => Message::HistoryPoint {
                x: position.x,
                y: position.y,
            },
            EntryKind::Line { .. } => Message::HistoryLine,
            EntryKind::Circle { .. } => Message::HistoryCircle,
            EntryKind::Function { input, .. } => Message::HistoryFunction(input),
        };
        language.text(message)
    }
}

/// Ein sichtbarer Eintrag der Historie.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: ObjectId,
    pub kind: EntryKind,
    pub name: String,
    pub color: Color,
}

impl HistoryEntry {
    /// Erstellt einen Eintrag und leitet den Namen aus `kind` ab.
    pub fn new(id: ObjectId, kind: EntryKind, color: Color, language: Language) -> Self {
        let name = kind.display_name(language);
        Self {
            id,
            kind,
            name,
            color,
        }
    }
}

/// Geordnete Historie aller erzeugten Objekte.
#[derive(Debug, Clone, Default)]
pub struct ObjectHistory {
    entries: IndexMap<ObjectId, HistoryEntry>,
}

impl ObjectHistory {
    /// Erstellt eine leere Historie.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Hängt einen Eintrag an. Eine bereits vorhandene ID wird ersetzt.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.contains_key(&entry.id) {
            log::warn!("Historien-Eintrag {} existiert bereits, wird ersetzt", entry.id);
        }
        self.entries.insert(entry.id, entry);
    }

    /// Entfernt einen Eintrag unter Beibehaltung der Reihenfolge.
    pub fn remove(&mut self, id: ObjectId) -> Option<HistoryEntry> {
        self.entries.shift_remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&HistoryEntry> {
        self.entries.get(&id)
    }

    /// Einträge in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Berechnet alle Anzeigenamen für eine neue Sprache.
    pub fn relabel(&mut self, language: Language) {
        for entry in self.entries.values_mut() {
            entry.name = entry.kind.display_name(language);
        }
    }
}
