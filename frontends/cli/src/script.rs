use serde::Deserialize;
use tracing::info;
use voyage::{DropGesture, ItineraryEdit, TripEditor};

/// One step of an edit script
///
/// ```yaml
/// - edit: { op: delete_event, day_index: 0, id: evt-1 }
/// - drop:
///     source: { dayIndex: 0, eventIndex: 0 }
///     target: { dayIndex: 0, eventIndex: 1 }
///     pointerY: 70
///     targetRow: { top: 40, height: 40 }
/// - undo
/// - redo
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Edit(ItineraryEdit),
    Drop(DropGesture),
    Undo,
    Redo,
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Run every step against `editor`. Returns how many steps changed the itinerary.
pub fn replay(editor: &mut TripEditor, steps: &[ScriptStep]) -> usize {
    let mut changed = 0;
    for (n, step) in steps.iter().enumerate() {
        let applied = match step {
            ScriptStep::Edit(edit) => editor.apply(edit),
            ScriptStep::Drop(gesture) => editor.apply_drop(gesture),
            ScriptStep::Undo => editor.undo(),
            ScriptStep::Redo => editor.redo(),
        };
        info!("[Replay] step {} {:?}: changed={}", n + 1, step, applied);
        if applied {
            changed += 1;
        }
    }
    changed
}
