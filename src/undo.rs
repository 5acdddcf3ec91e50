//! Undo/Redo system for canvas operations.
//!
//! Implements the Command pattern: each undoable action stores enough
//! information to reverse its effect on the composition. Handlers record
//! commands after performing the action; undo/redo replay them.

use crate::canvas::Composition;
use crate::model::{PlacedItem, Transform};

/// A command that can be undone and redone.
#[derive(Debug, Clone)]
pub enum Command {
    /// An item was placed on the canvas.
    AddItem {
        /// The placement that was added.
        placed: PlacedItem,
    },
    /// An item was removed from the canvas.
    RemoveItem {
        /// The placement that was removed (stored for undo).
        placed: PlacedItem,
    },
    /// An item's transform changed (move, resize, or rotate).
    TransformItem {
        /// The clothing item id of the placement.
        item_id: String,
        /// The transform before the change.
        before: Transform,
        /// The transform after the change.
        after: Transform,
    },
    /// The canvas was cleared.
    ClearItems {
        /// All placements that were cleared (stored for undo).
        items: Vec<PlacedItem>,
    },
    /// Groups multiple commands into one undo step.
    Batch {
        /// Description of the batch operation.
        description: String,
        /// The commands in this batch.
        commands: Vec<Command>,
    },
}

impl Command {
    /// Get a human-readable description of this command.
    pub fn description(&self) -> String {
        match self {
            Command::AddItem { placed } => format!("Place '{}'", placed.item.name),
            Command::RemoveItem { placed } => format!("Remove '{}'", placed.item.name),
            Command::TransformItem { before, after, .. } => {
                if before.rotation != after.rotation {
                    "Rotate item".to_string()
                } else if before.size != after.size {
                    "Resize item".to_string()
                } else {
                    "Move item".to_string()
                }
            }
            Command::ClearItems { items } => format!("Clear {} items", items.len()),
            Command::Batch { description, .. } => description.clone(),
        }
    }
}

/// Configuration for the undo stack.
#[derive(Debug, Clone)]
pub struct UndoConfig {
    /// Maximum number of commands to keep in history.
    pub max_history: usize,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            max_history: crate::constants::history::MAX_UNDO,
        }
    }
}

/// The undo/redo history stack.
///
/// When a new command is recorded it is pushed to the undo stack and the
/// redo stack is cleared. Undo moves a command to the redo stack; redo
/// moves it back.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    config: UndoConfig,
}

impl UndoStack {
    /// Create a new empty undo stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: UndoConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Record a command. Clears the redo stack.
    pub fn push(&mut self, command: Command) {
        log::debug!("Undo: pushed '{}'", command.description());
        self.undo_stack.push(command);
        self.redo_stack.clear();

        while self.undo_stack.len() > self.config.max_history {
            self.undo_stack.remove(0);
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop the most recent command for undoing; it moves to the redo stack.
    pub fn pop_undo(&mut self) -> Option<Command> {
        let cmd = self.undo_stack.pop()?;
        self.redo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Pop the most recent undone command for redoing; it moves back to
    /// the undo stack.
    pub fn pop_redo(&mut self) -> Option<Command> {
        let cmd = self.redo_stack.pop()?;
        self.undo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Description of the command that would be undone.
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(Command::description)
    }

    /// Description of the command that would be redone.
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(Command::description)
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Number of commands in undo history.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands in redo history.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

/// Undo the most recent command against the composition.
/// Returns false if there was nothing to undo.
pub fn undo_command(stack: &mut UndoStack, composition: &mut Composition) -> bool {
    let Some(cmd) = stack.pop_undo() else {
        return false;
    };
    log::debug!("Undo: '{}'", cmd.description());
    apply_undo(&cmd, composition);
    true
}

/// Redo the most recently undone command against the composition.
/// Returns false if there was nothing to redo.
pub fn redo_command(stack: &mut UndoStack, composition: &mut Composition) -> bool {
    let Some(cmd) = stack.pop_redo() else {
        return false;
    };
    log::debug!("Redo: '{}'", cmd.description());
    apply_redo(&cmd, composition);
    true
}

fn apply_undo(cmd: &Command, composition: &mut Composition) {
    match cmd {
        Command::AddItem { placed } => {
            composition.remove_item(placed.id());
        }
        Command::RemoveItem { placed } => {
            composition.restore_item(placed.clone());
        }
        Command::TransformItem {
            item_id, before, ..
        } => {
            composition.apply_item_transform(item_id, *before);
        }
        Command::ClearItems { items } => {
            composition.restore_items(items.clone());
        }
        Command::Batch { commands, .. } => {
            for cmd in commands.iter().rev() {
                apply_undo(cmd, composition);
            }
        }
    }
}

fn apply_redo(cmd: &Command, composition: &mut Composition) {
    match cmd {
        Command::AddItem { placed } => {
            composition.restore_item(placed.clone());
        }
        Command::RemoveItem { placed } => {
            composition.remove_item(placed.id());
        }
        Command::TransformItem { item_id, after, .. } => {
            composition.apply_item_transform(item_id, *after);
        }
        Command::ClearItems { .. } => {
            composition.clear();
        }
        Command::Batch { commands, .. } => {
            for cmd in commands {
                apply_redo(cmd, composition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClothingCategory, ClothingItem, Position};

    fn test_item(id: &str) -> ClothingItem {
        ClothingItem::new(id, format!("Item {id}"), ClothingCategory::Tops, "item.jpg")
    }

    fn fixed_composition() -> Composition {
        Composition::with_spawn_offsets(|| (50.0, 50.0))
    }

    #[test]
    fn test_undo_stack_basic() {
        let mut stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());

        let mut composition = fixed_composition();
        let placed = composition.add_item(&test_item("1")).clone();
        stack.push(Command::AddItem { placed });

        assert!(stack.can_undo());
        assert!(!stack.can_redo());

        assert!(undo_command(&mut stack, &mut composition));
        assert!(composition.is_empty());
        assert!(stack.can_redo());

        assert!(redo_command(&mut stack, &mut composition));
        assert_eq!(composition.len(), 1);
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut stack = UndoStack::new();
        let mut composition = fixed_composition();

        let placed = composition.add_item(&test_item("1")).clone();
        stack.push(Command::AddItem { placed });
        undo_command(&mut stack, &mut composition);
        assert!(stack.can_redo());

        let placed = composition.add_item(&test_item("2")).clone();
        stack.push(Command::AddItem { placed });
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_max_history() {
        let mut stack = UndoStack::with_config(UndoConfig { max_history: 3 });
        let mut composition = fixed_composition();
        for i in 0..5 {
            let placed = composition.add_item(&test_item(&i.to_string())).clone();
            stack.push(Command::AddItem { placed });
        }
        assert_eq!(stack.undo_count(), 3);
    }

    #[test]
    fn test_undo_remove_restores_transform() {
        let mut stack = UndoStack::new();
        let mut composition = fixed_composition();
        composition.add_item(&test_item("1"));
        composition.rotate("1");
        composition.resize_by("1", 30.0, 0.0);

        let placed = composition.item("1").cloned().unwrap();
        composition.remove_item("1");
        stack.push(Command::RemoveItem { placed });

        undo_command(&mut stack, &mut composition);
        let restored = composition.item("1").unwrap();
        assert_eq!(restored.rotation, 45.0);
        assert_eq!(restored.size.width, 150.0);
        assert_eq!(restored.z_index, 1);
    }

    #[test]
    fn test_undo_transform_restores_position() {
        let mut stack = UndoStack::new();
        let mut composition = fixed_composition();
        composition.add_item(&test_item("1"));

        let before = composition.item("1").unwrap().transform();
        composition.begin_drag("1", (0.0, 0.0));
        composition.update_drag((25.0, 35.0));
        composition.end_drag();
        let after = composition.item("1").unwrap().transform();

        stack.push(Command::TransformItem {
            item_id: "1".to_string(),
            before,
            after,
        });

        undo_command(&mut stack, &mut composition);
        assert_eq!(
            composition.item("1").map(|p| p.position),
            Some(Position { x: 50.0, y: 50.0 })
        );

        redo_command(&mut stack, &mut composition);
        assert_eq!(
            composition.item("1").map(|p| p.position),
            Some(Position { x: 75.0, y: 85.0 })
        );
    }

    #[test]
    fn test_undo_clear_restores_all() {
        let mut stack = UndoStack::new();
        let mut composition = fixed_composition();
        composition.add_item(&test_item("1"));
        composition.add_item(&test_item("2"));

        let items = composition.items().to_vec();
        composition.clear();
        stack.push(Command::ClearItems { items });

        undo_command(&mut stack, &mut composition);
        assert_eq!(composition.len(), 2);

        redo_command(&mut stack, &mut composition);
        assert!(composition.is_empty());
    }

    #[test]
    fn test_batch_undoes_in_reverse() {
        let mut stack = UndoStack::new();
        let mut composition = fixed_composition();

        let old = composition.add_item(&test_item("1")).clone();
        // Replacement of an existing placement records as a batch.
        let new = composition.add_item(&test_item("1")).clone();
        stack.push(Command::Batch {
            description: "Replace 'Item 1'".to_string(),
            commands: vec![
                Command::RemoveItem { placed: old },
                Command::AddItem { placed: new },
            ],
        });

        undo_command(&mut stack, &mut composition);
        assert_eq!(composition.len(), 1);
        assert_eq!(composition.item("1").map(|p| p.z_index), Some(1));

        redo_command(&mut stack, &mut composition);
        assert_eq!(composition.item("1").map(|p| p.z_index), Some(2));
    }

    #[test]
    fn test_command_descriptions() {
        let mut composition = fixed_composition();
        let placed = composition.add_item(&test_item("1")).clone();
        let before = placed.transform();
        let mut after = before;
        after.rotation = 45.0;

        assert_eq!(
            Command::AddItem {
                placed: placed.clone()
            }
            .description(),
            "Place 'Item 1'"
        );
        assert_eq!(
            Command::TransformItem {
                item_id: "1".to_string(),
                before,
                after,
            }
            .description(),
            "Rotate item"
        );
    }
}
