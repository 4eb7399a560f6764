use std::collections::VecDeque;

use crate::document::Document;

/// A discrete request against the committed document. Undo is a message, not
/// a level-triggered flag: pushing it once makes it fire once, and consuming
/// it is the acknowledgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasCommand {
    /// Remove the most recently committed shape.
    Undo,
}

/// FIFO of pending [`CanvasCommand`]s, drained once per frame.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<CanvasCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: CanvasCommand) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies every pending command to `document` and returns how many were
    /// consumed. Each message is applied exactly once; an undo against an
    /// empty document still counts as consumed.
    pub fn apply_pending(&mut self, document: &mut Document) -> usize {
        let mut applied = 0;
        while let Some(command) = self.pending.pop_front() {
            match command {
                CanvasCommand::Undo => match document.undo_last() {
                    Some(shape) => {
                        log::debug!("undid {} shape {}", shape.kind().label(), shape.id());
                    }
                    None => log::debug!("undo requested on an empty canvas"),
                },
            }
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolSettings;
    use crate::shape::{Shape, ShapeKind};
    use egui::pos2;

    fn committed_document(count: usize) -> Document {
        let mut settings = ToolSettings::default();
        settings.tool = ShapeKind::Freehand;
        let mut document = Document::new();
        for i in 0..count {
            document.commit(Shape::begin(&settings, pos2(i as f32, 0.0)));
        }
        document
    }

    #[test]
    fn each_undo_message_fires_exactly_once() {
        let mut document = committed_document(3);
        let mut queue = CommandQueue::new();
        queue.push(CanvasCommand::Undo);

        assert_eq!(queue.apply_pending(&mut document), 1);
        assert_eq!(document.len(), 2);

        // Nothing pending: a second drain must not undo again.
        assert_eq!(queue.apply_pending(&mut document), 0);
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn queued_undos_apply_in_order() {
        let mut document = committed_document(3);
        let mut queue = CommandQueue::new();
        queue.push(CanvasCommand::Undo);
        queue.push(CanvasCommand::Undo);

        assert_eq!(queue.apply_pending(&mut document), 2);
        assert_eq!(document.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn undo_on_empty_document_is_consumed_without_effect() {
        let mut document = committed_document(0);
        let mut queue = CommandQueue::new();
        queue.push(CanvasCommand::Undo);

        assert_eq!(queue.apply_pending(&mut document), 1);
        assert!(document.is_empty());
        assert!(queue.is_empty());
    }
}
