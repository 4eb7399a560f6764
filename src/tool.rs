use egui::Pos2;

use crate::config::ToolSettings;
use crate::input::PointerEvent;
use crate::shape::Shape;

/// Interaction state of the drawing surface.
#[derive(Debug, Default)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing(Shape),
}

/// The pointer-driven drawing state machine.
///
/// At most one shape is in progress at a time; it leaves the tool only
/// through [`DrawTool::pointer_up`], which stamps the fill pattern and hands
/// the shape to the caller for committing. Stray events (a move or release
/// while idle, a press while already drawing) are dropped.
#[derive(Debug, Default)]
pub struct DrawTool {
    state: DrawState,
}

impl DrawTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The uncommitted shape, rendered as an overlay on top of the document.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.state {
            DrawState::Drawing(shape) => Some(shape),
            DrawState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing(_))
    }

    /// Feeds one pointer event through the state machine. Returns the
    /// finalized shape on a committing release.
    pub fn handle_event(&mut self, event: PointerEvent, settings: &ToolSettings) -> Option<Shape> {
        match event {
            PointerEvent::Pressed(pos) => {
                self.pointer_down(pos, settings);
                None
            }
            PointerEvent::Moved(pos) => {
                self.pointer_move(pos);
                None
            }
            PointerEvent::Released => self.pointer_up(settings),
        }
    }

    /// Starts a new shape from the current configuration snapshot. Ignored
    /// while another shape is still in progress.
    pub fn pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) {
        if self.is_drawing() {
            return;
        }
        self.state = DrawState::Drawing(Shape::begin(settings, pos));
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if let DrawState::Drawing(shape) = &mut self.state {
            shape.update_to(pos);
        }
    }

    /// Finalizes and returns the in-progress shape, stamping the fill
    /// pattern from the configuration current at release. A release with
    /// nothing in progress is a no-op.
    pub fn pointer_up(&mut self, settings: &ToolSettings) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            DrawState::Idle => None,
            DrawState::Drawing(mut shape) => {
                shape.finalize(settings);
                Some(shape)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::FillPattern;
    use crate::shape::ShapeKind;
    use egui::{Color32, pos2};

    fn settings_for(kind: ShapeKind) -> ToolSettings {
        let mut settings = ToolSettings::default();
        settings.tool = kind;
        settings
    }

    #[test]
    fn down_move_up_commits_one_shape() {
        let mut tool = DrawTool::new();
        let settings = settings_for(ShapeKind::Rectangle);

        tool.pointer_down(pos2(10.0, 10.0), &settings);
        assert!(tool.is_drawing());

        tool.pointer_move(pos2(110.0, 60.0));
        let shape = tool.pointer_up(&settings).expect("a shape was in progress");
        assert!(!tool.is_drawing());
        assert_eq!(shape.width(), 100.0);
        assert_eq!(shape.height(), 50.0);
        assert_eq!(shape.fill_pattern(), Some(FillPattern::Solid));
    }

    #[test]
    fn stray_move_and_release_while_idle_are_ignored() {
        let mut tool = DrawTool::new();
        let settings = settings_for(ShapeKind::Freehand);

        tool.pointer_move(pos2(5.0, 5.0));
        assert!(!tool.is_drawing());
        assert!(tool.pointer_up(&settings).is_none());
    }

    #[test]
    fn press_while_drawing_keeps_the_current_shape() {
        let mut tool = DrawTool::new();
        let settings = settings_for(ShapeKind::Freehand);

        tool.pointer_down(pos2(1.0, 1.0), &settings);
        let first_id = tool.in_progress().expect("drawing").id();

        tool.pointer_down(pos2(50.0, 50.0), &settings);
        assert_eq!(tool.in_progress().expect("still drawing").id(), first_id);
    }

    #[test]
    fn configuration_is_snapshotted_at_press_except_the_pattern() {
        let mut tool = DrawTool::new();
        let mut settings = settings_for(ShapeKind::Rectangle);
        settings.stroke_color = Color32::BLACK;
        settings.fill_pattern = FillPattern::Solid;

        tool.pointer_down(pos2(0.0, 0.0), &settings);

        // Palette and pattern change mid-drag.
        settings.stroke_color = Color32::RED;
        settings.fill_pattern = FillPattern::Checkered;

        let shape = tool.pointer_up(&settings).expect("a shape was in progress");
        assert_eq!(shape.stroke_color(), Color32::BLACK);
        assert_eq!(shape.fill_pattern(), Some(FillPattern::Checkered));
    }

    #[test]
    fn handle_event_drives_a_full_cycle() {
        let mut tool = DrawTool::new();
        let settings = settings_for(ShapeKind::Line);

        assert!(
            tool.handle_event(PointerEvent::Pressed(pos2(0.0, 0.0)), &settings)
                .is_none()
        );
        assert!(
            tool.handle_event(PointerEvent::Moved(pos2(30.0, 40.0)), &settings)
                .is_none()
        );
        let shape = tool
            .handle_event(PointerEvent::Released, &settings)
            .expect("release commits");
        assert_eq!(shape.points(), [pos2(0.0, 0.0), pos2(30.0, 40.0)]);
    }
}
