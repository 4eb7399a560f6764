use crate::shape::Shape;

/// The ordered sequence of committed shapes. The in-progress shape lives in
/// the tool, not here; it only arrives through [`Document::commit`] at
/// pointer-up.
#[derive(Debug, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a committed shape. Chronological order is the vector order.
    pub fn commit(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Removes and returns the most recently committed shape, or `None` if
    /// there is nothing to undo.
    pub fn undo_last(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
