use shared::StencilId;

/// Stencil selection state (supports multi-select)
#[derive(Default)]
pub struct SelectionState {
    /// Selected stencil IDs (in order of selection)
    selected: Vec<StencilId>,
}

impl SelectionState {
    /// All selected stencils
    pub fn all(&self) -> &[StencilId] {
        &self.selected
    }

    /// Check if a stencil is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Select a single stencil (clears previous selection)
    pub fn select(&mut self, id: StencilId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Toggle selection (Ctrl+click behavior)
    pub fn toggle(&mut self, id: StencilId) {
        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Drop a stencil from the selection (after it was deleted)
    pub fn deselect(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected stencils
    pub fn count(&self) -> usize {
        self.selected.len()
    }
}
