//! Display-list container holding references to drawable slots.

use crate::engine::SlotId;

/// Ordered child list handed to the renderer. Has no logic of its own.
#[derive(Debug, Default, Clone)]
pub struct Container {
    children: Vec<SlotId>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self, child: SlotId) {
        self.children.push(child);
    }

    pub fn remove_children(&mut self) {
        self.children.clear();
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[SlotId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_clear() {
        let mut container = Container::new();
        container.add_child(SlotId(0));
        container.add_child(SlotId(1));
        assert_eq!(container.children(), &[SlotId(0), SlotId(1)]);

        container.remove_children();
        assert!(container.is_empty());
    }
}
