//! Insertion-ordered pane storage.

use toolbox_common::{ToolId, ViewId};

use crate::pane::Pane;

/// Ordered mapping tool id → pane. Iteration order is admission order.
///
/// The registry itself does not enforce capacity; the selection controller
/// checks limits before inserting.
#[derive(Debug)]
pub struct PaneRegistry<V> {
    panes: Vec<Pane<V>>,
    next_view_id: u32,
}

impl<V> PaneRegistry<V> {
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            next_view_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn contains(&self, id: &ToolId) -> bool {
        self.panes.iter().any(|p| p.id() == id)
    }

    pub fn get(&self, id: &ToolId) -> Option<&Pane<V>> {
        self.panes.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: &ToolId) -> Option<&mut Pane<V>> {
        self.panes.iter_mut().find(|p| p.id() == id)
    }

    pub fn by_view(&self, view_id: ViewId) -> Option<&Pane<V>> {
        self.panes.iter().find(|p| p.view_id == view_id)
    }

    pub fn by_view_mut(&mut self, view_id: ViewId) -> Option<&mut Pane<V>> {
        self.panes.iter_mut().find(|p| p.view_id == view_id)
    }

    /// Reserve the id for the next view. Ids are never reused.
    pub fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        id
    }

    /// Append a pane. A pane already registered under the same tool id is
    /// replaced and returned.
    pub fn insert(&mut self, pane: Pane<V>) -> Option<Pane<V>> {
        let previous = self.remove(pane.id());
        self.panes.push(pane);
        previous
    }

    pub fn remove(&mut self, id: &ToolId) -> Option<Pane<V>> {
        let index = self.panes.iter().position(|p| p.id() == id)?;
        Some(self.panes.remove(index))
    }

    /// Most recently admitted pane.
    pub fn last(&self) -> Option<&Pane<V>> {
        self.panes.last()
    }

    /// Tool ids in admission order.
    pub fn ids(&self) -> Vec<ToolId> {
        self.panes.iter().map(|p| p.id().clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pane<V>> {
        self.panes.iter()
    }
}

impl<V> Default for PaneRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_common::ToolDescriptor;

    fn pane(registry: &mut PaneRegistry<()>, id: &str) -> Pane<()> {
        let view_id = registry.allocate_view_id();
        Pane::new(ToolDescriptor::new(id, format!("{id}/index.html")), view_id, ())
    }

    #[test]
    fn keeps_insertion_order() {
        let mut reg = PaneRegistry::new();
        for id in ["timer", "email", "events"] {
            let p = pane(&mut reg, id);
            reg.insert(p);
        }
        let ids: Vec<String> = reg.ids().iter().map(|t| t.to_string()).collect();
        assert_eq!(ids, vec!["timer", "email", "events"]);
        assert_eq!(reg.last().unwrap().id().as_str(), "events");
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut reg = PaneRegistry::new();
        for id in ["a", "b", "c"] {
            let p = pane(&mut reg, id);
            reg.insert(p);
        }
        assert!(reg.remove(&ToolId::new("b")).is_some());
        assert!(reg.remove(&ToolId::new("b")).is_none());
        let ids: Vec<String> = reg.ids().iter().map(|t| t.to_string()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn insert_same_id_replaces() {
        let mut reg = PaneRegistry::new();
        let first = pane(&mut reg, "timer");
        let second = pane(&mut reg, "timer");
        assert!(reg.insert(first).is_none());
        let replaced = reg.insert(second).unwrap();
        assert_eq!(replaced.view_id, ViewId(1));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(&ToolId::new("timer")).unwrap().view_id, ViewId(2));
    }

    #[test]
    fn view_ids_are_not_reused() {
        let mut reg = PaneRegistry::new();
        let p = pane(&mut reg, "timer");
        reg.insert(p);
        reg.remove(&ToolId::new("timer"));
        assert_eq!(reg.allocate_view_id(), ViewId(2));
    }

    #[test]
    fn lookup_by_view() {
        let mut reg = PaneRegistry::new();
        let p = pane(&mut reg, "email");
        let view_id = p.view_id;
        reg.insert(p);
        assert_eq!(reg.by_view(view_id).unwrap().id().as_str(), "email");
        assert_eq!(reg.by_view_mut(view_id).unwrap().id().as_str(), "email");
        assert!(reg.by_view_mut(ViewId(99)).is_none());
    }
}
