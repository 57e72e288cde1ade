use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Built fresh each frame from app state, then handed to the renderers.
/// `push()` is O(1); paint-order iteration reuses an internal index buffer.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn radii(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(c) => Some(c.radius),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(1), Vec2::zero(), 1.0, Color::WHITE);
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 2.0, Color::WHITE);
        list.push_solid_circle(ZIndex(1), Vec2::zero(), 3.0, Color::WHITE);
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 4.0, Color::WHITE);

        assert_eq!(radii(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 1.0, Color::WHITE);
        list.clear();
        assert!(list.is_empty());
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 5.0, Color::WHITE);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(radii(&mut list), vec![5.0]);
    }
}
