//! Obstacles and the bounding-box collision index.
//!
//! Obstacles are compared by [`ObstacleId`], never by geometry: two pieces of garbage with the
//! same bounds at the same spot are still two obstacles.

use std::fmt;

use crate::sprite::Sprite;

/// Stable identity of an obstacle, assigned by [`ObstacleIndex::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis-aligned rectangle tracked for collisions. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub height: usize,
    pub width: usize,
}

impl Obstacle {
    pub fn id(&self) -> ObstacleId {
        self.id
    }

    /// Point containment, closed on the top/left edges and open on the bottom/right ones.
    pub fn contains(&self, row: f64, column: f64) -> bool {
        is_point_inside(
            (self.row, self.column),
            (self.height as f64, self.width as f64),
            (row, column),
        )
    }

    /// Whether a `size` rectangle with its top-left corner at `corner` overlaps this obstacle.
    ///
    /// Either rectangle having a corner inside the other counts as a hit.
    pub fn has_collision(&self, corner: (f64, f64), size: (usize, usize)) -> bool {
        let own_corner = (self.row, self.column);
        let own_size = (self.height as f64, self.width as f64);
        let size = (size.0 as f64, size.1 as f64);
        let own_opposite = (own_corner.0 + own_size.0 - 1.0, own_corner.1 + own_size.1 - 1.0);
        let opposite = (corner.0 + size.0 - 1.0, corner.1 + size.1 - 1.0);

        is_point_inside(own_corner, own_size, corner)
            || is_point_inside(own_corner, own_size, opposite)
            || is_point_inside(corner, size, own_corner)
            || is_point_inside(corner, size, own_opposite)
    }

    /// Outline one cell outside the obstacle, for the debug overlay.
    pub fn bounding_box_frame(&self) -> Sprite {
        let rows = self.height + 1;
        let columns = self.width + 1;
        let edge = format!(" {} ", "-".repeat(columns));
        let side = format!("|{}|", " ".repeat(columns));

        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(edge.clone());
        lines.extend(std::iter::repeat(side).take(rows));
        lines.push(edge);
        Sprite::new(lines.join("\n"))
    }

    /// Where [`Obstacle::bounding_box_frame`] has to be drawn.
    pub fn bounding_box_corner(&self) -> (f64, f64) {
        (self.row - 1.0, self.column - 1.0)
    }
}

fn is_point_inside(corner: (f64, f64), size: (f64, f64), point: (f64, f64)) -> bool {
    let rows_inside = corner.0 <= point.0 && point.0 < corner.0 + size.0;
    let columns_inside = corner.1 <= point.1 && point.1 < corner.1 + size.1;
    rows_inside && columns_inside
}

/// Insertion-ordered set of live obstacles.
#[derive(Debug, Clone, Default)]
pub struct ObstacleIndex {
    items: Vec<Obstacle>,
    next_id: u64,
}

impl ObstacleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new obstacle and return its identity.
    pub fn add(&mut self, row: f64, column: f64, height: usize, width: usize) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.items.push(Obstacle {
            id,
            row,
            column,
            height,
            width,
        });
        id
    }

    /// Remove by identity. Removing twice is a no-op.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let pos = self.items.iter().position(|o| o.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.items.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.items.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    /// First obstacle, in insertion order, containing the point.
    pub fn check_collision(&self, row: f64, column: f64) -> Option<&Obstacle> {
        self.items.iter().find(|o| o.contains(row, column))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_closed_top_left_open_bottom_right() {
        let mut index = ObstacleIndex::new();
        let id = index.add(2.0, 5.0, 3, 4);
        let o = *index.get(id).unwrap();

        assert!(o.contains(2.0, 5.0));
        assert!(o.contains(4.0, 8.0));
        assert!(o.contains(4.9, 8.9));
        assert!(!o.contains(5.0, 5.0));
        assert!(!o.contains(2.0, 9.0));
        assert!(!o.contains(1.9, 5.0));
    }

    #[test]
    fn ids_are_unique_even_for_identical_geometry() {
        let mut index = ObstacleIndex::new();
        let a = index.add(0.0, 0.0, 1, 1);
        let b = index.add(0.0, 0.0, 1, 1);
        assert_ne!(a, b);
        assert_eq!(index.len(), 2);

        index.remove(a);
        assert_eq!(index.check_collision(0.0, 0.0).map(|o| o.id()), Some(b));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut index = ObstacleIndex::new();
        let id = index.add(0.0, 0.0, 2, 2);
        assert!(index.remove(id).is_some());
        assert!(index.remove(id).is_none());
        assert!(index.is_empty());
        assert!(index.check_collision(0.0, 0.0).is_none());
    }

    #[test]
    fn check_collision_returns_first_in_insertion_order() {
        let mut index = ObstacleIndex::new();
        let first = index.add(0.0, 0.0, 5, 5);
        let _second = index.add(1.0, 1.0, 5, 5);
        assert_eq!(index.check_collision(2.0, 2.0).unwrap().id(), first);
    }

    #[test]
    fn get_mut_moves_the_rectangle() {
        let mut index = ObstacleIndex::new();
        let id = index.add(0.0, 0.0, 1, 1);
        index.get_mut(id).unwrap().row += 0.5;
        index.get_mut(id).unwrap().row += 0.5;
        assert!(index.check_collision(0.0, 0.0).is_none());
        assert!(index.check_collision(1.0, 0.0).is_some());
    }

    #[test]
    fn has_collision_detects_overlap_from_either_side() {
        let mut index = ObstacleIndex::new();
        let id = index.add(5.0, 5.0, 3, 3);
        let o = index.get(id).unwrap();

        // Single point inside.
        assert!(o.has_collision((6.0, 6.0), (1, 1)));
        // Big rectangle swallowing the obstacle.
        assert!(o.has_collision((0.0, 0.0), (20, 20)));
        // Touching bottom-right from outside.
        assert!(!o.has_collision((8.0, 8.0), (2, 2)));
        // Overlapping the top-left corner.
        assert!(o.has_collision((4.0, 4.0), (2, 2)));
    }

    #[test]
    fn bounding_box_frame_surrounds_the_obstacle() {
        let mut index = ObstacleIndex::new();
        let id = index.add(3.0, 4.0, 2, 3);
        let o = index.get(id).unwrap();

        let frame = o.bounding_box_frame();
        assert_eq!(frame.text(), " ---- \n|    |\n|    |\n|    |\n ---- ");
        assert_eq!(o.bounding_box_corner(), (2.0, 3.0));
    }
}
