// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Insertion-ordered dataset of unique points
//!
//! The trainer consumes points in dataset order, so insertion order is part of
//! the contract: it decides the order of hidden neuron creation.

use ahash::AHashMap;
use tracing::debug;

use crate::{Point, PointKey, StructuresError, StructuresResult};

/// Dataset of labeled points, unique by [`PointKey`]
#[derive(Debug, Clone, Default)]
pub struct InputData {
    points: Vec<Point>,
    /// key -> position in `points`
    index: AHashMap<PointKey, usize>,
}

impl InputData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from an ordered point list, rejecting duplicates
    pub fn from_points<I>(points: I) -> StructuresResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut data = Self::new();
        for point in points {
            data.add_point(point)?;
        }
        Ok(data)
    }

    /// Append a point
    ///
    /// # Errors
    ///
    /// `StructuresError::AlreadyExists` if a point with the same key is present.
    /// The stored point is left untouched in that case.
    pub fn add_point(&mut self, point: Point) -> StructuresResult<()> {
        let key = point.key();
        if self.index.contains_key(&key) {
            debug!("[DATASET] Point already exists: {}", key);
            return Err(StructuresError::AlreadyExists(key.to_string()));
        }
        self.index.insert(key, self.points.len());
        self.points.push(point);
        Ok(())
    }

    /// Remove the point stored under `point`'s key, returning it
    pub fn remove_point(&mut self, point: &Point) -> StructuresResult<Point> {
        let key = point.key();
        let Some(position) = self.index.remove(&key) else {
            debug!("[DATASET] Remove point: point does not exist: {}", key);
            return Err(StructuresError::NotFound(key.to_string()));
        };
        let removed = self.points.remove(position);
        // Shift positions of everything stored after the removed point
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.index.contains_key(&point.key())
    }

    pub fn get(&self, key: &PointKey) -> Option<&Point> {
        self.index.get(key).map(|&i| &self.points[i])
    }

    /// Points in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.index.clear();
    }

    /// Distinct class names in first-seen order
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for point in &self.points {
            if !names.contains(&point.class_name()) {
                names.push(point.class_name());
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a InputData {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let data = InputData::from_points(vec![
            Point::new(3.0, 3.0, "b"),
            Point::new(1.0, 1.0, "a"),
            Point::new(2.0, 2.0, "b"),
        ])
        .unwrap();
        let xs: Vec<f64> = data.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
        assert_eq!(data.class_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut data = InputData::new();
        data.add_point(Point::new(1.0, 2.0, "a")).unwrap();

        let result = data.add_point(Point::new(1.0, 2.0, "b"));
        assert!(matches!(result, Err(StructuresError::AlreadyExists(ref k)) if k == "1,2"));
        assert_eq!(data.len(), 1);
        assert_eq!(data.points()[0].class_name(), "a");
    }

    #[test]
    fn test_remove_point_reindexes() {
        let mut data = InputData::from_points(vec![
            Point::new(0.0, 0.0, "a"),
            Point::new(1.0, 0.0, "a"),
            Point::new(2.0, 0.0, "b"),
        ])
        .unwrap();

        let removed = data.remove_point(&Point::new(0.0, 0.0, "ignored")).unwrap();
        assert_eq!(removed.class_name(), "a");
        assert_eq!(data.len(), 2);

        let last = data.get(&PointKey::from_coordinates(2.0, 0.0)).unwrap();
        assert_eq!(last.class_name(), "b");
        assert!(!data.contains_point(&Point::new(0.0, 0.0, "a")));
    }

    #[test]
    fn test_remove_missing_point() {
        let mut data = InputData::new();
        let result = data.remove_point(&Point::new(5.0, 5.0, "a"));
        assert!(matches!(result, Err(StructuresError::NotFound(_))));
    }
}
