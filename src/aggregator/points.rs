//! Hit flags for the fixed set of measurement points.

use crate::utils::error::AggregateError;

/// Measurement points `1..=N` with a hit flag each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementPoints {
    hits: Vec<bool>,
}

impl MeasurementPoints {
    /// Create `count` points, none hit
    pub fn new(count: usize) -> Self {
        Self {
            hits: vec![false; count],
        }
    }

    /// Number of points (N)
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Mark point `id` as hit
    ///
    /// **Public** - called once per point token in the log
    ///
    /// # Errors
    /// * `AggregateError::OutOfRangeIndex` - `id` outside `1..=N`
    pub fn mark(&mut self, line: usize, id: i64) -> Result<(), AggregateError> {
        let count = self.hits.len();
        let slot = usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| self.hits.get_mut(index))
            .ok_or(AggregateError::OutOfRangeIndex {
                line,
                point: id,
                count,
            })?;

        *slot = true;
        Ok(())
    }

    /// Iterate `(id, hit)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.hits.iter().enumerate().map(|(i, hit)| (i + 1, *hit))
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|hit| **hit).count()
    }

    /// Ids of points that were hit
    pub fn hit_ids(&self) -> Vec<usize> {
        self.iter().filter(|(_, hit)| *hit).map(|(id, _)| id).collect()
    }

    /// Ids of points that were never hit
    pub fn missed_ids(&self) -> Vec<usize> {
        self.iter().filter(|(_, hit)| !*hit).map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_query() {
        let mut points = MeasurementPoints::new(3);
        points.mark(1, 2).unwrap();

        assert_eq!(points.hit_ids(), vec![2]);
        assert_eq!(points.missed_ids(), vec![1, 3]);
    }

    #[test]
    fn test_out_of_range_ids() {
        let mut points = MeasurementPoints::new(3);

        for id in [0, 4, -1] {
            match points.mark(9, id) {
                Err(AggregateError::OutOfRangeIndex { line, point, count }) => {
                    assert_eq!((line, point, count), (9, id, 3));
                }
                other => panic!("expected out of range for {}: {:?}", id, other),
            }
        }
        assert_eq!(points.hit_count(), 0);
    }

    #[test]
    fn test_zero_points_rejects_everything() {
        let mut points = MeasurementPoints::new(0);
        assert!(points.is_empty());
        assert!(points.mark(1, 1).is_err());
    }
}
