//! Free-region bookkeeping and the guillotine split.

use crate::config::UsableArea;
use serde::Serialize;

/// Unused rectangle of a sheet, in usable-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreeRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FreeRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check whether a `width x height` rectangle fits at the region origin.
    #[inline]
    pub fn admits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }

    /// Split the region after a `width x height` panel is placed at its origin.
    ///
    /// Returns the right remainder (full region height) and the bottom
    /// remainder (only as wide as the panel, so the two never overlap).
    /// A remainder with no positive extent is dropped.
    pub fn split(&self, width: f64, height: f64, kerf: f64) -> [Option<FreeRegion>; 2] {
        let used_width = width + kerf;
        let used_height = height + kerf;

        let right_width = self.width - used_width;
        let right = (right_width > 0.0).then(|| {
            FreeRegion::new(self.x + used_width, self.y, right_width, self.height)
        });

        let bottom_height = self.height - used_height;
        let bottom = (bottom_height > 0.0)
            .then(|| FreeRegion::new(self.x, self.y + used_height, width, bottom_height));

        [right, bottom]
    }
}

/// Free regions of a single sheet, in insertion order.
///
/// Regions are pairwise disjoint and never overlap a placed panel.
#[derive(Debug, Clone, Default)]
pub struct FreeSpace {
    regions: Vec<FreeRegion>,
}

impl FreeSpace {
    /// Start with one region spanning the whole usable area.
    pub fn new(usable: UsableArea) -> Self {
        Self {
            regions: vec![FreeRegion::new(0.0, 0.0, usable.width, usable.height)],
        }
    }

    pub fn regions(&self) -> &[FreeRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Consume the region at `index` for a `width x height` panel placed at
    /// its origin and append the split remainders (right first, then bottom).
    ///
    /// Returns the consumed region.
    pub fn occupy(&mut self, index: usize, width: f64, height: f64, kerf: f64) -> FreeRegion {
        let region = self.regions.remove(index);
        self.regions
            .extend(region.split(width, height, kerf).into_iter().flatten());
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_both_remainders() {
        let region = FreeRegion::new(0.0, 0.0, 690.0, 490.0);
        let [right, bottom] = region.split(200.0, 200.0, 1.0);
        assert_eq!(right, Some(FreeRegion::new(201.0, 0.0, 489.0, 490.0)));
        assert_eq!(bottom, Some(FreeRegion::new(0.0, 201.0, 200.0, 289.0)));
    }

    #[test]
    fn test_split_offset_region() {
        let region = FreeRegion::new(201.0, 0.0, 489.0, 490.0);
        let [right, bottom] = region.split(400.0, 300.0, 1.0);
        assert_eq!(right, Some(FreeRegion::new(602.0, 0.0, 88.0, 490.0)));
        assert_eq!(bottom, Some(FreeRegion::new(201.0, 301.0, 400.0, 189.0)));
    }

    #[test]
    fn test_split_exact_fit_drops_everything() {
        let region = FreeRegion::new(0.0, 250.0, 250.0, 250.0);
        assert_eq!(region.split(250.0, 250.0, 0.0), [None, None]);
    }

    #[test]
    fn test_split_kerf_consumes_remainder() {
        // 1mm left on the right is eaten by the kerf entirely.
        let region = FreeRegion::new(0.0, 0.0, 101.0, 300.0);
        let [right, bottom] = region.split(100.0, 100.0, 1.0);
        assert_eq!(right, None);
        assert_eq!(bottom, Some(FreeRegion::new(0.0, 101.0, 100.0, 199.0)));
    }

    #[test]
    fn test_split_children_do_not_overlap() {
        let region = FreeRegion::new(0.0, 0.0, 500.0, 400.0);
        let [right, bottom] = region.split(120.0, 80.0, 3.0);
        let (right, bottom) = (right.unwrap(), bottom.unwrap());
        assert!(bottom.x + bottom.width <= right.x);
        assert!(bottom.x + bottom.width <= region.x + region.width);
    }

    #[test]
    fn test_free_space_occupy_preserves_order() {
        let mut space = FreeSpace::new(UsableArea {
            width: 690.0,
            height: 490.0,
        });
        assert_eq!(space.len(), 1);

        space.occupy(0, 200.0, 200.0, 1.0);
        assert_eq!(
            space.regions(),
            &[
                FreeRegion::new(201.0, 0.0, 489.0, 490.0),
                FreeRegion::new(0.0, 201.0, 200.0, 289.0),
            ]
        );

        let consumed = space.occupy(0, 200.0, 200.0, 1.0);
        assert_eq!(consumed, FreeRegion::new(201.0, 0.0, 489.0, 490.0));
        assert_eq!(
            space.regions(),
            &[
                FreeRegion::new(0.0, 201.0, 200.0, 289.0),
                FreeRegion::new(402.0, 0.0, 288.0, 490.0),
                FreeRegion::new(201.0, 201.0, 200.0, 289.0),
            ]
        );
    }

    #[test]
    fn test_free_space_can_run_empty() {
        let mut space = FreeSpace::new(UsableArea {
            width: 100.0,
            height: 100.0,
        });
        space.occupy(0, 100.0, 100.0, 0.0);
        assert!(space.is_empty());
    }
}
