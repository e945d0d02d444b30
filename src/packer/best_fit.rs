//! Best-area-fit region selection.

use super::free_space::FreeRegion;

/// Orientation in which a panel fits a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub rotated: bool,
    /// Width tested against the region, kerf included when owed.
    pub effective_width: f64,
    /// Height tested against the region, kerf included when owed.
    pub effective_height: f64,
}

/// The region chosen for a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitCandidate {
    /// Index into the sheet's free-region list.
    pub region_index: usize,
    pub fit: Fit,
}

/// Test a panel against a single region, nominal orientation first.
///
/// A panel that is the first one placed into a region borders the region
/// edges, which are either the usable-area boundary or an existing kerf
/// gap, so no further kerf is added to its size.
pub fn try_fit(
    width: f64,
    height: f64,
    region: &FreeRegion,
    kerf: f64,
    first_in_region: bool,
) -> Option<Fit> {
    let extra = if first_in_region { 0.0 } else { kerf };

    let (effective_width, effective_height) = (width + extra, height + extra);
    if region.admits(effective_width, effective_height) {
        return Some(Fit {
            rotated: false,
            effective_width,
            effective_height,
        });
    }

    let (effective_width, effective_height) = (height + extra, width + extra);
    if region.admits(effective_width, effective_height) {
        return Some(Fit {
            rotated: true,
            effective_width,
            effective_height,
        });
    }

    None
}

/// Find the smallest region the panel fits into.
///
/// Placing a panel consumes its region, so every listed region is still
/// empty and the panel is always the first one in it. Ties go to the
/// earliest region in list order.
pub fn find_best_fit(
    width: f64,
    height: f64,
    regions: &[FreeRegion],
    kerf: f64,
) -> Option<FitCandidate> {
    let mut best: Option<(f64, FitCandidate)> = None;

    for (region_index, region) in regions.iter().enumerate() {
        let Some(fit) = try_fit(width, height, region, kerf, true) else {
            continue;
        };

        let area = region.area();
        if best.as_ref().map_or(true, |(best_area, _)| area < *best_area) {
            best = Some((area, FitCandidate { region_index, fit }));
        }
    }

    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_fit_prefers_nominal() {
        let region = FreeRegion::new(0.0, 0.0, 300.0, 300.0);
        let fit = try_fit(200.0, 100.0, &region, 1.0, true).unwrap();
        assert!(!fit.rotated);
        assert_eq!(fit.effective_width, 200.0);
        assert_eq!(fit.effective_height, 100.0);
    }

    #[test]
    fn test_try_fit_rotates_when_needed() {
        let region = FreeRegion::new(0.0, 0.0, 100.0, 300.0);
        let fit = try_fit(200.0, 100.0, &region, 1.0, true).unwrap();
        assert!(fit.rotated);
        assert_eq!(fit.effective_width, 100.0);
        assert_eq!(fit.effective_height, 200.0);
    }

    #[test]
    fn test_try_fit_adds_kerf_when_not_first() {
        let region = FreeRegion::new(0.0, 0.0, 200.0, 200.0);
        assert!(try_fit(200.0, 200.0, &region, 1.0, true).is_some());
        assert!(try_fit(200.0, 200.0, &region, 1.0, false).is_none());

        let fit = try_fit(150.0, 100.0, &region, 2.0, false).unwrap();
        assert_eq!(fit.effective_width, 152.0);
        assert_eq!(fit.effective_height, 102.0);
    }

    #[test]
    fn test_try_fit_none() {
        let region = FreeRegion::new(0.0, 0.0, 50.0, 50.0);
        assert!(try_fit(60.0, 10.0, &region, 0.0, true).is_none());
    }

    #[test]
    fn test_best_fit_smallest_area() {
        let regions = [
            FreeRegion::new(201.0, 0.0, 489.0, 490.0),
            FreeRegion::new(0.0, 201.0, 200.0, 289.0),
        ];
        let candidate = find_best_fit(200.0, 200.0, &regions, 1.0).unwrap();
        assert_eq!(candidate.region_index, 1);
        assert!(!candidate.fit.rotated);
    }

    #[test]
    fn test_best_fit_skips_regions_too_small() {
        let regions = [
            FreeRegion::new(0.0, 0.0, 50.0, 50.0),
            FreeRegion::new(0.0, 100.0, 400.0, 400.0),
            FreeRegion::new(0.0, 0.0, 100.0, 250.0),
        ];
        let candidate = find_best_fit(200.0, 100.0, &regions, 1.0).unwrap();
        assert_eq!(candidate.region_index, 2);
        assert!(candidate.fit.rotated);
    }

    #[test]
    fn test_best_fit_tie_goes_to_first() {
        let regions = [
            FreeRegion::new(0.0, 0.0, 100.0, 100.0),
            FreeRegion::new(200.0, 0.0, 100.0, 100.0),
        ];
        let candidate = find_best_fit(50.0, 50.0, &regions, 1.0).unwrap();
        assert_eq!(candidate.region_index, 0);
    }

    #[test]
    fn test_best_fit_empty() {
        assert!(find_best_fit(10.0, 10.0, &[], 1.0).is_none());
    }
}
