//! Sheet fill percentage.

use crate::config::UsableArea;
use crate::model::Placement;

/// Share of the usable area covered by placement footprints, rounded to
/// the nearest whole percent. A non-positive usable area yields 0.
pub fn utilization_percent(placements: &[Placement], usable: UsableArea) -> u32 {
    if usable.is_degenerate() {
        return 0;
    }

    let filled: f64 = placements.iter().map(Placement::area).sum();
    let percent = (filled / usable.area() * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PanelType;
    use std::sync::Arc;

    fn placement(w: f64, h: f64, rotated: bool) -> Placement {
        Placement {
            panel: Arc::new(PanelType::new("Box", "Panel", w, h, 1)),
            instance_index: 0,
            x: 0.0,
            y: 0.0,
            rotated,
        }
    }

    #[test]
    fn test_full_sheet() {
        let usable = UsableArea {
            width: 500.0,
            height: 500.0,
        };
        let placements: Vec<_> = (0..4).map(|_| placement(250.0, 250.0, false)).collect();
        assert_eq!(utilization_percent(&placements, usable), 100);
    }

    #[test]
    fn test_rounding() {
        let usable = UsableArea {
            width: 690.0,
            height: 490.0,
        };
        // 40000 / 338100 = 11.83%
        assert_eq!(utilization_percent(&[placement(200.0, 200.0, false)], usable), 12);
        // 120000 / 338100 = 35.49%
        assert_eq!(utilization_percent(&[placement(400.0, 300.0, true)], usable), 35);
    }

    #[test]
    fn test_empty_and_degenerate() {
        let usable = UsableArea {
            width: 690.0,
            height: 490.0,
        };
        assert_eq!(utilization_percent(&[], usable), 0);

        let zero = UsableArea {
            width: 0.0,
            height: 490.0,
        };
        assert_eq!(utilization_percent(&[placement(10.0, 10.0, false)], zero), 0);

        let negative = UsableArea {
            width: -10.0,
            height: -10.0,
        };
        assert_eq!(utilization_percent(&[placement(10.0, 10.0, false)], negative), 0);
    }
}
