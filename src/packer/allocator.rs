//! Sheet allocation: the forward placement pass over all instances.

use super::best_fit::{find_best_fit, Fit};
use super::expand::expand_panels;
use super::free_space::FreeSpace;
use super::utilization::utilization_percent;
use crate::config::{usable_area, SheetConfig, UsableArea};
use crate::model::{PackingResult, PanelInstance, PanelType, Placement, Sheet, Unplaceable};
use tracing::{debug, trace};

/// A sheet that is still accepting panels.
#[derive(Debug)]
struct OpenSheet {
    id: usize,
    placements: Vec<Placement>,
    free: FreeSpace,
}

impl OpenSheet {
    /// Open a sheet with `instance` at its origin.
    ///
    /// The instance must fit the usable area in at least one orientation.
    fn open(id: usize, instance: &PanelInstance, usable: UsableArea, kerf: f64) -> Self {
        let rotated = !usable.admits(instance.width, instance.height);
        let (width, height) = instance.oriented(rotated);

        let mut free = FreeSpace::new(usable);
        free.occupy(0, width, height, kerf);

        debug!(
            "Opened sheet {} for {} ({}x{}{})",
            id,
            instance.panel.display_name(),
            width,
            height,
            if rotated { ", rotated" } else { "" }
        );

        Self {
            id,
            placements: vec![place(instance, 0.0, 0.0, rotated)],
            free,
        }
    }

    /// Place `instance` in its best-fitting free region, if any.
    fn try_place(&mut self, instance: &PanelInstance, kerf: f64) -> bool {
        let Some(candidate) =
            find_best_fit(instance.width, instance.height, self.free.regions(), kerf)
        else {
            return false;
        };

        // The panel is first in its region, so the fit carries no kerf.
        let Fit {
            rotated,
            effective_width: width,
            effective_height: height,
        } = candidate.fit;
        let region = self.free.occupy(candidate.region_index, width, height, kerf);

        trace!(
            "Sheet {}: {} at ({}, {}){}",
            self.id,
            instance.panel.display_name(),
            region.x,
            region.y,
            if rotated { " rotated" } else { "" }
        );

        self.placements
            .push(place(instance, region.x, region.y, rotated));
        true
    }

    fn finish(self, usable: UsableArea) -> Sheet {
        let utilization = utilization_percent(&self.placements, usable);
        Sheet {
            id: self.id,
            placements: self.placements,
            utilization,
        }
    }
}

fn place(instance: &PanelInstance, x: f64, y: f64, rotated: bool) -> Placement {
    Placement {
        panel: instance.panel.clone(),
        instance_index: instance.instance_index,
        x,
        y,
        rotated,
    }
}

/// Reason reported for a panel larger than the usable area in both
/// orientations.
fn oversize_reason(instance: &PanelInstance, usable: UsableArea, margin: f64) -> String {
    format!(
        "Panel {} ({}×{}mm) exceeds usable area ({}×{}mm). Minimum sheet size needed: {}×{}mm",
        instance.panel.label,
        instance.width,
        instance.height,
        usable.width,
        usable.height,
        instance.width + 2.0 * margin,
        instance.height + 2.0 * margin,
    )
}

/// Pack panels onto as few sheets as the guillotine best-area-fit
/// heuristic manages.
///
/// Instances are placed largest first, each on the first open sheet that
/// has room, opening a new sheet otherwise. Panels that exceed the usable
/// area in both orientations end up in [`PackingResult::unplaceable`].
/// The result depends only on the arguments.
pub fn pack_panels(panels: &[PanelType], config: &SheetConfig) -> PackingResult {
    let usable = usable_area(config);
    let mut open: Vec<OpenSheet> = Vec::new();
    let mut unplaceable = Vec::new();

    for instance in expand_panels(panels) {
        let fits_nominal = usable.admits(instance.width, instance.height);
        let fits_rotated = usable.admits(instance.height, instance.width);

        if usable.is_degenerate() || (!fits_nominal && !fits_rotated) {
            let reason = oversize_reason(&instance, usable, config.margin);
            debug!("Unplaceable: {}", reason);
            unplaceable.push(Unplaceable {
                panel: instance.panel,
                instance_index: instance.instance_index,
                reason,
            });
            continue;
        }

        let placed = open
            .iter_mut()
            .any(|sheet| sheet.try_place(&instance, config.kerf));

        if !placed {
            let id = open.len() + 1;
            open.push(OpenSheet::open(id, &instance, usable, config.kerf));
        }
    }

    PackingResult {
        sheets: open.into_iter().map(|s| s.finish(usable)).collect(),
        unplaceable,
        config: *config,
    }
}
