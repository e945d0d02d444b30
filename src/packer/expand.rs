//! Expansion of panel types into placement-ordered instances.

use crate::model::{PanelInstance, PanelType};
use std::sync::Arc;

/// One instance per unit of quantity, largest nominal area first.
///
/// The sort is stable, so equal areas keep input order and ascending
/// instance indices.
pub fn expand_panels(panels: &[PanelType]) -> Vec<PanelInstance> {
    let mut instances: Vec<PanelInstance> = panels
        .iter()
        .flat_map(|panel| {
            let shared = Arc::new(panel.clone());
            (0..panel.quantity).map(move |index| PanelInstance::new(Arc::clone(&shared), index))
        })
        .collect();

    instances.sort_by(|a, b| b.area().total_cmp(&a.area()));
    instances
}
