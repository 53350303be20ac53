use std::sync::Arc;

use tracing::debug;

use crate::core::Series;
use crate::extensions::{OverlaySpec, derive_overlay_series};

/// Derived overlay series for one `(series, overlays)` snapshot pair.
#[derive(Debug, Default)]
pub(super) struct OverlayCache {
    key: Option<(Arc<[Series]>, Arc<[OverlaySpec]>)>,
    derived: Vec<Series>,
}

impl OverlayCache {
    /// Recomputes overlays only when either snapshot changed identity.
    pub(super) fn refresh(&mut self, series: &Arc<[Series]>, overlays: &Arc<[OverlaySpec]>) {
        let unchanged = self.key.as_ref().is_some_and(|(cached_series, cached_overlays)| {
            Arc::ptr_eq(cached_series, series) && Arc::ptr_eq(cached_overlays, overlays)
        });
        if unchanged {
            return;
        }

        self.derived = overlays
            .iter()
            .filter_map(|spec| {
                let Some(source) = series.iter().find(|candidate| *candidate.id() == spec.source)
                else {
                    debug!(overlay = %spec.id, source = %spec.source, "overlay source not found");
                    return None;
                };
                Some(Series::Line(derive_overlay_series(spec, source)))
            })
            .collect();
        self.key = Some((Arc::clone(series), Arc::clone(overlays)));
        debug!(overlays = self.derived.len(), "overlay cache refreshed");
    }

    pub(super) fn derived(&self) -> &[Series] {
        &self.derived
    }
}
