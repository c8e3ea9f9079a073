//! Development dashboard configuration: overall progress ring, per-system
//! progress bars and the zone allocation grid.

use crate::content::Icon;
use crate::i18n::Language;
use std::f64::consts::PI;

pub const METRIC_COUNT: usize = 7;

/// Overall phase 1 completion shown in the ring, in percent.
pub const OVERALL_PROGRESS: u8 = 45;

/// Radius of the progress ring in SVG user units.
pub const RING_RADIUS: f64 = 110.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Completion in percent (0-100)
    pub percent: u8,
    pub icon: Icon,
}

pub static METRICS: [Metric; METRIC_COUNT] = [
    Metric { percent: 70, icon: Icon::Layers },
    Metric { percent: 50, icon: Icon::Route },
    Metric { percent: 50, icon: Icon::Zap },
    Metric { percent: 40, icon: Icon::Flame },
    Metric { percent: 30, icon: Icon::Droplets },
    Metric { percent: 35, icon: Icon::Users },
    Metric { percent: 25, icon: Icon::BedDouble },
];

/// Metrics paired with their labels in `language`.
pub fn localized(language: Language) -> impl Iterator<Item = (&'static Metric, &'static str)> {
    METRICS
        .iter()
        .zip(language.strings().dashboard.metrics.iter().copied())
}

/// Circumference of the progress ring.
pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Stroke dash offset that reveals `percent` of the ring.
///
/// Values above 100 are clamped.
pub fn ring_dash_offset(percent: u8) -> f64 {
    let fraction = f64::from(percent.min(100)) / 100.0;
    ring_circumference() * (1.0 - fraction)
}

/// Plot grid of the park, with the plots already allocated to tenants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGrid {
    pub total: usize,
    pub columns: usize,
    /// Allocated plot indices, ascending
    pub allocated: &'static [usize],
}

/// A single plot of the zone grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCell {
    pub index: usize,
    pub allocated: bool,
}

impl ZoneGrid {
    pub fn is_allocated(&self, index: usize) -> bool {
        self.allocated.binary_search(&index).is_ok()
    }

    pub fn rows(&self) -> usize {
        self.total.div_ceil(self.columns)
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated.iter().filter(|&&i| i < self.total).count()
    }

    /// All plots in index order.
    pub fn cells(&self) -> impl Iterator<Item = ZoneCell> + '_ {
        (0..self.total).map(move |index| ZoneCell {
            index,
            allocated: self.is_allocated(index),
        })
    }
}

/// 6x7 plot grid with the tenant allocation as of the last update.
pub static ZONE_GRID: ZoneGrid = ZoneGrid {
    total: 42,
    columns: 6,
    allocated: &[0, 1, 6, 7, 24, 25, 26, 27, 30, 31, 32, 33, 36, 37, 38, 39],
};
