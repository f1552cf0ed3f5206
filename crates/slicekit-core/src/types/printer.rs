//! Printer settings consumed by the toolpath encoder.

use crate::constants::SECONDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Printer and material settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Nozzle diameter (mm).
    pub nozzle_diameter: f64,
    /// Layer height (mm); also the slicing step.
    pub layer_height: f64,
    /// Print speed (mm/s).
    pub print_speed: f64,
    /// Filament diameter (mm).
    pub filament_diameter: f64,
    /// Bed temperature (°C).
    pub bed_temperature: f64,
    /// Nozzle temperature (°C).
    pub nozzle_temperature: f64,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            nozzle_diameter: 0.4,
            layer_height: 0.2,
            print_speed: 60.0,
            filament_diameter: 1.75,
            bed_temperature: 60.0,
            nozzle_temperature: 220.0,
        }
    }
}

impl PrinterSettings {
    /// Feed rate in mm/min, as carried by the `F` word.
    pub fn feed_rate(&self) -> f64 {
        self.print_speed * SECONDS_PER_MINUTE
    }

    /// Cross-section area of the raw filament (mm²).
    pub fn filament_area(&self) -> f64 {
        let r = self.filament_diameter / 2.0;
        PI * r * r
    }

    /// Filament length consumed per millimeter of printed path.
    ///
    /// Models the deposited bead as a `nozzle_diameter × layer_height`
    /// rectangle. Returns 0 when the filament cross-section is degenerate.
    pub fn extrusion_per_mm(&self) -> f64 {
        let area = self.filament_area();
        if !area.is_finite() || area <= 0.0 {
            return 0.0;
        }
        let ratio = self.nozzle_diameter * self.layer_height / area;
        if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            0.0
        }
    }
}
