//! Calibration run configuration.

use crate::calibration::fit::FitConfig;
use crate::calibration::raw::{ContainerFormat, SensorLayout};

/// Configuration for one calibration run.
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    /// Sensor geometry of the raw input.
    pub layout: SensorLayout,
    /// How the raw payload is wrapped on disk.
    pub container: ContainerFormat,
    /// Lattice points per LUT axis.
    pub lut_size: (usize, usize, usize),
    /// Minimum-search and convergence parameters.
    pub fit: FitConfig,
    /// Whether to write the decoded and match-highlighted intermediates
    /// next to the final output.
    pub write_intermediates: bool,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            layout: SensorLayout::PI_CAMERA_V2,
            container: ContainerFormat::JpegTrailer,
            lut_size: (4, 3, 3),
            fit: FitConfig::default(),
            write_intermediates: true,
        }
    }
}

impl CalibrationConfig {
    pub fn builder() -> CalibrationConfigBuilder {
        CalibrationConfigBuilder::default()
    }
}

/// Builder for [`CalibrationConfig`].
#[derive(Default)]
pub struct CalibrationConfigBuilder {
    layout: Option<SensorLayout>,
    container: Option<ContainerFormat>,
    lut_size: Option<(usize, usize, usize)>,
    fit: Option<FitConfig>,
    write_intermediates: Option<bool>,
}

impl CalibrationConfigBuilder {
    pub fn layout(mut self, layout: SensorLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn container(mut self, container: ContainerFormat) -> Self {
        self.container = Some(container);
        self
    }

    pub fn lut_size(mut self, nx: usize, ny: usize, nz: usize) -> Self {
        self.lut_size = Some((nx, ny, nz));
        self
    }

    pub fn fit(mut self, fit: FitConfig) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn write_intermediates(mut self, enable: bool) -> Self {
        self.write_intermediates = Some(enable);
        self
    }

    pub fn build(self) -> CalibrationConfig {
        let default = CalibrationConfig::default();
        CalibrationConfig {
            layout: self.layout.unwrap_or(default.layout),
            container: self.container.unwrap_or(default.container),
            lut_size: self.lut_size.unwrap_or(default.lut_size),
            fit: self.fit.unwrap_or(default.fit),
            write_intermediates: self.write_intermediates.unwrap_or(default.write_intermediates),
        }
    }
}
