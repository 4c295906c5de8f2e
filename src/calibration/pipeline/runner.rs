use std::path::Path;

use tracing::{info, instrument};

use crate::calibration::chart;
use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::fit::{FitReport, LutFitter};
use crate::calibration::image::{Image, ImageWriter, PngWriter};
use crate::calibration::lut::{ColorMap, Lut3d};
use crate::calibration::pipeline::config::CalibrationConfig;
use crate::calibration::raw::{PackedRawDecoder, RawDecoder};

/// Everything a calibration run produces.
pub struct CalibrationOutput {
    /// The demosaiced sensor image, uncorrected.
    pub decoded: Image,
    /// The decoded image mapped through the fitted LUT.
    pub corrected: Image,
    /// The corrected image with patch-match markers drawn in.
    pub highlighted: Image,
    /// The fitted LUT itself.
    pub lut: Lut3d,
    pub report: FitReport,
}

pub struct CalibrationPipeline<D: RawDecoder, W: ImageWriter> {
    decoder: D,
    writer: W,
    config: CalibrationConfig,
}

impl CalibrationPipeline<PackedRawDecoder, PngWriter> {
    pub fn new(config: CalibrationConfig) -> Self {
        let decoder = PackedRawDecoder::new(config.layout, config.container);
        Self {
            decoder,
            writer: PngWriter,
            config,
        }
    }
}

impl<D: RawDecoder, W: ImageWriter> CalibrationPipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, config: CalibrationConfig) -> Self {
        Self {
            decoder,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Decode the raw input, fit a LUT against the chart, and produce the
    /// corrected and highlighted images.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn calibrate(&self, input_data: &[u8]) -> Result<CalibrationOutput> {
        info!("Starting chart calibration");

        let decoded = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.decoder.decode(input_data)?
        };

        let (nx, ny, nz) = self.config.lut_size;
        let mut lut = Lut3d::identity(nx, ny, nz)?;

        let report = {
            let _span = tracing::info_span!(
                "fit_lut",
                width = decoded.width(),
                height = decoded.height()
            )
            .entered();
            LutFitter::new(self.config.fit).fit(&mut lut, &decoded)?
        };

        let corrected = {
            let _span = tracing::info_span!("map_image").entered();
            lut.map_image(&decoded)
        };

        let highlighted = {
            let _span = tracing::info_span!("highlight_matches").entered();
            let matches = chart::closest_matches(&corrected);
            let mut highlighted = corrected.clone();
            chart::highlight_matches(&mut highlighted, &matches);
            highlighted
        };

        info!(
            sweeps = report.sweeps,
            score = report.score,
            "Calibration complete"
        );

        Ok(CalibrationOutput {
            decoded,
            corrected,
            highlighted,
            lut,
            report,
        })
    }

    /// Run [`CalibrationPipeline::calibrate`] on a file, writing the
    /// corrected image to `output_path`. With intermediates enabled, the
    /// decoded and highlighted images land next to it as
    /// `<stem>.decoded.png` and `<stem>.matches.png`.
    #[instrument(skip(self, input_path, output_path))]
    pub fn calibrate_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<CalibrationOutput> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Calibrating file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                CalibrationError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let output = self.calibrate(&input_data)?;

        if self.config.write_intermediates {
            self.write_file(&output.decoded, &sibling_path(output_path, "decoded"))?;
            self.write_file(&output.highlighted, &sibling_path(output_path, "matches"))?;
        }
        self.write_file(&output.corrected, output_path)?;

        Ok(output)
    }

    fn write_file(&self, image: &Image, path: &Path) -> Result<()> {
        let _span = tracing::info_span!("write_output_file", path = %path.display()).entered();
        let mut file = std::fs::File::create(path).map_err(|e| {
            CalibrationError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.writer.write_image(image, &mut file)
    }
}

/// `photo.png` + `decoded` -> `photo.decoded.png`
fn sibling_path(path: &Path, tag: &str) -> std::path::PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let mut name = format!("{stem}.{tag}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}
