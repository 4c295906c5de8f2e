use pichart::calibration::{CalibrationConfig, CalibrationPipeline};
use pichart::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting pichart...");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "capture.jpg".to_string());
    let output = args.next().unwrap_or_else(|| "calibrated.png".to_string());

    let config = CalibrationConfig::builder().build();
    let pipeline = CalibrationPipeline::new(config);

    info!("Calibration pipeline initialized");
    info!("LUT lattice: {:?}", pipeline.config().lut_size);
    info!("Sensor: {:?}", pipeline.config().layout);

    match pipeline.calibrate_file(&input, &output) {
        Ok(result) => info!(
            sweeps = result.report.sweeps,
            score = result.report.score,
            "Calibration successful!"
        ),
        Err(e) => error!("Calibration failed: {}", e),
    }

    Ok(())
}
