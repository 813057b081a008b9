use tracing::{debug, info};

use crate::error::{CannyRefError, Result};
use crate::grid::RgbGrid;
use crate::stages::blur::gaussian_blur;
use crate::stages::grayscale::rgb_to_gray;
use crate::stages::nms::non_max_suppression;
use crate::stages::sobel::sobel;
use crate::stages::threshold::{double_threshold, hysteresis};

use super::config::CannyConfig;
use super::types::{PipelineOutput, PipelineStage};

/// Run the full reference pipeline over one RGB grid.
///
/// Preconditions (threshold ordering, minimum grid size, input shape)
/// are checked here once; the stages assume well-formed inputs. Stages
/// run strictly in order, each consuming the fully materialized output
/// of its predecessor.
pub fn run_pipeline(input: &RgbGrid, config: &CannyConfig) -> Result<PipelineOutput> {
    config.validate()?;
    if input.width() != config.width || input.height() != config.height {
        return Err(CannyRefError::ShapeMismatch {
            expected_width: config.width,
            expected_height: config.height,
            width: input.width(),
            height: input.height(),
        });
    }

    info!(
        width = config.width,
        height = config.height,
        high = config.thresholds.high,
        low = config.thresholds.low,
        "Running Canny reference pipeline"
    );

    let gray = rgb_to_gray(input);
    debug!(stage = %PipelineStage::Grayscale, "Stage complete");

    let blurred = gaussian_blur(&gray)?;
    debug!(stage = %PipelineStage::GaussianBlur, "Stage complete");

    let (magnitude, direction) = sobel(&blurred)?;
    debug!(stage = %PipelineStage::Sobel, "Stage complete");

    let suppressed = non_max_suppression(&magnitude, &direction)?;
    debug!(stage = %PipelineStage::NonMaxSuppression, "Stage complete");

    let (strong, weak) =
        double_threshold(&suppressed, config.thresholds.low, config.thresholds.high)?;
    debug!(stage = %PipelineStage::DoubleThreshold, "Stage complete");

    let edges = hysteresis(&strong, &weak)?;
    debug!(stage = %PipelineStage::Hysteresis, "Stage complete");

    let output = PipelineOutput {
        gray,
        blurred,
        magnitude,
        direction,
        suppressed,
        strong,
        weak,
        edges,
    };

    let stats = output.edge_stats();
    info!(
        strong = stats.strong_pixels,
        weak = stats.weak_pixels,
        edges = stats.edge_pixels,
        "Pipeline complete"
    );

    Ok(output)
}
