//! PNG export for rendered canvases.

use log::{info, warn};

use spherecast::canvas::Canvas;

/// Save the canvas as an 8-bit RGBA PNG.
///
/// Logs a warning on I/O failure instead of panicking; a failed save leaves
/// the process free to exit normally.
pub fn save_canvas_as_png(canvas: &Canvas, output_path: &str) {
    match canvas.image().save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
