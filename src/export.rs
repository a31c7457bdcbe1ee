use crate::canvas::PixelCanvas;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_SUBDIR: &str = "saved_paintings";

pub fn exe_relative_output_folder_from_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(EXPORT_SUBDIR))
}

pub fn ensure_output_folder() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    let output = exe_relative_output_folder_from_path(&exe_path)?;
    fs::create_dir_all(&output)
        .with_context(|| format!("create export folder {}", output.display()))?;
    Ok(output)
}

pub fn timestamped_filename(now: chrono::DateTime<Local>) -> String {
    format!("{}.png", now.format("%Y%m%d_%H%M%S"))
}

/// Encode the canvas pixel buffer as a PNG file at `path`.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let painting = image::RgbaImage::from_raw(
        canvas.width(),
        canvas.height(),
        canvas.pixels().to_vec(),
    )
    .ok_or_else(|| anyhow!("canvas buffer does not match its dimensions"))?;
    painting
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write painting to {}", path.display()))
}

/// Export the canvas to a timestamped PNG next to the executable and return
/// the path written.
pub fn export_canvas(canvas: &PixelCanvas) -> Result<PathBuf> {
    let output = ensure_output_folder()?;
    let path = output.join(timestamped_filename(Local::now()));
    write_png(canvas, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{
        exe_relative_output_folder_from_path, timestamped_filename, write_png, EXPORT_SUBDIR,
    };
    use crate::canvas::PixelCanvas;
    use crate::color::Color;
    use chrono::{Local, TimeZone};
    use std::path::Path;

    #[test]
    fn output_folder_is_a_sibling_of_the_executable() {
        let exe = Path::new("/opt/artboard/bin/artboard");
        let output = exe_relative_output_folder_from_path(exe).expect("output path");
        assert_eq!(output, Path::new("/opt/artboard/bin").join(EXPORT_SUBDIR));
    }

    #[test]
    fn filename_encodes_the_local_timestamp() {
        let dt = Local
            .with_ymd_and_hms(2026, 8, 6, 14, 30, 5)
            .single()
            .expect("date time");
        assert_eq!(timestamped_filename(dt), "20260806_143005.png");
    }

    #[test]
    fn exported_png_round_trips_canvas_pixels() {
        let mut canvas = PixelCanvas::new(20, 12, Color::WHITE);
        canvas.fill_circle((10, 6), 3, Color::rgb(0xff, 0x00, 0x40));

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("painting.png");
        write_png(&canvas, &path).expect("write png");

        let reloaded = image::open(&path).expect("reopen png").into_rgba8();
        assert_eq!(reloaded.dimensions(), (20, 12));
        assert_eq!(reloaded.get_pixel(10, 6).0, [0xff, 0x00, 0x40, 0xff]);
        assert_eq!(reloaded.get_pixel(0, 0).0, [0xff, 0xff, 0xff, 0xff]);
    }
}
