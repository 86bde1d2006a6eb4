use crate::glyph::Ellipse;
use anyhow::{bail, Context, Result};
use image::{io::Reader as ImageReader, DynamicImage, ImageBuffer, Rgba, RgbaImage};
use std::{
    fmt,
    fs::File,
    path::{Path, PathBuf},
};

/// Inset in pixels from every canvas edge to the glyph's bounding box.
pub const MARGIN: u32 = 4;

/// Interior colour of the glyph, steel blue.
pub const FILL: Rgba<u8> = Rgba([70, 130, 180, 255]);

/// One pixel stroke around the glyph, midnight blue.
pub const OUTLINE: Rgba<u8> = Rgba([25, 25, 112, 255]);

/// Sizes written on every run, in write order.
pub const ICON_SIZES: [IconSize; 2] = [IconSize::new(32, 32), IconSize::new(128, 128)];

/// Source of the 2x variant. It is always this literal name, whatever the size list holds.
pub const RETINA_SOURCE: &str = "128x128.png";
/// High-density copy of [`RETINA_SOURCE`].
pub const RETINA_TARGET: &str = "128x128@2x.png";

/// Line printed on stdout once every file is written.
pub const COMPLETION_MESSAGE: &str = "Created placeholder icons";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// File name of the icon, `{width}x{height}.png`.
    pub fn file_name(&self) -> String {
        format!("{}x{}.png", self.width, self.height)
    }

    fn glyph(&self) -> Result<Ellipse> {
        match Ellipse::inscribed(self.width, self.height, MARGIN) {
            Some(glyph) => Ok(glyph),
            None => bail!(
                "Icon size {self} is too small: width and height must exceed {}px",
                2 * MARGIN
            ),
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Write the reference icon set into `out_dir` and report completion on stdout.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    generate(out_dir, &ICON_SIZES)?;
    println!("{COMPLETION_MESSAGE}");
    Ok(())
}

/// Render and write one PNG per entry of `sizes`, in order, then the 2x copy.
///
/// Every size is checked before anything touches the disk. Existing files
/// are overwritten. Returns the written paths in the order they were written.
pub fn generate(out_dir: &Path, sizes: &[IconSize]) -> Result<Vec<PathBuf>> {
    for size in sizes {
        size.glyph()?;
    }

    let mut written = Vec::with_capacity(sizes.len() + 1);
    for &size in sizes {
        let _span = tracing::debug_span!("[icon]", %size).entered();

        let canvas = render_icon(size)?;
        let output_path = out_dir.join(size.file_name());
        save_png(&DynamicImage::ImageRgba8(canvas), &output_path)?;
        tracing::debug!("[icon:written] {}", output_path.display());
        written.push(output_path);
    }

    written.push(duplicate_2x(out_dir)?);
    Ok(written)
}

/// Allocate a fully transparent canvas of `size` and draw the glyph into it.
pub fn render_icon(size: IconSize) -> Result<RgbaImage> {
    let glyph = size.glyph()?;
    let mut canvas = ImageBuffer::from_pixel(size.width, size.height, Rgba([0, 0, 0, 0]));
    glyph.draw(&mut canvas, FILL, OUTLINE);
    Ok(canvas)
}

/// Re-save the pixels of `out_dir/128x128.png` as `out_dir/128x128@2x.png`.
///
/// Fails with a not-found I/O error when the source was never written.
pub fn duplicate_2x(out_dir: &Path) -> Result<PathBuf> {
    let source_path = out_dir.join(RETINA_SOURCE);
    let source = ImageReader::open(&source_path)
        .with_context(|| format!("Failed to open {}", source_path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", source_path.display()))?;

    let target_path = out_dir.join(RETINA_TARGET);
    save_png(&source, &target_path)?;
    tracing::debug!("[icon:duplicated] {}", target_path.display());
    Ok(target_path)
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_name_follows_dimensions() {
        assert_eq!(IconSize::new(32, 32).file_name(), "32x32.png");
        assert_eq!(IconSize::new(64, 48).file_name(), "64x48.png");
    }

    #[test]
    fn render_icon_matches_requested_dimensions() {
        let canvas = render_icon(IconSize::new(40, 24)).unwrap();
        assert_eq!(canvas.dimensions(), (40, 24));
        assert_eq!(*canvas.get_pixel(20, 12), FILL);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn render_icon_rejects_sizes_without_room_for_margin() {
        let err = render_icon(IconSize::new(8, 8)).unwrap_err();
        assert!(err.to_string().contains("8x8"));
        assert!(render_icon(IconSize::new(0, 32)).is_err());
    }

    #[test]
    fn generate_validates_before_writing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let sizes = [IconSize::new(128, 128), IconSize::new(6, 6)];

        assert!(generate(temp_dir.path(), &sizes).is_err());
        assert!(!temp_dir.path().join("128x128.png").exists());
    }

    #[test]
    fn generate_returns_paths_in_write_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let written = generate(temp_dir.path(), &ICON_SIZES).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["32x32.png", "128x128.png", "128x128@2x.png"]);
    }

    #[test]
    fn save_png_into_missing_directory_fails_with_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing").join("32x32.png");
        let canvas = render_icon(IconSize::new(32, 32)).unwrap();

        let err = save_png(&DynamicImage::ImageRgba8(canvas), &path).unwrap_err();

        assert!(err.to_string().contains("32x32.png"));
        let io_err = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<std::io::Error>())
            .expect("error chain should contain an io::Error");
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn duplicate_2x_without_source_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let err = duplicate_2x(temp_dir.path()).unwrap_err();

        let io_err = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<std::io::Error>())
            .expect("error chain should contain an io::Error");
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
        assert!(!temp_dir.path().join(RETINA_TARGET).exists());
    }
}
