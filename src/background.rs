use egui::{ColorImage, Context, DroppedFile, TextureHandle, TextureOptions, Vec2};
use thiserror::Error;

/// Errors that can occur while loading a background image
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("not an image file: {0}")]
    Unsupported(String),

    #[error("dropped file has no accessible data: {0}")]
    NoData(String),
}

pub type BackgroundResult<T> = Result<T, BackgroundError>;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Decode encoded image bytes into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> BackgroundResult<ColorImage> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    log::debug!("Decoded background image: {}x{}", size[0], size[1]);
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Uploaded background texture shown underneath the strokes.
pub struct BackgroundImage {
    texture: TextureHandle,
    size: Vec2,
}

impl BackgroundImage {
    pub fn upload(ctx: &Context, name: &str, image: ColorImage) -> Self {
        let size = Vec2::new(image.size[0] as f32, image.size[1] as f32);
        let texture = ctx.load_texture(name, image, TextureOptions::LINEAR);
        Self { texture, size }
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Pixel size of the source image
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("texture", &self.texture.id())
            .field("size", &self.size)
            .finish()
    }
}

/// Picks up image files dropped onto the window.
#[derive(Default)]
pub struct FileDropHandler;

impl FileDropHandler {
    pub fn new() -> Self {
        Self
    }

    /// Decode this frame's dropped files, returning the last image that loaded.
    pub fn take_dropped_image(&mut self, ctx: &Context) -> Option<(String, ColorImage)> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut loaded = None;

        for file in &dropped {
            let name = file_name(file);
            match load_dropped_file(file) {
                Ok(image) => {
                    log::info!("Loaded background image {name}");
                    loaded = Some((name, image));
                }
                Err(err) => log::warn!("Skipping dropped file {name}: {err}"),
            }
        }

        if loaded.is_some() {
            ctx.request_repaint();
        }
        loaded
    }

    /// Overlay shown while files are dragged over the window
    pub fn preview_files_being_dropped(&self, ctx: &Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        let hovered = ctx.input(|i| i.raw.hovered_files.len());
        if hovered == 0 {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            "Drop image to use it as background",
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn file_name(file: &DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
pub fn is_image_file(file: &DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let extension = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| file.name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()));
    extension.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn load_dropped_file(file: &DroppedFile) -> BackgroundResult<ColorImage> {
    if !is_image_file(file) {
        return Err(BackgroundError::Unsupported(file_name(file)));
    }

    if let Some(bytes) = &file.bytes {
        return decode_image(bytes);
    }

    // No filesystem access on the web
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(path) = &file.path {
            let bytes = std::fs::read(path)?;
            return decode_image(&bytes);
        }
    }

    Err(BackgroundError::NoData(file_name(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png() {
        let image = decode_image(&png_bytes(3, 2)).unwrap();
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[0], egui::Color32::RED);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_image(b"not an image"), Err(BackgroundError::Decode(_))));
    }

    #[test]
    fn recognises_images_by_mime_or_extension() {
        let by_mime = DroppedFile { mime: "image/png".into(), ..Default::default() };
        let by_path = DroppedFile { path: Some(PathBuf::from("/tmp/Photo.JPG")), ..Default::default() };
        let by_name = DroppedFile { name: "cat.webp".into(), ..Default::default() };
        let text = DroppedFile { name: "notes.txt".into(), ..Default::default() };

        assert!(is_image_file(&by_mime));
        assert!(is_image_file(&by_path));
        assert!(is_image_file(&by_name));
        assert!(!is_image_file(&text));
    }

    #[test]
    fn loads_dropped_bytes() {
        let file = DroppedFile {
            name: "bg.png".into(),
            bytes: Some(Arc::from(png_bytes(4, 4))),
            ..Default::default()
        };
        assert_eq!(load_dropped_file(&file).unwrap().size, [4, 4]);
    }

    #[test]
    fn rejects_non_images_and_empty_drops() {
        let text = DroppedFile { name: "notes.txt".into(), ..Default::default() };
        assert!(matches!(load_dropped_file(&text), Err(BackgroundError::Unsupported(_))));

        let empty = DroppedFile { name: "bg.png".into(), ..Default::default() };
        assert!(matches!(load_dropped_file(&empty), Err(BackgroundError::NoData(_))));
    }
}
