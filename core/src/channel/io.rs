// ## `io.rs`: encoded images and files

//! Encoded image carriers.
//!
//! Carriers are decoded to 8-bit RGBA, embedded in place, and always written
//! back as PNG. Lossy formats would destroy the LSB plane, so they are
//! refused as embed inputs.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::{
    audit::AuditAction,
    channel::core::MetaChannel,
    telemetry::Stage,
    types::MetaError,
};

/// Formats that cannot carry LSB data through a save.
fn is_lossy(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg | ImageFormat::WebP | ImageFormat::Avif)
}

fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_lowercase()
}

impl MetaChannel {
    /// Embed `payload` into an encoded carrier image and return PNG bytes.
    pub fn embed_image_bytes(&self, carrier: &[u8], payload: &[u8]) -> Result<Vec<u8>, MetaError> {
        let mut grid = self.decode_carrier(carrier, true)?;
        self.embed(&mut grid, payload)?;
        self.encode_png(grid)
    }

    /// Extract from an encoded image (any decodable format).
    pub fn extract_image_bytes(&self, image: &[u8]) -> Result<Vec<u8>, MetaError> {
        let grid = self.decode_carrier(image, false)?;
        self.extract(&grid)
    }

    /// Read `input`, embed, and write a PNG to `output`.
    pub fn embed_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        payload: &[u8],
    ) -> Result<(), MetaError> {
        let carrier = fs::read(input.as_ref())?;
        let png = self.embed_image_bytes(&carrier, payload)?;
        fs::write(output.as_ref(), &png)?;
        debug!(output = %output.as_ref().display(), bytes = png.len(), "wrote carrier image");
        Ok(())
    }

    pub fn extract_file(&self, input: impl AsRef<Path>) -> Result<Vec<u8>, MetaError> {
        let image = fs::read(input.as_ref())?;
        self.extract_image_bytes(&image)
    }

    fn decode_carrier(&self, bytes: &[u8], for_embed: bool) -> Result<RgbaImage, MetaError> {
        let action = if for_embed { AuditAction::Embed } else { AuditAction::Extract };

        let format = match image::guess_format(bytes) {
            Ok(format) => format,
            Err(e) => return Err(self.fail(action, e.into())),
        };
        if for_embed && is_lossy(format) {
            return Err(self.fail(action, MetaError::UnsupportedCarrier { format: format_name(format) }));
        }

        let decoded = self.timed(Stage::Decode, || {
            image::load_from_memory_with_format(bytes, format).map(DynamicImage::into_rgba8)
        });
        match decoded {
            Ok(grid) => {
                debug!(format = %format_name(format), width = grid.width(), height = grid.height(), "decoded carrier");
                Ok(grid)
            }
            Err(e) => Err(self.fail(action, e.into())),
        }
    }

    fn encode_png(&self, grid: RgbaImage) -> Result<Vec<u8>, MetaError> {
        let encoded = self.timed(Stage::Encode, || {
            let mut out = Cursor::new(Vec::new());
            grid.write_to(&mut out, ImageFormat::Png).map(|_| out.into_inner())
        });
        encoded.map_err(|e| self.fail(AuditAction::Embed, e.into()))
    }
}
