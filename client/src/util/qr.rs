//! QR codes for campaign share links.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Rendered edge length in pixels, quiet zone included.
pub const QR_SIZE: u32 = 300;

/// Encode `link` as a standalone SVG document at high error correction.
///
/// # Errors
///
/// Returns the encoder error when `link` does not fit in a QR symbol.
pub fn link_svg(link: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(link.as_bytes(), EcLevel::H)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
