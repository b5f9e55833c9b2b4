//! Card export: output formats, PDF page layout and the PDF writer.
//!
//! The browser side rasterizes the hero card and hands over a JPEG; everything
//! after that (page geometry, document structure) lives here so it can be
//! tested without a browser.

use lopdf::{Document, Object, Stream, dictionary};

use crate::config::ExportConfig;
use crate::error::{ExpotenError, Result};

const PT_PER_MM: f64 = 72.0 / 25.4;
const IMAGE_NAME: &str = "Im0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Jpg,
    Pdf,
}

impl ExportFormat {
    pub fn filename(self, config: &ExportConfig) -> &str {
        match self {
            ExportFormat::Jpg => &config.jpg_filename,
            ExportFormat::Pdf => &config.pdf_filename,
        }
    }

    /// JPEG quality used when encoding the rasterized card.
    pub fn jpeg_quality(self, config: &ExportConfig) -> f64 {
        match self {
            ExportFormat::Jpg => config.jpg_quality,
            ExportFormat::Pdf => config.pdf_quality,
        }
    }

    /// Canvas fill before drawing. The JPG keeps the card as rendered,
    /// the PDF page is white.
    pub fn background(self) -> Option<&'static str> {
        match self {
            ExportFormat::Jpg => None,
            ExportFormat::Pdf => Some("#ffffff"),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Jpg => "image/jpeg",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Placement of the card image on the PDF page, in millimetres from the
/// top-left corner of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PdfLayout {
    /// Fit a `px_width` x `px_height` bitmap on the page.
    ///
    /// The image spans the page width minus margins. If that makes it taller
    /// than the printable height, it is shrunk to that height and centered
    /// horizontally; the aspect ratio never changes.
    pub fn fit(px_width: u32, px_height: u32, config: &ExportConfig) -> Result<Self> {
        if px_width == 0 || px_height == 0 {
            return Err(ExpotenError::EmptyRaster {
                width: px_width,
                height: px_height,
            });
        }
        let margin = config.margin_mm;
        let max_width = config.page_width_mm - 2.0 * margin;
        let max_height = config.page_height_mm - 2.0 * margin;
        let aspect = f64::from(px_height) / f64::from(px_width);

        let mut width = max_width;
        let mut height = width * aspect;
        if height > max_height {
            height = max_height;
            width = height / aspect;
        }

        Ok(Self {
            page_width: config.page_width_mm,
            page_height: config.page_height_mm,
            x: (config.page_width_mm - width) / 2.0,
            y: margin,
            width,
            height,
        })
    }

    /// Image placement as a PDF `cm` matrix operand list (points, bottom-left origin).
    fn image_matrix(&self) -> [f64; 6] {
        let bottom = self.page_height - self.y - self.height;
        [
            self.width * PT_PER_MM,
            0.0,
            0.0,
            self.height * PT_PER_MM,
            self.x * PT_PER_MM,
            bottom * PT_PER_MM,
        ]
    }
}

/// Build a one-page PDF with the JPEG card placed per [`PdfLayout::fit`].
pub fn write_pdf(
    jpeg: &[u8],
    px_width: u32,
    px_height: u32,
    title: &str,
    config: &ExportConfig,
) -> Result<Vec<u8>> {
    let layout = PdfLayout::fit(px_width, px_height, config)?;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(px_width),
            "Height" => i64::from(px_height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg.to_vec(),
    )
    .with_compression(false);
    let image_id = doc.add_object(image);

    let [a, b, c, d, e, f] = layout.image_matrix();
    let operations = format!("q {a:.4} {b} {c} {d:.4} {e:.4} {f:.4} cm /{IMAGE_NAME} Do Q");
    let content_id = doc.add_object(Stream::new(dictionary! {}, operations.into_bytes()));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_NAME => image_id,
        },
    });

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        ((layout.page_width * PT_PER_MM).round() as i64).into(),
        ((layout.page_height * PT_PER_MM).round() as i64).into(),
    ];
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal(concat!("expoten ", env!("CARGO_PKG_VERSION"))),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::with_capacity(jpeg.len() + 2048);
    doc.save_to(&mut out)?;
    tracing::debug!(
        bytes = out.len(),
        width_mm = layout.width,
        height_mm = layout.height,
        "PDF card written"
    );
    Ok(out)
}
