//! Minimal single-page PDF writer.
//!
//! Assembles the handful of PDF objects the card export needs: catalog,
//! page tree, one A4 page, image XObjects, a content stream placing
//! them, and the cross-reference table. Images embed as uncompressed
//! DeviceRGB streams. Coordinates on the public API are millimetres
//! from the page's top-left corner, matching the document-encoding
//! service the original editor delegated to.

use crate::bitmap::Bitmap;

/// A4 page size in millimetres (portrait).
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Page size in millimetres for this orientation.
    fn page_size_mm(&self) -> (f64, f64) {
        match self {
            Orientation::Portrait => (A4_WIDTH_MM, A4_HEIGHT_MM),
            Orientation::Landscape => (A4_HEIGHT_MM, A4_WIDTH_MM),
        }
    }
}

/// An image placed on the page (top-left anchored, millimetres).
#[derive(Debug, Clone)]
struct PlacedImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    x_mm: f64,
    y_mm: f64,
    w_mm: f64,
    h_mm: f64,
}

/// A single-page A4 document under construction.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    orientation: Orientation,
    images: Vec<PlacedImage>,
}

impl PdfDocument {
    /// Create an empty document with the given page orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            images: Vec::new(),
        }
    }

    /// Page size in PDF points.
    pub fn page_size_pt(&self) -> (f64, f64) {
        let (w_mm, h_mm) = self.orientation.page_size_mm();
        (mm_to_pt(w_mm), mm_to_pt(h_mm))
    }

    /// Place a bitmap on the page. `x_mm`/`y_mm` are the top-left
    /// corner in millimetres from the page's top-left; `w_mm`/`h_mm`
    /// the rendered size.
    pub fn add_image(&mut self, bitmap: &Bitmap, x_mm: f64, y_mm: f64, w_mm: f64, h_mm: f64) {
        self.images.push(PlacedImage {
            width: bitmap.width(),
            height: bitmap.height(),
            rgb: bitmap.to_rgb(),
            x_mm,
            y_mm,
            w_mm,
            h_mm,
        });
    }

    /// Serialize the complete PDF file.
    pub fn save(&self) -> Vec<u8> {
        let (page_w, page_h) = self.page_size_pt();
        let image_count = self.images.len();
        // Object numbering: 1 catalog, 2 page tree, 3 page,
        // 4..4+n image XObjects, 4+n content stream.
        let content_obj = 4 + image_count;
        let total_objects = content_obj;

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.7\n");
        // Binary marker comment so transports treat the file as binary.
        out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut offsets: Vec<usize> = Vec::with_capacity(total_objects);

        offsets.push(out.len());
        out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        offsets.push(out.len());
        out.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

        offsets.push(out.len());
        let mut xobjects = String::new();
        for i in 0..image_count {
            xobjects.push_str(&format!("/Im{} {} 0 R ", i, 4 + i));
        }
        out.extend_from_slice(
            format!(
                "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
                 /Resources << /XObject << {xobjects}>> >> /Contents {content_obj} 0 R >>\nendobj\n"
            )
            .as_bytes(),
        );

        for (i, image) in self.images.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                     /ColorSpace /DeviceRGB /BitsPerComponent 8 /Length {} >>\nstream\n",
                    4 + i,
                    image.width,
                    image.height,
                    image.rgb.len()
                )
                .as_bytes(),
            );
            out.extend_from_slice(&image.rgb);
            out.extend_from_slice(b"\nendstream\nendobj\n");
        }

        offsets.push(out.len());
        let mut content = String::new();
        for (i, image) in self.images.iter().enumerate() {
            let w = mm_to_pt(image.w_mm);
            let h = mm_to_pt(image.h_mm);
            let x = mm_to_pt(image.x_mm);
            // PDF origin is bottom-left; placement is given top-left.
            let y = page_h - mm_to_pt(image.y_mm) - h;
            content.push_str(&format!("q {w:.2} 0 0 {h:.2} {x:.2} {y:.2} cm /Im{i} Do Q\n"));
        }
        out.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
                content_obj,
                content.len(),
                content
            )
            .as_bytes(),
        );

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", total_objects + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                total_objects + 1
            )
            .as_bytes(),
        );

        out
    }
}
