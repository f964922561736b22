use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use super::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::{FontFace, LaidOutPage, RenderError};

/// Serializes laid-out pages with the built-in Helvetica faces.
///
/// Run offsets are measured from the top edge; PDF user space starts at the bottom.
pub fn write_pdf(title: &str, pages: &[LaidOutPage]) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", index + 1),
            )
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for run in &page.runs {
            let font: &IndirectFontRef = match run.face {
                FontFace::Regular => &regular,
                FontFace::Bold => &bold,
            };
            layer.use_text(
                run.text.as_str(),
                run.size_pt,
                Mm(run.x_mm),
                Mm(PAGE_HEIGHT_MM - run.y_mm),
                font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|err| RenderError::Pdf(err.to_string()))
}
