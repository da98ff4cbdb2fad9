//! PDF export of filled sheets, one US Letter page per sheet

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::combine::product::Label;
use crate::io::configuration::{DOCUMENT_TITLE, MM_PER_POINT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::io::error::{LabelError, Result, WithPath};
use crate::layout::geometry::LabelBox;
use crate::sheet::placement::Sheet;
use crate::sheet::profile::SheetGeometry;

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_POINT)
}

fn pdf_error(path: &Path, reason: &impl ToString) -> LabelError {
    LabelError::PdfExport {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Write one sheet as a PDF page with every placed label's text
///
/// Blank lines are skipped. Text is set in built-in Helvetica, centered in its
/// label box.
///
/// # Errors
///
/// Returns an error if:
/// - A placement refers to a label index outside `labels`
/// - The parent directory cannot be created
/// - The file cannot be created or the document cannot be written
pub fn export_sheet_as_pdf(
    sheet: &Sheet,
    labels: &[Label],
    geometry: &SheetGeometry,
    font_size: f32,
    output_path: &Path,
) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "Labels",
    );
    let current_layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| pdf_error(output_path, &e))?;

    for (row, col, label_index) in sheet.placements() {
        let label = labels.get(label_index).ok_or_else(|| {
            pdf_error(
                output_path,
                &format!(
                    "label {label_index} placed on sheet {} but only {} labels exist",
                    sheet.index(),
                    labels.len()
                ),
            )
        })?;
        if label.is_blank() {
            continue;
        }
        let label_box = LabelBox::for_cell(geometry, row, col);
        draw_label(&current_layer, &font, label, &label_box, font_size);
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = File::create(output_path).with_path(output_path, "create file")?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| pdf_error(output_path, &e))?;

    Ok(())
}

fn draw_label(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    label: &Label,
    label_box: &LabelBox,
    font_size: f32,
) {
    for (line, text) in label.lines().iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        let (x, y) = label_box.line_origin(line, text, font_size);
        layer.use_text(text.as_str(), font_size, mm(x), mm(y), font);
    }
}
