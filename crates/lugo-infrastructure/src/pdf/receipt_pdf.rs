// ============================================================================
// Lugo Infrastructure - PDF Receipt Renderer
// File: crates/lugo-infrastructure/src/pdf/receipt_pdf.rs
// Description: Single-page A4 receipt drawn with the standard Helvetica fonts
// ============================================================================
//! Positions are expressed in millimetres from the top-left corner of the
//! page and converted to PDF user space (points, bottom-left origin) when
//! the content stream is emitted.

use encoding_rs::WINDOWS_1252;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use lugo_core::error::DomainError;
use lugo_core::receipt::{LayoutElement, ReceiptLayout, ReceiptRenderer};
use lugo_shared::constants::RECEIPT_CONTENT_TYPE;

use super::metrics::{text_width, wrap};

const PAGE_WIDTH_PT: f32 = 595.28;
const PAGE_HEIGHT_PT: f32 = 841.89;
const PT_PER_MM: f32 = 72.0 / 25.4;

const MARGIN_LEFT: f32 = 20.0;
const MARGIN_RIGHT: f32 = 190.0;
const CENTER_X: f32 = 105.0;
const VALUE_X: f32 = 50.0;
const VALUE_WIDTH: f32 = 140.0;
const OBSERVATIONS_WIDTH: f32 = 170.0;
const LINE_STEP: f32 = 7.0;

const TITLE_Y: f32 = 20.0;
const SUBTITLE_Y: f32 = 28.0;
const HEADER_RULE_Y: f32 = 32.0;
const FIELDS_Y: f32 = 45.0;
const FOOTER_RULE_Y: f32 = 270.0;
const FOOTER_Y: f32 = 275.0;

type Rgb = (u8, u8, u8);
const BLACK: Rgb = (0, 0, 0);
const GRAY: Rgb = (100, 100, 100);
const RULE: Rgb = (200, 200, 200);
const BLUE: Rgb = (37, 99, 235);
const SLATE: Rgb = (55, 65, 81);
const LIGHT: Rgb = (156, 163, 175);

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, PartialEq)]
enum Block {
    Header,
    Fields,
    Amounts,
    Other,
}

/// Content stream under construction.
struct Canvas {
    ops: Vec<Operation>,
}

fn to_pt_x(mm: f32) -> f32 {
    mm * PT_PER_MM
}

fn to_pt_y(mm: f32) -> f32 {
    PAGE_HEIGHT_PT - mm * PT_PER_MM
}

fn rgb_operands(color: Rgb) -> Vec<Object> {
    [color.0, color.1, color.2]
        .iter()
        .map(|c| Object::from(*c as f32 / 255.0))
        .collect()
}

fn win_ansi(text: &str) -> Vec<u8> {
    let (bytes, _, _) = WINDOWS_1252.encode(text);
    bytes.into_owned()
}

impl Canvas {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn line(&mut self, y: f32) {
        self.ops.push(Operation::new("RG", rgb_operands(RULE)));
        self.ops.push(Operation::new("w", vec![Object::from(0.57_f32)]));
        self.ops.push(Operation::new(
            "m",
            vec![to_pt_x(MARGIN_LEFT).into(), to_pt_y(y).into()],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![to_pt_x(MARGIN_RIGHT).into(), to_pt_y(y).into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, bold: bool, color: Rgb, align: Align) {
        let width_mm = text_width(text, bold, size) / PT_PER_MM;
        let x = match align {
            Align::Left => x,
            Align::Center => x - width_mm / 2.0,
            Align::Right => x - width_mm,
        };
        let font = if bold { "F2" } else { "F1" };

        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops.push(Operation::new("rg", rgb_operands(color)));
        self.ops.push(Operation::new("Td", vec![to_pt_x(x).into(), to_pt_y(y).into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }
}

/// Renders a [`ReceiptLayout`] to PDF bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReceiptRenderer;

impl PdfReceiptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw(&self, layout: &ReceiptLayout) -> Canvas {
        let mut canvas = Canvas::new();
        let mut y = TITLE_Y;
        let mut block = Block::Header;

        for element in &layout.elements {
            match element {
                LayoutElement::Title(text) => {
                    canvas.text(text, CENTER_X, TITLE_Y, 18.0, true, BLACK, Align::Center);
                    y = SUBTITLE_Y;
                    block = Block::Header;
                }
                LayoutElement::Subtitle(text) => {
                    canvas.text(text, CENTER_X, y, 12.0, false, GRAY, Align::Center);
                    y = HEADER_RULE_Y;
                }
                LayoutElement::Divider => {
                    let (rule_y, next_y) = match block {
                        Block::Header => (HEADER_RULE_Y, FIELDS_Y),
                        Block::Fields => (y + 5.0, y + 15.0),
                        Block::Amounts => (y + 3.0, y + 10.0),
                        Block::Other => (y, y + LINE_STEP),
                    };
                    canvas.line(rule_y);
                    y = next_y;
                    block = Block::Other;
                }
                LayoutElement::Field { label, value } => {
                    canvas.text(label, MARGIN_LEFT, y, 10.0, false, GRAY, Align::Left);
                    let bold = label.starts_with("Inquilino");
                    let lines = wrap(value, bold, 10.0, VALUE_WIDTH * PT_PER_MM);
                    for line in &lines {
                        canvas.text(line, VALUE_X, y, 10.0, bold, BLACK, Align::Left);
                        y += LINE_STEP;
                    }
                    block = Block::Fields;
                }
                LayoutElement::Amount { label, value } => {
                    canvas.text(label, MARGIN_LEFT, y, 10.0, false, GRAY, Align::Left);
                    canvas.text(value, MARGIN_RIGHT, y, 10.0, false, BLACK, Align::Right);
                    y += LINE_STEP;
                    block = Block::Amounts;
                }
                LayoutElement::Total { label, value } => {
                    canvas.text(label, MARGIN_LEFT, y, 12.0, true, BLACK, Align::Left);
                    canvas.text(value, MARGIN_RIGHT, y, 12.0, true, BLUE, Align::Right);
                    y += 15.0;
                    block = Block::Other;
                }
                LayoutElement::PaymentDate(text) => {
                    canvas.text(text, CENTER_X, y, 10.0, false, GRAY, Align::Center);
                }
                LayoutElement::Observations { heading, text } => {
                    y += 10.0;
                    canvas.text(heading, MARGIN_LEFT, y, 10.0, true, BLACK, Align::Left);
                    y += 5.0;
                    let leading = 10.0 * 1.15 / PT_PER_MM;
                    for line in wrap(text, false, 10.0, OBSERVATIONS_WIDTH * PT_PER_MM) {
                        canvas.text(&line, MARGIN_LEFT, y, 10.0, false, SLATE, Align::Left);
                        y += leading;
                    }
                }
                LayoutElement::Footer(text) => {
                    canvas.line(FOOTER_RULE_Y);
                    canvas.text(text, CENTER_X, FOOTER_Y, 8.0, false, LIGHT, Align::Center);
                }
            }
        }
        canvas
    }

    fn assemble(&self, canvas: Canvas) -> Result<Vec<u8>, lopdf::Error> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular,
                "F2" => bold,
            },
        });

        let content = Content { operations: canvas.ops };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1_i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::from(0.0_f32),
                Object::from(0.0_f32),
                Object::from(PAGE_WIDTH_PT),
                Object::from(PAGE_HEIGHT_PT),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

impl ReceiptRenderer for PdfReceiptRenderer {
    fn content_type(&self) -> &'static str {
        RECEIPT_CONTENT_TYPE
    }

    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, DomainError> {
        let canvas = self.draw(layout);
        let bytes = self
            .assemble(canvas)
            .map_err(|e| DomainError::RenderError(format!("PDF assembly failed: {}", e)))?;
        debug!("Rendered receipt PDF ({} bytes)", bytes.len());
        Ok(bytes)
    }
}
