//! HTML preview of a receipt.

use lugo_shared::validators::sanitize_html;

use crate::error::DomainError;
use crate::receipt::{LayoutElement, ReceiptLayout, ReceiptRenderer};

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:720px;margin:0 auto;padding:30px}\
.header{text-align:center;border-bottom:1px solid #E5E7EB;padding-bottom:10px;margin-bottom:20px}\
.title{font-size:18px;font-weight:bold;text-transform:uppercase}\
.subtitle{font-size:12px;color:#6B7280}\
.row{display:flex;font-size:10px;margin-bottom:5px}\
.label{color:#6B7280;width:80px}.value{font-weight:bold;flex:1}\
.amount{display:flex;justify-content:space-between;font-size:10px;margin-bottom:5px}\
.amount .label{width:auto}\
.total{display:flex;justify-content:space-between;font-size:12px;font-weight:bold;border-top:1px solid #E5E7EB;padding-top:10px}\
.total .value{color:#2563EB;flex:none}\
.payment{font-size:10px;color:#6B7280;text-align:center;margin-top:20px}\
.observations{font-size:10px;color:#374151;margin-top:10px}\
hr{border:none;border-bottom:1px solid #E5E7EB;margin:10px 0}\
.footer{font-size:8px;color:#9CA3AF;text-align:center;border-top:1px dashed #E5E7EB;padding-top:10px;margin-top:40px}";

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReceiptRenderer;

impl HtmlReceiptRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_string(&self, layout: &ReceiptLayout) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">");
        html.push_str("<title>Comprovante de Pagamento</title><style>");
        html.push_str(STYLE);
        html.push_str("</style></head><body>");

        let mut header_open = false;
        for element in &layout.elements {
            match element {
                LayoutElement::Title(text) => {
                    html.push_str("<div class=\"header\">");
                    header_open = true;
                    html.push_str(&format!("<div class=\"title\">{}</div>", sanitize_html(text)));
                }
                LayoutElement::Subtitle(text) => {
                    html.push_str(&format!("<div class=\"subtitle\">{}</div>", sanitize_html(text)));
                }
                LayoutElement::Divider if header_open => {
                    html.push_str("</div>");
                    header_open = false;
                }
                LayoutElement::Divider => html.push_str("<hr>"),
                LayoutElement::Field { label, value } => {
                    html.push_str(&format!(
                        "<div class=\"row\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>",
                        sanitize_html(label),
                        sanitize_html(value)
                    ));
                }
                LayoutElement::Amount { label, value } => {
                    html.push_str(&format!(
                        "<div class=\"amount\"><span class=\"label\">{}</span><span>{}</span></div>",
                        sanitize_html(label),
                        sanitize_html(value)
                    ));
                }
                LayoutElement::Total { label, value } => {
                    html.push_str(&format!(
                        "<div class=\"total\"><span>{}</span><span class=\"value\">{}</span></div>",
                        sanitize_html(label),
                        sanitize_html(value)
                    ));
                }
                LayoutElement::PaymentDate(text) => {
                    html.push_str(&format!("<div class=\"payment\">{}</div>", sanitize_html(text)));
                }
                LayoutElement::Observations { heading, text } => {
                    html.push_str(&format!(
                        "<div class=\"observations\"><strong>{}</strong><p>{}</p></div>",
                        sanitize_html(heading),
                        sanitize_html(text)
                    ));
                }
                LayoutElement::Footer(text) => {
                    html.push_str(&format!("<div class=\"footer\">{}</div>", sanitize_html(text)));
                }
            }
        }
        if header_open {
            html.push_str("</div>");
        }

        html.push_str("</body></html>");
        html
    }
}

impl ReceiptRenderer for HtmlReceiptRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, DomainError> {
        Ok(self.render_string(layout).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::layout::tests::sample_data;
    use chrono::NaiveDate;

    fn render(data: &crate::receipt::ReceiptData) -> String {
        let at = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let layout = ReceiptLayout::build(data, at).unwrap();
        HtmlReceiptRenderer::new().render_string(&layout)
    }

    #[test]
    fn test_html_contains_layout_text() {
        let html = render(&sample_data());
        assert!(html.contains("COMPROVANTE DE PAGAMENTO"));
        assert!(html.contains("Referente a Março&#x2F;2024"));
        assert!(html.contains("Condomínio"));
        assert!(!html.contains("IPTU"));
        assert!(html.contains("class=\"total\""));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut data = sample_data();
        data.observations = Some("<script>alert(1)</script>".to_string());
        let html = render(&data);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
