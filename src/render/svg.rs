use super::{Canvas, Font, FontWeight};
use std::fmt::Write;

/// Document HTML contenant une image SVG par page.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pages: Vec<String>,
    current: String,
    height: f32,
    font: Font,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            height: 0.0,
            font: Font::regular(12.0),
        }
    }

    pub fn into_html(self) -> String {
        let mut out = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Calendar</title>\n\
             <style>svg { display: block; page-break-after: always; }</style>\n</head>\n<body>\n",
        );
        for page in &self.pages {
            out.push_str(page);
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    // SVG a l'origine en haut à gauche
    fn flip(&self, y: f32) -> f32 {
        self.height - y
    }
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgDocument {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.height = height;
        self.current.clear();
        let _ = writeln!(
            self.current,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}pt\" height=\"{height}pt\" viewBox=\"0 0 {width} {height}\">"
        );
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        let weight = match self.font.weight {
            FontWeight::Regular => "normal",
            FontWeight::Bold => "bold",
        };
        let _ = writeln!(
            self.current,
            "<text x=\"{x:.2}\" y=\"{:.2}\" font-family=\"Helvetica, Arial, sans-serif\" font-size=\"{}\" font-weight=\"{weight}\">{}</text>",
            self.flip(y),
            self.font.size,
            escape(text)
        );
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let _ = writeln!(
            self.current,
            "<rect x=\"{x:.2}\" y=\"{:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"none\" stroke=\"black\"/>",
            self.flip(y + height)
        );
    }

    fn finish_page(&mut self) {
        self.current.push_str("</svg>\n");
        self.pages.push(std::mem::take(&mut self.current));
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
