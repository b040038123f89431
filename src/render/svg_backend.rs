use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer that serializes frames into standalone SVG documents.
///
/// The most recent document is kept in memory and can be written to disk.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to(&self, path: &Path) -> PlotResult<()> {
        if self.document.is_empty() {
            return Err(PlotError::InvalidData(
                "no frame has been rendered yet".to_owned(),
            ));
        }
        fs::write(path, &self.document).map_err(|err| {
            PlotError::InvalidData(format!("failed to write `{}`: {err}", path.display()))
        })
    }

    fn write_document(frame: &RenderFrame, stats: &mut SvgRenderStats) -> String {
        let mut out = String::new();
        // `write!` into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="scatter-plot" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.viewport.width,
            h = frame.viewport.height,
        );

        for line in &frame.lines {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
                fmt_num(line.x1),
                fmt_num(line.y1),
                fmt_num(line.x2),
                fmt_num(line.y2),
                line.color.to_hex(),
                opacity_attr("stroke-opacity", line.color),
                fmt_num(line.stroke_width),
            );
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                fmt_num(circle.cx),
                fmt_num(circle.cy),
                fmt_num(circle.radius),
                circle.fill_color.to_hex(),
                opacity_attr("fill-opacity", circle.fill_color),
            );
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let transform = if text.rotation_deg == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    fmt_num(text.rotation_deg),
                    fmt_num(text.x),
                    fmt_num(text.y)
                )
            };
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}"{} text-anchor="{anchor}"{transform}>{}</text>"#,
                fmt_num(text.x),
                fmt_num(text.y),
                fmt_num(text.font_size_px),
                text.color.to_hex(),
                opacity_attr("fill-opacity", text.color),
                escape_text(&text.text),
            );
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        let mut stats = SvgRenderStats::default();
        self.document = Self::write_document(frame, &mut stats);
        self.last_stats = stats;
        Ok(())
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, fmt_num(color.alpha))
    }
}

/// Shortest decimal form with at most three fractional digits.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, escape_text, fmt_num};
    use crate::core::Viewport;
    use crate::render::{CirclePrimitive, Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

    #[test]
    fn renders_circles_and_rotated_text() {
        let frame = RenderFrame::new(Viewport::new(300, 150))
            .with_circle(CirclePrimitive::new(10.0, 20.5, 5.0, Color::BLACK))
            .with_text(
                TextPrimitive::new("temp", 5.0, 75.0, 12.0, Color::BLACK, TextHAlign::Center)
                    .with_rotation(-90.0),
            );

        let mut renderer = SvgRenderer::new();
        renderer.render(&frame).expect("render");

        let doc = renderer.document();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"class="scatter-plot""#));
        assert!(doc.contains(r##"<circle cx="10" cy="20.5" r="5" fill="#000000"/>"##));
        assert!(doc.contains(r#"transform="rotate(-90 5 75)""#));
        assert_eq!(renderer.last_stats().circles_drawn, 1);
    }

    #[test]
    fn invalid_frame_leaves_previous_document() {
        let mut renderer = SvgRenderer::new();
        let bad = RenderFrame::new(Viewport::new(10, 10)).with_circle(CirclePrimitive::new(
            f64::NAN,
            1.0,
            5.0,
            Color::BLACK,
        ));
        assert!(renderer.render(&bad).is_err());
        assert!(renderer.document().is_empty());
    }

    #[test]
    fn numbers_and_text_are_normalized() {
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(12.34567), "12.346");
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }
}
