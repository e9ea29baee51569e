use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// What a single line of rendered report content turns into.
enum Line<'a> {
    Blank,
    Heading(u8, &'a str),
    Bullet(&'a str),
    PageBreak,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed == "---" || trimmed == "***" {
        return Line::PageBreak;
    }
    if let Some(text) = trimmed.strip_prefix("### ") {
        return Line::Heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return Line::Heading(2, text);
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return Line::Heading(1, text);
    }
    if let Some(text) = trimmed.strip_prefix("- ") {
        return Line::Bullet(text);
    }
    Line::Text(trimmed)
}

/// Package rendered report content as a DOCX file.
///
/// The content uses a small markdown subset: `#`/`##`/`###` headings,
/// `- ` bullets, `**bold**` spans, and `---` page breaks. Anything else
/// becomes a plain paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for line in rendered.lines() {
        let paragraph = match classify(line) {
            Line::Blank => Paragraph::new(),
            Line::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Line::Heading(level, text) => {
                let style_id = match level {
                    1 => "Heading1",
                    2 => "Heading2",
                    _ => "Heading3",
                };
                Paragraph::new()
                    .style(style_id)
                    .add_run(Run::new().add_text(text))
            }
            Line::Bullet(text) => {
                let mut para = Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(body_run("\u{2022} ", false, styles));
                for run in inline_runs(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
            Line::Text(text) => {
                let mut para = Paragraph::new().align(AlignmentType::Left);
                for run in inline_runs(text, styles) {
                    para = para.add_run(run);
                }
                para
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are half-points.
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}

fn body_run(text: &str, bold: bool, styles: &DocumentStyles) -> Run {
    let mut run = Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if bold {
        run = run.bold();
    }
    run
}

/// Split a line on `**` markers; segments alternate between plain and bold.
/// An unbalanced marker leaves the trailing segment plain, so stray
/// asterisk pairs never swallow the rest of the line.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let last = segments.len() - 1;
    let unclosed = segments.len() % 2 == 0;

    segments
        .iter()
        .enumerate()
        .filter(|(i, segment)| !segment.is_empty() || (*i == last && unclosed))
        .map(|(i, segment)| {
            if unclosed && i == last {
                // Reattach the opening marker that had no closing pair.
                body_run(&format!("**{segment}"), false, styles)
            } else {
                body_run(segment, i % 2 == 1, styles)
            }
        })
        .collect()
}
