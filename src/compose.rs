//! Page composers.
//!
//! Each function renders one page kind of a playbook document against the
//! canvas contract: construct a canvas bound to the document's accent
//! color, issue layout calls, hand back the finished instruction list.
//! Chart and card layouts mix cursor-driven composites with absolutely
//! positioned primitives.

use crate::canvas::{BulletStyle, PageCanvas, ParagraphStyle};
use crate::catalog::{Playbook, Stat};
use crate::color::Color;
use crate::config::{CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, Palette};
use crate::content::ContentOp;
use crate::error::Result;

/// Compose all ten pages of one playbook document, in order.
pub fn pages(
    book: &Playbook,
    stats: &[Stat],
    sources: &[String],
    palette: Palette,
) -> Result<Vec<Vec<ContentOp>>> {
    let accent = Color::from_hex(&book.accent)?;
    Ok(vec![
        cover(book, palette, accent),
        executive_summary(book, palette, accent),
        market_signals(stats, palette, accent),
        use_cases(book, palette, accent),
        capability_map(book, palette, accent),
        learning_pathway(book, palette, accent),
        cohort_design(book, palette, accent),
        activation_plan(book, palette, accent),
        kpi_scorecard(book, palette, accent),
        sources_page(sources, palette, accent),
    ])
}

/// Cover page: masthead band, title block, highlights, footer rule.
pub fn cover(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.rect(0.0, PAGE_HEIGHT - 140.0, PAGE_WIDTH, 140.0, Some(palette.surface), None, 1.0);
    page.rect(0.0, PAGE_HEIGHT - 30.0, PAGE_WIDTH, 30.0, Some(accent), None, 1.0);
    page.text(MARGIN, PAGE_HEIGHT - 90.0, &book.title, 24.0, Some(palette.ink), true);
    page.text(MARGIN, PAGE_HEIGHT - 120.0, &book.subtitle, 12.0, Some(palette.ink_muted), false);
    page.text(
        MARGIN,
        PAGE_HEIGHT - 160.0,
        &format!("{} | {}", book.vendor, book.industry),
        11.0,
        Some(palette.ink_soft),
        false,
    );

    page.set_cursor(PAGE_HEIGHT - 210.0);
    page.section_header("What you will gain");
    page.bullet_list(&book.highlights, BulletStyle::sized(11.0));

    page.rect(MARGIN, 90.0, CONTENT_WIDTH, 2.0, Some(accent), None, 1.0);
    page.text(MARGIN, 60.0, "The Learning Curve", 12.0, Some(palette.ink), true);
    page.text(MARGIN, 42.0, "Keep learning, keep growing.", 10.0, Some(palette.ink_soft), false);
    page.finish()
}

/// Executive summary page.
pub fn executive_summary(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Executive summary");
    for para in &book.exec_summary {
        page.paragraph(para, ParagraphStyle::default());
    }
    page.section_header("Outcome focus");
    page.bullet_list(&book.outcomes, BulletStyle::sized(11.0));
    page.finish()
}

/// Market signals page: stat bullets plus a simple bar chart.
pub fn market_signals(stats: &[Stat], palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Market signals");
    page.paragraph(
        "Enterprise learning leaders are investing in AI fluency, cloud modernization, and governance readiness. These signals frame the urgency and scale of adoption across industries.",
        ParagraphStyle::default(),
    );
    let stat_lines: Vec<String> =
        stats.iter().map(|s| format!("{} — {}", s.value, s.label)).collect();
    page.bullet_list(&stat_lines, BulletStyle::sized(10.0));

    let chart_x = MARGIN;
    let chart_y = 230.0;
    let chart_w = CONTENT_WIDTH;
    let chart_h = 140.0;
    page.rect(chart_x, chart_y, chart_w, chart_h, Some(palette.surface_alt), Some(palette.surface_alt), 1.0);

    let bar_values: [i32; 4] = [80, 68, 56, 44];
    let bar_labels = ["AI", "Cloud", "Security", "Data"];
    let bar_width = (chart_w - 80.0) / bar_values.len() as f64;
    for (i, &value) in bar_values.iter().enumerate() {
        let x = chart_x + 30.0 + i as f64 * bar_width;
        let height = chart_h * (value as f64 / 100.0);
        page.rect(x, chart_y, bar_width * 0.5, height, Some(accent), None, 1.0);
        page.text(x, chart_y - 16.0, bar_labels[i], 9.0, Some(palette.ink_soft), false);
        page.text(x, chart_y + height + 6.0, &format!("{}%", value), 9.0, Some(palette.ink_muted), false);
    }

    page.text(MARGIN, 200.0, "Implication", 11.0, Some(palette.ink), true);
    page.paragraph(
        "Leadership teams need a measurable learning plan that balances speed, governance, and adoption across the enterprise.",
        ParagraphStyle::default(),
    );
    page.finish()
}

/// Strategic use cases page.
pub fn use_cases(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Strategic use cases");
    page.paragraph(
        "We prioritize initiatives that deliver executive visibility, measurable value, and rapid adoption.",
        ParagraphStyle::default(),
    );
    page.bullet_list(&book.use_cases, BulletStyle::sized(11.0));
    page.finish()
}

/// Capability map page: three columns of cards plus accelerators.
pub fn capability_map(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Capability map");

    let columns = [
        ("People", &book.capability_people),
        ("Process", &book.capability_process),
        ("Platform", &book.capability_platform),
    ];
    let col_w = (CONTENT_WIDTH - 24.0) / 3.0;
    let top_y = page.cursor();
    let box_h = 220.0;
    for (idx, (title, items)) in columns.iter().enumerate() {
        let x = MARGIN + idx as f64 * (col_w + 12.0);
        let y = top_y - box_h;
        page.rect(x, y, col_w, box_h, Some(palette.surface), Some(palette.surface_alt), 1.0);
        page.text(x + 12.0, y + box_h - 24.0, title, 11.0, Some(palette.ink), true);
        let mut y_cursor = y + box_h - 46.0;
        for item in items.iter() {
            page.text(x + 12.0, y_cursor, &format!("• {}", item), 9.5, Some(palette.ink_muted), false);
            y_cursor -= 14.0;
        }
    }

    page.set_cursor(top_y - box_h - 24.0);
    page.section_header("Vendor accelerators");
    page.bullet_list(&book.accelerators, BulletStyle::sized(10.0));
    page.finish()
}

/// Learning pathway page: one card per phase.
pub fn learning_pathway(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Learning pathway");
    page.paragraph(
        "A structured pathway ensures executives, leaders, and practitioners move in lockstep.",
        ParagraphStyle::default(),
    );

    let mut y = page.cursor();
    let box_w = CONTENT_WIDTH;
    let box_h = 80.0;
    for phase in &book.learning_path {
        page.rect(MARGIN, y - box_h, box_w, box_h, Some(palette.surface), Some(palette.surface_alt), 1.0);
        page.text(MARGIN + 14.0, y - 26.0, &phase.title, 11.0, Some(palette.ink), true);
        page.text(MARGIN + 14.0, y - 46.0, &phase.focus, 10.0, Some(palette.ink_muted), false);
        page.text(MARGIN + 14.0, y - 66.0, &phase.duration, 9.5, Some(palette.ink_soft), false);
        y -= box_h + 14.0;
    }
    page.finish()
}

/// Cohort design page: one card per track with its course list.
pub fn cohort_design(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Cohort design");
    page.paragraph(
        "Role-based tracks ensure that leaders, managers, and practitioners receive the right depth of enablement.",
        ParagraphStyle::default(),
    );

    let mut y = page.cursor();
    let box_h = 150.0;
    for track in &book.cohorts {
        page.rect(MARGIN, y - box_h, CONTENT_WIDTH, box_h, Some(palette.surface), Some(palette.surface_alt), 1.0);
        page.text(MARGIN + 14.0, y - 28.0, &track.title, 11.0, Some(palette.ink), true);
        page.text(MARGIN + 14.0, y - 48.0, &track.summary, 10.0, Some(palette.ink_muted), false);
        let mut y_cursor = y - 70.0;
        for course in &track.courses {
            page.text(MARGIN + 22.0, y_cursor, &format!("• {}", course), 9.5, Some(palette.ink_soft), false);
            y_cursor -= 14.0;
        }
        y -= box_h + 16.0;
    }
    page.finish()
}

/// 90-day activation plan page.
pub fn activation_plan(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("90-day activation plan");
    page.paragraph(
        "A focused 90-day plan connects strategy, learning, and deployment milestones.",
        ParagraphStyle::default(),
    );

    let mut y = page.cursor();
    for plan_step in &book.plan {
        page.rect(MARGIN, y - 80.0, CONTENT_WIDTH, 80.0, Some(palette.surface), Some(palette.surface_alt), 1.0);
        page.text(MARGIN + 14.0, y - 26.0, &plan_step.title, 11.0, Some(palette.ink), true);
        page.text(MARGIN + 14.0, y - 46.0, &plan_step.focus, 10.0, Some(palette.ink_muted), false);
        page.text(MARGIN + 14.0, y - 64.0, &plan_step.deliverables, 9.5, Some(palette.ink_soft), false);
        y -= 92.0;
    }
    page.finish()
}

/// KPI scorecard page.
pub fn kpi_scorecard(book: &Playbook, palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("KPI scorecard");
    page.paragraph(
        "Track adoption, performance, and business impact with a consistent scorecard.",
        ParagraphStyle::default(),
    );
    page.bullet_list(&book.kpis, BulletStyle::sized(10.0));
    page.finish()
}

/// Sources page plus the closing pitch.
pub fn sources_page(sources: &[String], palette: Palette, accent: Color) -> Vec<ContentOp> {
    let mut page = PageCanvas::new(palette, accent);
    page.section_header("Sources");
    page.bullet_list(sources, BulletStyle::sized(9.5));

    page.section_header("How The Learning Curve helps");
    page.paragraph(
        "The Learning Curve designs instructor-led programs that map directly to business outcomes. We blend vendor-authorized content with custom labs, coaching, and readiness metrics so your teams can adopt faster and scale safely.",
        ParagraphStyle::default(),
    );
    page.paragraph(
        "Ready to build a tailored learning journey? Contact us at thelearningcurve.ai or visit thelearningcurve.ai.",
        ParagraphStyle::sized(10.0),
    );
    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_every_document_has_ten_pages() {
        let catalog = Catalog::builtin();
        for book in &catalog.playbooks {
            let pages = pages(book, &catalog.stats, &catalog.sources, Palette::default()).unwrap();
            assert_eq!(pages.len(), 10, "wrong page count for {}", book.slug);
            for ops in &pages {
                // Every page starts with the background fill.
                assert_eq!(ops[0], ContentOp::SetFillRgb(Palette::default().bg));
                assert!(ops.len() > 3);
            }
        }
    }

    #[test]
    fn test_bad_accent_token_fails_fast() {
        let catalog = Catalog::builtin();
        let mut book = catalog.playbooks[0].clone();
        book.accent = "not-a-color".into();
        assert!(pages(&book, &catalog.stats, &catalog.sources, Palette::default()).is_err());
    }

    #[test]
    fn test_cover_mentions_vendor_and_industry() {
        let catalog = Catalog::builtin();
        let book = &catalog.playbooks[0];
        let accent = Color::from_hex(&book.accent).unwrap();
        let ops = cover(book, Palette::default(), accent);
        assert!(ops.iter().any(|op| matches!(
            op,
            ContentOp::ShowText(s) if s == &format!("{} | {}", book.vendor, book.industry)
        )));
    }

    #[test]
    fn test_market_signals_draws_four_bars() {
        let catalog = Catalog::builtin();
        let accent = Color::from_hex("#dd2c00").unwrap();
        let ops = market_signals(&catalog.stats, Palette::default(), accent);
        let accent_fills = ops
            .iter()
            .filter(|op| matches!(op, ContentOp::SetFillRgb(c) if *c == accent))
            .count();
        // One accent fill per bar; header bar fill is also accent-colored.
        assert_eq!(accent_fills, 5);
    }
}
