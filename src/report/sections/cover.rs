//! Cover page

use crate::docx::{Document, PageSetup, Paragraph, Table, TextRun};
use crate::models::Audit;
use crate::report::presentation::{ACCENT, MUTED};
use crate::report::ReportContext;

/// Title, audit name, standard and the organization/project/date table,
/// followed by a page break. Also fixes the page geometry to A4.
pub fn add_cover_page(doc: &mut Document, audit: &Audit, ctx: &ReportContext) {
    doc.page = PageSetup::a4();

    doc.add_paragraph(
        Paragraph::new()
            .centered()
            .space_after(24.0)
            .run(TextRun::new(ctx.t("audit_report")).bold().size(28.0).color(ACCENT)),
    );

    doc.add_blank();
    doc.add_blank();

    doc.add_paragraph(
        Paragraph::new()
            .centered()
            .space_after(12.0)
            .run(TextRun::new(audit.name.as_str()).bold().size(20.0)),
    );

    if !audit.standard.is_empty() {
        doc.add_paragraph(
            Paragraph::new().centered().run(
                TextRun::new(format!("{}: {}", ctx.t("standard"), audit.standard))
                    .size(14.0)
                    .color(MUTED),
            ),
        );
    }

    for _ in 0..8 {
        doc.add_blank();
    }

    doc.add_table(info_table(audit, ctx));
    doc.add_page_break();
}

fn info_table(audit: &Audit, ctx: &ReportContext) -> Table {
    let audit_date = match audit.audit_date {
        Some(date) => ctx.lang.format_date(date),
        None => ctx.t("not_specified").to_string(),
    };

    let rows = [
        (ctx.t("organization"), audit.organization().name.clone()),
        (ctx.t("project"), audit.project.name.clone()),
        (ctx.t("audit_date"), audit_date),
        (ctx.t("report_date"), ctx.lang.format_date(ctx.report_date)),
        (ctx.t("standard"), audit.standard.clone()),
    ];

    rows.into_iter().fold(Table::new().centered(), |table, (label, value)| {
        table.row(vec![
            Paragraph::new().run(TextRun::new(label).bold().size(11.0)),
            Paragraph::new().run(TextRun::new(value).size(11.0)),
        ])
    })
}
