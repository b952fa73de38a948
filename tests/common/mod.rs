//! Shared fixtures for integration tests

#![allow(dead_code)]

use auditdocx::docx::{Block, Document, Paragraph, ParagraphStyle};
use auditdocx::{Audit, Finding, Organization, Project};
use chrono::NaiveDate;

/// 1x1 transparent PNG
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// 1x1 lossless WebP
pub const TINY_WEBP: &[u8] = &[
    0x52, 0x49, 0x46, 0x46, 0x1A, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50, 0x56, 0x50, 0x38,
    0x4C, 0x0D, 0x00, 0x00, 0x00, 0x2F, 0x00, 0x00, 0x00, 0x10, 0x07, 0x10, 0x11, 0x11, 0x88,
    0x88, 0xFE, 0x07, 0x00,
];

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
}

pub fn sample_audit(language: Option<&str>, findings: Vec<Finding>) -> Audit {
    Audit {
        id: 42,
        name: "Annual ISMS Audit".to_string(),
        description: None,
        standard: "ISO 27001".to_string(),
        audit_date: NaiveDate::from_ymd_opt(2024, 3, 9),
        language: language.map(str::to_string),
        created_at: NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(9, 30, 0)),
        updated_at: None,
        project: Project {
            name: "Datacenter".to_string(),
            organization: Organization {
                name: "Acme Corp".to_string(),
            },
        },
        findings,
    }
}

/// Paragraphs between the level-1 heading `title` and the next level-1 heading
pub fn section<'a>(doc: &'a Document, title: &str) -> Vec<&'a Paragraph> {
    let mut inside = false;
    let mut paragraphs = Vec::new();

    for block in &doc.body {
        let Block::Paragraph(p) = block else {
            continue;
        };

        if p.style == Some(ParagraphStyle::Heading1) {
            inside = p.plain_text() == title;
            continue;
        }

        if inside {
            paragraphs.push(p);
        }
    }

    paragraphs
}

pub fn texts(paragraphs: &[&Paragraph]) -> Vec<String> {
    paragraphs.iter().map(|p| p.plain_text()).collect()
}

pub fn with_style<'a>(paragraphs: &[&'a Paragraph], style: ParagraphStyle) -> Vec<&'a Paragraph> {
    paragraphs
        .iter()
        .copied()
        .filter(|p| p.style == Some(style))
        .collect()
}
