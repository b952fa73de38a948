//! Severity and status display: colors and localized labels

use crate::docx::Rgb;
use crate::i18n::{get_translation, Language};
use crate::models::{Severity, Status};

/// Report title blue
pub const ACCENT: Rgb = Rgb(37, 99, 235);

/// Secondary text gray (captions, standard line, evidence notes)
pub const MUTED: Rgb = Rgb(107, 114, 128);

/// Color of the severity badge; black for unrecognized values
pub fn severity_color(severity: Severity) -> Rgb {
    match severity {
        Severity::Critical => Rgb(220, 53, 69),
        Severity::High => Rgb(253, 126, 20),
        Severity::Medium => Rgb(255, 193, 7),
        Severity::Low => Rgb(13, 202, 240),
        Severity::Info => Rgb(108, 117, 125),
        Severity::Unrecognized => Rgb::BLACK,
    }
}

/// Color of the status badge; black for unrecognized values
pub fn status_color(status: Status) -> Rgb {
    match status {
        Status::Open => Rgb(220, 53, 69),
        Status::InProgress => Rgb(255, 193, 7),
        Status::Resolved => Rgb(22, 197, 94),
        Status::Closed => Rgb(108, 117, 125),
        Status::Unrecognized => Rgb::BLACK,
    }
}

pub fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "severity_critical",
        Severity::High => "severity_high",
        Severity::Medium => "severity_medium",
        Severity::Low => "severity_low",
        Severity::Info | Severity::Unrecognized => "severity_info",
    }
}

pub fn status_key(status: Status) -> &'static str {
    match status {
        Status::Open | Status::Unrecognized => "status_open",
        Status::InProgress => "status_in_progress",
        Status::Resolved => "status_resolved",
        Status::Closed => "status_closed",
    }
}

pub fn get_severity_text(severity: Severity, lang: Language) -> &'static str {
    get_translation(severity_key(severity), lang)
}

pub fn get_status_text(status: Status, lang: Language) -> &'static str {
    get_translation(status_key(status), lang)
}
