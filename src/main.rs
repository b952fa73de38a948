//! Audit report generator CLI

use auditdocx::report::evidence::EvidenceKind;
use auditdocx::{get_severity_text, get_status_text, load_audit, render_audit_file};
use auditdocx::{Language, Settings, Severity, Status};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "auditdocx")]
#[command(about = "Render audit records into Word reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the audit JSON export
    #[arg(short, long)]
    input: PathBuf,

    /// Base directory evidence file paths are relative to
    #[arg(short, long, env = "AUDITDOCX_UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Word report for an audit
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory for the generated report (defaults to the system temp dir)
        #[arg(short, long, env = "AUDITDOCX_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Also copy the report to this file or directory
        #[arg(long)]
        copy_to: Option<PathBuf>,
    },

    /// Show how an audit would be rendered without writing a report
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { source, output_dir, copy_to } => {
            let mut settings = Settings::default().with_upload_dir(source.upload_dir);
            if let Some(dir) = output_dir {
                settings = settings.with_output_dir(dir);
            }

            match render_audit_file(&source.input, &settings) {
                Ok(path) => {
                    println!("{}", "✅ Report generated".green().bold());
                    println!("  - Output: {}", path.display());

                    if let Some(target) = copy_to {
                        match copy_report(&path, &target, &source.input) {
                            Ok(copied) => println!("  - Copied to: {}", copied.display()),
                            Err(e) => {
                                let message = format!("❌ Failed to copy report: {:#}", e);
                                eprintln!("{}", message.red());
                                std::process::exit(1);
                            }
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{}", "❌ Report generation failed!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Inspect { source } => match load_audit(&source.input) {
            Ok(audit) => {
                let lang = Language::resolve(audit.language.as_deref());

                println!("{}", "📊 Audit".bold().blue());
                println!("{}", "=".repeat(50).blue());
                println!("Name: {}", audit.name);
                println!("Organization: {}", audit.organization().name);
                println!("Project: {}", audit.project.name);
                println!("Standard: {}", audit.standard);
                println!("Report language: {}", lang);
                println!("Findings: {}", audit.findings.len());
                println!();

                let counts = audit.severity_counts();
                println!("{}", "Severity".bold());
                for severity in Severity::ORDERED {
                    let label = get_severity_text(severity, lang);
                    println!("  {:<14} {}", label, counts.get(severity));
                }

                println!("{}", "Status".bold());
                for status in [Status::Open, Status::InProgress, Status::Resolved, Status::Closed] {
                    let label = get_status_text(status, lang);
                    println!("  {:<14} {}", label, audit.count_by_status(status));
                }

                if audit.evidence_count() > 0 {
                    println!();
                    println!("{}", "Evidence".bold());
                    for (idx, finding) in audit.findings.iter().enumerate() {
                        for evidence in &finding.evidences {
                            let exists = evidence.resolve_path(&source.upload_dir).exists();
                            let mode = match (EvidenceKind::of(evidence), exists) {
                                (EvidenceKind::Image(_), true) => "embed".green(),
                                (EvidenceKind::Image(_), false) => "missing".red(),
                                (EvidenceKind::Attachment, _) => "list".normal(),
                            };
                            println!("  #{} {} [{}]", idx + 1, evidence.file_name, mode);
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{}", "❌ Failed to load audit!".red().bold());
                eprintln!("{}", format!("Error: {:#}", e).red());
                std::process::exit(1);
            }
        },
    }
}

/// Copy a generated report, naming it after the input when `target` is a directory
fn copy_report(report: &Path, target: &Path, input: &Path) -> std::io::Result<PathBuf> {
    let destination = if target.is_dir() {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(auditdocx::utils::sanitize_name)
            .unwrap_or_else(|| "audit_report".to_string());
        target.join(format!("{}.docx", stem))
    } else {
        target.to_path_buf()
    };

    std::fs::copy(report, &destination)?;
    Ok(destination)
}
