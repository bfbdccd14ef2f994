use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    /// Dotted path of the offending setting, e.g. `proxy.ssh.listen_addr`.
    pub section: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, section: &str, message: String, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            section: section.to_string(),
            help,
        });
    }

    pub(crate) fn warning(&mut self, section: &str, message: String, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            section: section.to_string(),
            help,
        });
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!(
                "{}:{}: {}: {}",
                self.file.display(),
                issue.section,
                severity,
                issue.message
            );

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.has_violations() {
            println!(
                "configuration validation failed ({} errors, {} warnings)\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        println!("{}", self.file.display().bold());

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            match issue.severity {
                Severity::Error => println!(
                    "  {} {}: {}",
                    "error".red().bold(),
                    issue.section.dimmed(),
                    issue.message
                ),
                Severity::Warning => println!(
                    "  {} {}: {}",
                    "warning".yellow().bold(),
                    issue.section.dimmed(),
                    issue.message
                ),
            }

            if let Some(help) = &issue.help {
                println!("    {} {}", "help:".cyan(), help);
            }
        }
    }
}
