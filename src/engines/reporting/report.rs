use super::trials::TrialReport;
use crate::config::{ReportConfig, ReportFormat};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write as _;

/// Results of a batch of trials, ready to print or export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub generations: usize,
    pub trials: Vec<TrialReport>,
}

impl Report {
    pub fn new(generations: usize, trials: Vec<TrialReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            generations,
            trials,
        }
    }

    /// Plain-text summary: population, allele frequencies and genome frequencies per trial
    pub fn render_text(&self, locus: Option<usize>) -> String {
        let mut lines = vec![format!(
            "=== Random mating: {} trial(s), {} generation(s) ===",
            self.trials.len(),
            self.generations
        )];

        for trial in &self.trials {
            let result = &trial.result;
            lines.push(String::new());
            lines.push(match trial.seed {
                Some(seed) => format!("Trial {} (seed {})", trial.trial, seed),
                None => format!("Trial {}", trial.trial),
            });
            lines.push(format!("  Population: {}", result.population));

            for frequencies in result
                .alleles
                .iter()
                .filter(|l| locus.map_or(true, |wanted| wanted == l.locus))
            {
                let alleles: Vec<String> = frequencies
                    .frequencies
                    .iter()
                    .map(|(allele, share)| format!("{}: {:.4}", allele, share))
                    .collect();
                lines.push(format!(
                    "  Allele frequencies (locus {}): {{{}}}",
                    frequencies.locus,
                    alleles.join(", ")
                ));
            }

            lines.push("  Genome frequencies:".to_string());
            lines.extend(result.genomes.iter().map(|share| {
                format!(
                    "    {}: {:.4} ({})",
                    share.genome, share.frequency, share.count
                )
            }));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the configured format and write to the configured output, or stdout
    pub fn write(&self, config: &ReportConfig) -> Result<()> {
        let rendered = match config.format {
            ReportFormat::Text => self.render_text(config.locus),
            ReportFormat::Json => self.to_json()?,
        };

        match &config.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                log::info!("Report written to {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}
