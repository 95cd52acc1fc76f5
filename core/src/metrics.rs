use prometheus::{IntCounterVec, Opts, Registry};

use crate::types::{CorrelationReport, CorrelationValue, Variability, VariabilityLevel};

/// Tellere for analyseutfall. Registeret eies av kalleren; kjernefunksjonene
/// rører det aldri, kun oppsummeringene når de får `Some(&Metrics)`.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    analyses_total: IntCounterVec,
    sentinels_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Result<Self, prometheus::Error> {
        let analyses_total = IntCounterVec::new(
            Opts::new("wellbeing_analyses_total", "Analyses run, by kind"),
            &["analysis"],
        )?;
        let sentinels_total = IntCounterVec::new(
            Opts::new(
                "wellbeing_sentinels_total",
                "Analyses that returned a sentinel instead of a value",
            ),
            &["analysis", "outcome"],
        )?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(sentinels_total.clone()))?;
        Ok(Self { registry, analyses_total, sentinels_total })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn analyses(&self, analysis: &str) -> u64 {
        self.analyses_total.with_label_values(&[analysis]).get()
    }

    pub fn sentinels(&self, analysis: &str, outcome: &str) -> u64 {
        self.sentinels_total.with_label_values(&[analysis, outcome]).get()
    }

    pub fn observe_variability(&self, v: &Variability) {
        self.analyses_total.with_label_values(&["variability"]).inc();
        if v.level == VariabilityLevel::InsufficientData {
            self.sentinels_total
                .with_label_values(&["variability", v.level.as_str()])
                .inc();
        }
    }

    pub fn observe_correlation(&self, report: &CorrelationReport) {
        self.analyses_total.with_label_values(&["correlation"]).inc();
        for value in report.global.iter().chain(report.by_category.values()) {
            let outcome = match value {
                CorrelationValue::Value(_) => continue,
                CorrelationValue::InsufficientData => crate::types::INSUFFICIENT_DATA,
                CorrelationValue::ComputationError => crate::types::COMPUTATION_ERROR,
            };
            self.sentinels_total
                .with_label_values(&["correlation", outcome])
                .inc();
        }
    }
}
