// src/engine/batch.rs
use super::{GeneratedReport, ReportEngine};
use crate::error::ReportError;
use crate::filter::FilterParams;
use quire_render_core::ReportFormat;
use quire_types::ReportKind;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One entry of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub format: ReportFormat,
    #[serde(default)]
    pub params: FilterParams,
}

impl ReportRequest {
    pub fn new(kind: ReportKind, format: ReportFormat) -> Self {
        Self { kind, format, params: FilterParams::default() }
    }

    pub fn with_params(mut self, params: FilterParams) -> Self {
        self.params = params;
        self
    }
}

impl ReportEngine {
    /// Generates every request independently. Results are returned in request
    /// order; one failing request does not affect the others.
    pub fn generate_batch(&self, requests: &[ReportRequest]) -> Vec<Result<GeneratedReport, ReportError>> {
        log::debug!("Generating batch of {} reports", requests.len());
        let run = |request: &ReportRequest| self.generate(request.kind, request.format, &request.params);

        #[cfg(feature = "parallel")]
        let results = requests.par_iter().map(run).collect();

        #[cfg(not(feature = "parallel"))]
        let results = requests.iter().map(run).collect();

        results
    }
}
