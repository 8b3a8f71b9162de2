use crate::core::config::SketchConfig;
use crate::core::models::architecture::Architecture;
use crate::core::models::connectivity::Connectivity;
use crate::core::models::ids::SseId;
use crate::core::models::motif::Motif;
use crate::engine::assembler::{self, BackboneSketch};
use crate::engine::enumerate::enumerate_connectivities;
use crate::engine::error::EngineError;
use crate::engine::feasibility::{self, CandidateForm};
use crate::engine::graph::AdjacencyGraph;
use crate::engine::scaffold::Scaffold;
use rayon::prelude::*;
use tracing::{info, instrument};

/// The outcome of one sketch run: every enumerated connectivity with its
/// feasibility verdict, over the scaffold and configuration that produced it.
#[derive(Debug, Clone)]
pub struct SketchReport {
    architecture: Architecture,
    config: SketchConfig,
    scaffold: Scaffold,
    candidates: Vec<CandidateForm>,
}

impl SketchReport {
    /// Every evaluated candidate, accepted or not.
    pub fn candidates(&self) -> &[CandidateForm] {
        &self.candidates
    }

    /// The candidates that passed all three feasibility rules.
    pub fn accepted(&self) -> impl Iterator<Item = &CandidateForm> {
        self.candidates.iter().filter(|c| c.accepted)
    }

    /// The absolute architecture the run was evaluated on.
    pub fn architecture(&self) -> &Architecture {
        &self.architecture
    }

    /// Builds the backbone sketch of one candidate from this report.
    pub fn materialize(&self, candidate: &CandidateForm) -> Result<BackboneSketch, EngineError> {
        assembler::assemble(candidate, &self.scaffold, &self.config)
    }
}

/// Runs the full sketch pipeline: cast the architecture absolute, place every
/// element, enumerate all chain orderings over the adjacency graph, and
/// evaluate each one against the feasibility rules.
#[instrument(skip_all, name = "sketch_workflow")]
pub fn run(
    architecture: &Architecture,
    motifs: &[Motif],
    config: &SketchConfig,
) -> Result<SketchReport, EngineError> {
    // === Phase 0: Validation and absolute casting ===
    architecture.validate_edges()?;
    let architecture = architecture.cast_absolute(config)?;
    info!(
        architecture = %architecture.architecture_str(),
        elements = architecture.sse_count(),
        "Starting sketch run."
    );

    // === Phase 1: Placement ===
    let scaffold = Scaffold::build(&architecture, motifs)?;

    // === Phase 2: Enumeration ===
    let graph = AdjacencyGraph::build(&architecture, config)?;
    let connectivities = enumerate_connectivities(&graph, config)?;
    info!(
        connectivities = connectivities.len(),
        "Enumeration complete; evaluating feasibility."
    );

    // === Phase 3: Feasibility evaluation ===
    let report = evaluate_all(architecture, *config, scaffold, &connectivities)?;
    info!(
        candidates = report.candidates.len(),
        accepted = report.accepted().count(),
        "Sketch run complete."
    );
    Ok(report)
}

/// Like [`run`], but evaluates only the supplied orderings instead of
/// enumerating. Each ordering is validated against the adjacency graph first.
#[instrument(skip_all, name = "sketch_workflow_ordered")]
pub fn run_with_orderings(
    architecture: &Architecture,
    motifs: &[Motif],
    config: &SketchConfig,
    orderings: &[Vec<SseId>],
) -> Result<SketchReport, EngineError> {
    architecture.validate_edges()?;
    let architecture = architecture.cast_absolute(config)?;
    let scaffold = Scaffold::build(&architecture, motifs)?;
    let graph = AdjacencyGraph::build(&architecture, config)?;

    let connectivities = orderings
        .iter()
        .map(|order| graph.secure_ordering(order))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        connectivities = connectivities.len(),
        "Evaluating supplied orderings."
    );

    evaluate_all(architecture, *config, scaffold, &connectivities)
}

fn evaluate_all(
    architecture: Architecture,
    config: SketchConfig,
    scaffold: Scaffold,
    connectivities: &[Connectivity],
) -> Result<SketchReport, EngineError> {
    // Candidates are independent: each one works on its own frame clones.
    let candidates = connectivities
        .par_iter()
        .map(|conn| feasibility::evaluate(conn, &scaffold))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SketchReport {
        architecture,
        config,
        scaffold,
        candidates,
    })
}
