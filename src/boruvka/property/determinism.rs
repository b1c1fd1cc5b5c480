//! Property 3: Determinism under repeated execution.
//!
//! Runs the scheduler on the same input graph multiple times and asserts
//! that the edge list, total weight, component count, and round count are
//! identical across all runs, detecting non-determinism from thread
//! scheduling in the parallel search phase.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::compute_mst;

use super::types::{DeterminismConfig, MstFixture};

/// Runs the determinism property for the given fixture.
///
/// Executes the computation repeatedly and asserts every run produces
/// identical results. The repetition count is controlled by
/// [`DeterminismConfig`].
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();

    let baseline = compute_mst(&fixture.graph).map_err(|e| {
        TestCaseError::fail(format!(
            "baseline compute_mst failed: {e} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.graph.vertex_count(),
            fixture.graph.edge_count(),
        ))
    })?;

    for run in 1..config.repetitions {
        let result = compute_mst(&fixture.graph).map_err(|e| {
            TestCaseError::fail(format!(
                "run {run}: compute_mst failed: {e} (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.graph.vertex_count(),
                fixture.graph.edge_count(),
            ))
        })?;

        if result.total_weight() != baseline.total_weight() {
            return Err(TestCaseError::fail(format!(
                "run {run}: total weight diverged — baseline={}, run={} \
                 (distribution={:?})",
                baseline.total_weight(),
                result.total_weight(),
                fixture.distribution,
            )));
        }

        if result.component_count() != baseline.component_count() {
            return Err(TestCaseError::fail(format!(
                "run {run}: component count diverged — baseline={}, run={} \
                 (distribution={:?})",
                baseline.component_count(),
                result.component_count(),
                fixture.distribution,
            )));
        }

        if result.rounds() != baseline.rounds() {
            return Err(TestCaseError::fail(format!(
                "run {run}: round count diverged — baseline={}, run={} \
                 (distribution={:?})",
                baseline.rounds(),
                result.rounds(),
                fixture.distribution,
            )));
        }

        // Exact edge-list equality — the strongest determinism check.
        if result.edges() != baseline.edges() {
            return Err(TestCaseError::fail(format!(
                "run {run}: edge list differs from baseline \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.graph.vertex_count(),
                fixture.graph.edge_count(),
            )));
        }
    }

    Ok(())
}
