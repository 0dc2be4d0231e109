//! Critical path calculation using forward and backward passes.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use thiserror::Error;

use crate::config::AnalysisConfig;
use crate::models::TaskNode;
use crate::{log_debug, log_passes, log_summary};

use super::types::{AnalysisResult, TaskTiming};

/// Structural errors detected before any pass runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No tasks to analyze")]
    EmptyProject,
    #[error("Duplicate task id: {0}")]
    DuplicateTask(String),
    #[error("Task {0} depends on itself")]
    SelfDependency(String),
    #[error("Task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: String, dependency: String },
    #[error("Circular dependency detected in task graph")]
    CircularDependency,
    #[error("Total task duration exceeds the supported range of whole days")]
    DurationOverflow,
}

/// Compact node index. Graphs are per-project; u32 is plenty.
type NodeId = u32;

/// Dependency graph as an arena keyed by integer node ids.
///
/// Ids are interned in sorted order, so index order is lexicographic id
/// order. That makes every pass and every tie-break deterministic without
/// further sorting.
struct TaskGraph {
    /// Task ids, sorted; position is the node's integer id.
    ids: Vec<String>,
    /// Durations in whole days, indexed by node id.
    durations: Vec<u32>,
    /// Direct predecessors, indexed by node id.
    deps: Vec<Vec<NodeId>>,
    /// Direct successors, indexed by node id.
    dependents: Vec<Vec<NodeId>>,
}

impl TaskGraph {
    /// Validate node ids and references, then build the adjacency arena.
    fn build(nodes: &[TaskNode]) -> Result<Self, AnalysisError> {
        if nodes.is_empty() {
            return Err(AnalysisError::EmptyProject);
        }

        // Every ES/EF is bounded by the duration sum; rejecting an oversized
        // sum here keeps all later u32 arithmetic free of wraparound
        let total: u64 = nodes.iter().map(|n| u64::from(n.duration_days)).sum();
        if total > u64::from(u32::MAX) {
            return Err(AnalysisError::DurationOverflow);
        }

        let mut ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
        ids.sort();
        if let Some(dup) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(AnalysisError::DuplicateTask(dup[0].clone()));
        }

        let index: FxHashMap<&str, NodeId> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i as NodeId))
            .collect();

        let n = ids.len();
        let mut durations = vec![0u32; n];
        let mut deps: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<NodeId>> = vec![Vec::new(); n];

        for node in nodes {
            let idx = index[node.id.as_str()] as usize;
            durations[idx] = node.duration_days;

            for dep in &node.depends_on {
                if *dep == node.id {
                    return Err(AnalysisError::SelfDependency(node.id.clone()));
                }
                let dep_id = *index.get(dep.as_str()).ok_or_else(|| {
                    AnalysisError::UnknownDependency {
                        task: node.id.clone(),
                        dependency: dep.clone(),
                    }
                })?;
                deps[idx].push(dep_id);
                dependents[dep_id as usize].push(idx as NodeId);
            }
        }

        // Successor lists in id order, for deterministic tie-breaks
        for succs in &mut dependents {
            succs.sort_unstable();
        }

        Ok(Self {
            ids,
            durations,
            deps,
            dependents,
        })
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Topological sort via Kahn's algorithm (dependencies before dependents).
fn topological_sort(graph: &TaskGraph) -> Result<Vec<NodeId>, AnalysisError> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = graph.deps.iter().map(|d| d.len()).collect();

    let mut queue: VecDeque<NodeId> = (0..n as NodeId)
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();

    let mut order: Vec<NodeId> = Vec::with_capacity(n);

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for &succ in &graph.dependents[id as usize] {
            let degree = &mut in_degree[succ as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != n {
        return Err(AnalysisError::CircularDependency);
    }

    Ok(order)
}

/// Walk forward from the smallest critical source along tight critical edges.
///
/// Start candidates are critical nodes with no dependencies at all; a
/// zero-duration predecessor gives its dependent ES = 0 too, so testing ES
/// alone would let a non-source head the path. A tight edge is one where the
/// successor's earliest start equals this node's earliest finish. When
/// several critical successors qualify, the smallest node id wins (index
/// order is id order).
fn extract_critical_path(
    graph: &TaskGraph,
    es: &[u32],
    ef: &[u32],
    slack: &[u32],
) -> Vec<String> {
    let start = (0..graph.len() as NodeId)
        .find(|&id| graph.deps[id as usize].is_empty() && slack[id as usize] == 0);

    let Some(mut current) = start else {
        return Vec::new();
    };

    let mut path = vec![graph.ids[current as usize].clone()];
    loop {
        let next = graph.dependents[current as usize]
            .iter()
            .copied()
            .find(|&succ| {
                slack[succ as usize] == 0 && es[succ as usize] == ef[current as usize]
            });
        match next {
            Some(succ) => {
                path.push(graph.ids[succ as usize].clone());
                current = succ;
            }
            None => return path,
        }
    }
}

/// Run critical path analysis over a task-dependency graph.
///
/// Two linear passes over the DAG in topological order:
/// 1. Forward: earliest start = max earliest finish of predecessors.
/// 2. Backward: latest finish = min latest start of successors.
///
/// Slack is `latest_finish - earliest_finish`; tasks with zero slack form
/// the critical path.
///
/// # Errors
/// All structural problems (empty input, duplicate ids, self or dangling
/// references, cycles) fail the whole call; no partial metrics are returned.
pub fn analyze(
    nodes: &[TaskNode],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let verbosity = config.verbosity;
    let graph = TaskGraph::build(nodes)?;
    let topo_order = topological_sort(&graph)?;
    log_passes!(
        verbosity,
        "topological sort complete: {} tasks",
        graph.len()
    );

    let n = graph.len();

    // Forward pass: earliest start/finish
    let mut es = vec![0u32; n];
    let mut ef = vec![0u32; n];
    let mut total_work = 0u32;

    for &id in &topo_order {
        let idx = id as usize;
        let earliest_start = graph.deps[idx]
            .iter()
            .map(|&dep| ef[dep as usize])
            .max()
            .unwrap_or(0);
        es[idx] = earliest_start;
        ef[idx] = earliest_start + graph.durations[idx];
        total_work += graph.durations[idx];
        log_debug!(
            verbosity,
            "forward: {} es={} ef={}",
            graph.ids[idx],
            es[idx],
            ef[idx]
        );
    }

    let project_duration = ef.iter().copied().max().unwrap_or(0);
    log_passes!(verbosity, "forward pass complete: duration {project_duration}");

    // Backward pass: latest start/finish, reverse topological order
    let mut ls = vec![0u32; n];
    let mut lf = vec![0u32; n];

    for &id in topo_order.iter().rev() {
        let idx = id as usize;
        let latest_finish = graph.dependents[idx]
            .iter()
            .map(|&succ| ls[succ as usize])
            .min()
            .unwrap_or(project_duration);
        lf[idx] = latest_finish;
        ls[idx] = latest_finish - graph.durations[idx];
        log_debug!(
            verbosity,
            "backward: {} ls={} lf={}",
            graph.ids[idx],
            ls[idx],
            lf[idx]
        );
    }

    // Slack: the two equivalent formulas must agree or the passes are buggy
    let mut slack = vec![0u32; n];
    for idx in 0..n {
        debug_assert_eq!(lf[idx] - ef[idx], ls[idx] - es[idx]);
        slack[idx] = lf[idx] - ef[idx];
    }

    let critical_path = extract_critical_path(&graph, &es, &ef, &slack);

    let timings: FxHashMap<String, TaskTiming> = (0..n)
        .map(|idx| {
            (
                graph.ids[idx].clone(),
                TaskTiming {
                    earliest_start: es[idx],
                    earliest_finish: ef[idx],
                    latest_start: ls[idx],
                    latest_finish: lf[idx],
                    slack: slack[idx],
                },
            )
        })
        .collect();

    log_summary!(
        verbosity,
        "analysis complete: {} tasks, duration {}, critical path {:?}",
        n,
        project_duration,
        critical_path
    );

    Ok(AnalysisResult {
        timings,
        critical_path,
        project_duration,
        total_work,
    })
}
