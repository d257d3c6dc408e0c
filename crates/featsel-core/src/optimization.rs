//! Hill climbing over fixed-width instances.
//!
//! The climber keeps a centre instance and scores neighbourhoods of it at a
//! growing Hamming distance. It moves to the best neighbour whenever that
//! neighbour strictly improves on the centre, and resets the distance to 1.
//! Neighbourhoods larger than the share of the remaining budget they may use
//! are sampled at random.
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::SelectionParameters;
use crate::instance::{for_each_combination, n_choose_k, Instance};
use crate::scoring::{CompositeScore, InstanceScorer};

#[derive(Debug, Clone, PartialEq)]
pub struct HillClimbingParams {
    /// Largest Hamming distance a neighbourhood is generated at.
    pub max_distance: usize,
    /// Score gain a neighbour needs to replace the centre.
    pub min_score_improvement: f64,
    /// Widen the distance when a neighbourhood holds no improvement.
    pub widen_search: bool,
    /// Share of the remaining evaluations one neighbourhood may use.
    pub fraction_of_remaining: f64,
    /// Stop once the centre reaches this score.
    pub max_score: Option<f64>,
    pub seed: u64,
    /// Worker threads, 0 for the global rayon pool.
    pub jobs: usize,
}

impl Default for HillClimbingParams {
    fn default() -> Self {
        Self {
            max_distance: 4,
            min_score_improvement: 0.0,
            widen_search: true,
            fraction_of_remaining: 0.5,
            max_score: None,
            seed: 1,
            jobs: 0,
        }
    }
}

impl From<&SelectionParameters> for HillClimbingParams {
    fn from(params: &SelectionParameters) -> Self {
        Self {
            max_distance: params.hc_max_distance,
            min_score_improvement: params.hc_min_score_improvement,
            widen_search: params.hc_widen_search,
            fraction_of_remaining: params.hc_fraction_of_remaining,
            max_score: params.hc_max_score,
            seed: params.seed,
            jobs: params.jobs,
        }
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone)]
pub struct HillClimbingOutcome {
    /// Best instance and its score, `None` when nothing was evaluated.
    pub best: Option<(Instance, CompositeScore)>,
    /// Number of evaluations performed.
    pub evals: usize,
    /// 1-based evaluation at which the best instance was first scored.
    pub best_eval: usize,
}

pub struct HillClimbing {
    params: HillClimbingParams,
}

impl HillClimbing {
    pub fn new(params: HillClimbingParams) -> Self {
        HillClimbing { params }
    }

    /// Climb from `init` using at most `max_evals` evaluations of `scorer`.
    pub fn optimize<S: InstanceScorer>(
        &self,
        init: &Instance,
        scorer: &S,
        max_evals: usize,
    ) -> HillClimbingOutcome {
        if self.params.jobs == 0 {
            return self.climb(init, scorer, max_evals);
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.params.jobs)
            .build()
        {
            Ok(pool) => pool.install(|| self.climb(init, scorer, max_evals)),
            Err(e) => {
                log::warn!("Could not build a pool of {} threads: {}", self.params.jobs, e);
                self.climb(init, scorer, max_evals)
            }
        }
    }

    fn climb<S: InstanceScorer>(
        &self,
        init: &Instance,
        scorer: &S,
        max_evals: usize,
    ) -> HillClimbingOutcome {
        if max_evals == 0 {
            return HillClimbingOutcome {
                best: None,
                evals: 0,
                best_eval: 0,
            };
        }

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let max_distance = self.params.max_distance.min(init.width());

        let mut center = init.clone();
        let mut center_score = scorer.score(&center);
        let mut evals = 1;
        let mut best_eval = 1;
        let mut distance = 1;

        log::debug!("Initial instance {:?} scored {}", center, center_score);

        while evals < max_evals && distance <= max_distance {
            if let Some(max_score) = self.params.max_score {
                if center_score.score >= max_score {
                    log::debug!("Reached the maximum score {}", max_score);
                    break;
                }
            }

            let remaining = max_evals - evals;
            let budget = ((remaining as f64 * self.params.fraction_of_remaining).ceil() as usize)
                .clamp(1, remaining);
            let neighbours = neighbourhood(&center, distance, budget, &mut rng);
            if neighbours.is_empty() {
                break;
            }

            let scores: Vec<CompositeScore> =
                neighbours.par_iter().map(|inst| scorer.score(inst)).collect();
            let first_eval = evals;
            evals += neighbours.len();

            // ties go to the first neighbour generated
            let (best_idx, best_score) = scores
                .iter()
                .enumerate()
                .fold((0, scores[0]), |acc, (i, &s)| if s > acc.1 { (i, s) } else { acc });

            log::trace!(
                "Distance {}: {} neighbours, best {} (centre {})",
                distance,
                neighbours.len(),
                best_score,
                center_score
            );

            if best_score > center_score
                && best_score.score - center_score.score >= self.params.min_score_improvement
            {
                center = neighbours[best_idx].clone();
                center_score = best_score;
                best_eval = first_eval + best_idx + 1;
                distance = 1;
                log::debug!("Moved to {:?} scored {} at evaluation {}", center, center_score, best_eval);
            } else if self.params.widen_search && distance < max_distance {
                distance += 1;
            } else {
                break;
            }
        }

        HillClimbingOutcome {
            best: Some((center, center_score)),
            evals,
            best_eval,
        }
    }
}

/// Instances at exactly `distance` bit flips from `center`; at most `budget`
/// of them, sampled when there are more.
fn neighbourhood(center: &Instance, distance: usize, budget: usize, rng: &mut StdRng) -> Vec<Instance> {
    let width = center.width();
    let total = n_choose_k(width, distance);
    if total == 0 {
        return Vec::new();
    }

    let mut neighbours = Vec::with_capacity(total.min(budget));
    if total <= budget {
        for_each_combination(width, distance, |flips| neighbours.push(center.flipped(flips)));
        return neighbours;
    }

    let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(budget);
    while neighbours.len() < budget {
        let mut flips = sample(rng, width, distance).into_vec();
        flips.sort_unstable();
        if seen.insert(flips.clone()) {
            neighbours.push(center.flipped(&flips));
        }
    }
    neighbours
}
