//! Ranker - scores a candidate list on a bounded worker pool

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use super::results::{filter_and_sort, RankedResult};
use super::scorer::{fold, Scorer};
use super::{Score, SCORE_MIN};
use crate::config::EngineConfig;
use crate::error::Result;

/// Fuzzy ranking engine.
///
/// Owns a dedicated pool of `pool_size` worker threads, so at most that many
/// candidates are being scored at any moment. Each `rank` call blocks until
/// every candidate has a score. `Ranker` is `Send + Sync`; concurrent calls
/// share the pool.
pub struct Ranker {
    config: EngineConfig,
    scorer: Scorer,
    pool: ThreadPool,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("config", &self.config)
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

impl Ranker {
    /// Validate `config` and start the worker pool
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.pool_size)
            .thread_name(|i| format!("rfc-rank-{}", i))
            .build()?;

        debug!(pool_size = config.pool_size, "ranker pool started");

        Ok(Self {
            scorer: Scorer::new(&config),
            config,
            pool,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a single candidate against `query`
    pub fn score(&self, query: &str, candidate: &str) -> Score {
        self.scorer.score(query, candidate)
    }

    /// Matching candidates, best first. Ties keep their input order.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|r| r.candidate)
            .collect()
    }

    /// Like [`rank`](Self::rank), keeping each survivor's score and input index
    pub fn rank_scored<S>(&self, query: &str, candidates: &[S]) -> Vec<RankedResult>
    where
        S: AsRef<str> + Sync,
    {
        if query.is_empty() {
            return Vec::new();
        }

        let pass = Pass::new(&self.scorer, query, self.config.deadline());
        let scored: Vec<RankedResult> = self.pool.install(|| {
            candidates
                .par_iter()
                .enumerate()
                .map(|(index, candidate)| pass.score_one(index, candidate.as_ref()))
                .collect()
        });

        pass.finish(scored)
    }
}

/// Score every candidate on the calling thread.
///
/// Produces the same output as [`Ranker::rank_scored`] with the same config.
pub(crate) fn rank_sequential<S>(
    config: &EngineConfig,
    query: &str,
    candidates: &[S],
) -> Vec<RankedResult>
where
    S: AsRef<str>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let scorer = Scorer::new(config);
    let pass = Pass::new(&scorer, query, config.deadline());
    let scored = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| pass.score_one(index, candidate.as_ref()))
        .collect();

    pass.finish(scored)
}

/// State shared by every task of one ranking call
struct Pass<'a> {
    scorer: &'a Scorer,
    query_lower: Vec<char>,
    started: Instant,
    deadline: Option<Duration>,
    skipped: AtomicUsize,
}

impl<'a> Pass<'a> {
    fn new(scorer: &'a Scorer, query: &str, deadline: Option<Duration>) -> Self {
        Self {
            scorer,
            query_lower: query.chars().map(fold).collect(),
            started: Instant::now(),
            deadline,
            skipped: AtomicUsize::new(0),
        }
    }

    fn score_one(&self, index: usize, candidate: &str) -> RankedResult {
        if let Some(deadline) = self.deadline {
            if self.started.elapsed() >= deadline {
                self.skipped.fetch_add(1, Ordering::Relaxed);
                return RankedResult::new(index, candidate.to_string(), SCORE_MIN);
            }
        }

        let chars: Vec<char> = candidate.chars().collect();
        let score = self.scorer.score_chars(&self.query_lower, &chars);
        RankedResult::new(index, candidate.to_string(), score)
    }

    fn finish(self, scored: Vec<RankedResult>) -> Vec<RankedResult> {
        let total = scored.len();
        let skipped = self.skipped.into_inner();
        if skipped > 0 {
            warn!(skipped, total, "deadline reached, unscored candidates excluded");
        }

        let ranked = filter_and_sort(scored);
        debug!(
            candidates = total,
            matched = ranked.len(),
            elapsed_us = self.started.elapsed().as_micros() as u64,
            "ranked candidates"
        );
        ranked
    }
}

fn default_ranker() -> Option<&'static Ranker> {
    static DEFAULT: OnceLock<Option<Ranker>> = OnceLock::new();

    DEFAULT
        .get_or_init(|| match Ranker::new(EngineConfig::default()) {
            Ok(ranker) => Some(ranker),
            Err(e) => {
                warn!(error = %e, "worker pool unavailable, ranking on caller thread");
                None
            }
        })
        .as_ref()
}

/// Rank `candidates` against `query` with the default config.
///
/// Returns an empty list for an empty query.
pub fn rank<S>(query: &str, candidates: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let ranked = match default_ranker() {
        Some(ranker) => ranker.rank_scored(query, candidates),
        None => rank_sequential(&EngineConfig::default(), query, candidates),
    };
    ranked.into_iter().map(|r| r.candidate).collect()
}

/// Score one candidate with the default weights
pub fn score(query: &str, candidate: &str) -> Score {
    Scorer::default().score(query, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::SCORE_MAX;
    use pretty_assertions::assert_eq;

    fn ranker(pool_size: usize) -> Ranker {
        Ranker::new(EngineConfig::default().with_pool_size(pool_size)).unwrap()
    }

    fn rfc_names(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("rfc{}", i)).collect()
    }

    #[test]
    fn test_round_trip_scenarios() {
        let r = ranker(20);
        assert!(r.rank("", &["a", "b"]).is_empty());
        assert!(r.rank("zz", &["abc"]).is_empty());
        assert_eq!(r.rank("ab", &["xaybz", "ab"]), vec!["ab", "xaybz"]);
    }

    #[test]
    fn test_consecutive_outranks_gap() {
        let r = ranker(20);
        assert_eq!(r.rank("ab", &["acbd", "ab_cd"]), vec!["ab_cd", "acbd"]);
    }

    #[test]
    fn test_boundary_bonus_ranking() {
        let r = ranker(20);
        assert_eq!(
            r.rank("f", &["myfile", "MyFile", "my_file"]),
            vec!["my_file", "MyFile", "myfile"]
        );
    }

    #[test]
    fn test_same_length_always_first() {
        let r = ranker(20);
        let ranked = r.rank_scored("abc", &["abcd", "xyz", "zzzz"]);
        assert_eq!(ranked[0].candidate, "xyz");
        assert_eq!(ranked[0].score, SCORE_MAX);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_one_result_per_candidate_before_filtering() {
        let r = ranker(3);
        let names = rfc_names(50);
        let ranked = r.rank_scored("rfc", &names);
        // Every candidate matches, so nothing is filtered
        assert_eq!(ranked.len(), names.len());
        let mut indices: Vec<usize> = ranked.iter().map(|x| x.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..names.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_deterministic_under_concurrency() {
        let mut names = rfc_names(500);
        names.reverse();

        // Scores only depend on length here; ties keep input order
        let mut expected = names.clone();
        expected.sort_by_key(|s| s.len());

        let r = ranker(20);
        for _ in 0..10 {
            assert_eq!(r.rank("fc", &names), expected);
        }
    }

    #[test]
    fn test_pool_size_does_not_change_output() {
        let names = vec![
            "rfc2616::Hypertext Transfer Protocol -- HTTP-1.1",
            "rfc7230::HTTP-1.1 Message Syntax and Routing",
            "rfc793::Transmission Control Protocol",
            "rfc9000::QUIC",
            "rfc1034::Domain names - concepts and facilities",
        ];
        let single = ranker(1).rank_scored("http", &names);
        let many = ranker(20).rank_scored("http", &names);
        assert_eq!(single, many);
        assert_eq!(
            rank_sequential(&EngineConfig::default(), "http", &names),
            many
        );
    }

    #[test]
    fn test_zero_deadline_excludes_everything() {
        let config = EngineConfig::default().with_deadline(Duration::ZERO);
        let r = Ranker::new(config.clone()).unwrap();
        assert!(r.rank("rfc", &rfc_names(20)).is_empty());
        assert!(rank_sequential(&config, "rfc", &rfc_names(20)).is_empty());
    }

    #[test]
    fn test_generous_deadline_scores_everything() {
        let config = EngineConfig::default().with_deadline(Duration::from_secs(3600));
        let r = Ranker::new(config).unwrap();
        assert_eq!(r.rank("rfc", &rfc_names(20)).len(), 20);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Ranker::new(EngineConfig::default().with_pool_size(0)).is_err());
    }

    #[test]
    fn test_free_functions_use_defaults() {
        assert_eq!(rank("ab", &["xaybz", "ab"]), vec!["ab", "xaybz"]);
        assert_eq!(score("abc", "xyz"), SCORE_MAX);
        assert_eq!(score("", "abc"), SCORE_MIN);
    }

    #[test]
    fn test_ranker_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ranker>();

        let r = ranker(4);
        let names = rfc_names(100);
        let expected = r.rank("9", &names);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(r.rank("9", &names), expected));
            }
        });
    }
}
