//! Derived Statistics
//!
//! Pure functions from the problem mirror to the aggregate views:
//! summary counts, per-topic breakdown, search filtering, and the
//! newest-first ordering used by the public listing.

use std::collections::BTreeMap;

use crate::state::global::Problem;

/// Bucket for problems whose topic field is blank
const UNCATEGORIZED: &str = "Uncategorized";

/// Aggregate counts over the whole collection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub solved: usize,
    pub important: usize,
    /// solved/total * 100, 0 when the collection is empty
    pub completion_pct: f64,
}

/// Per-topic solved/total counts
#[derive(Clone, Debug, PartialEq)]
pub struct TopicStats {
    pub topic: String,
    pub total: usize,
    pub solved: usize,
}

impl TopicStats {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solved as f64 / self.total as f64 * 100.0
        }
    }
}

/// Compute the summary counts and completion percentage
pub fn summarize(problems: &[Problem]) -> Summary {
    let total = problems.len();
    let solved = problems.iter().filter(|p| p.solved).count();
    let important = problems.iter().filter(|p| p.important).count();

    let completion_pct = if total == 0 {
        0.0
    } else {
        solved as f64 / total as f64 * 100.0
    };

    Summary {
        total,
        solved,
        important,
        completion_pct,
    }
}

/// Group the collection by topic, sorted alphabetically. Every problem
/// lands in exactly one bucket; blank topics count as "Uncategorized".
pub fn topic_breakdown(problems: &[Problem]) -> Vec<TopicStats> {
    let mut buckets: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for problem in problems {
        let topic = if problem.topic.is_empty() {
            UNCATEGORIZED
        } else {
            problem.topic.as_str()
        };
        let entry = buckets.entry(topic).or_insert((0, 0));
        entry.0 += 1;
        if problem.solved {
            entry.1 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(topic, (total, solved))| TopicStats {
            topic: topic.to_string(),
            total,
            solved,
        })
        .collect()
}

/// Case-insensitive substring filter over name, topic, notes, and both
/// complexity fields. An empty query keeps everything.
pub fn filter_problems(problems: &[Problem], query: &str) -> Vec<Problem> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return problems.to_vec();
    }

    let matches = |field: Option<&str>| {
        field.is_some_and(|text| text.to_lowercase().contains(&query))
    };

    problems
        .iter()
        .filter(|p| {
            matches(Some(&p.name))
                || matches(Some(&p.topic))
                || matches(p.notes.as_deref())
                || matches(p.time_complexity.as_deref())
                || matches(p.space_complexity.as_deref())
        })
        .cloned()
        .collect()
}

/// Order problems newest-first by their added date. Unparseable dates
/// sort last.
pub fn sort_newest_first(problems: &mut [Problem]) {
    problems.sort_by_key(|p| std::cmp::Reverse(added_millis(p)));
}

fn added_millis(problem: &Problem) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&problem.added_date)
        .map(|d| d.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(name: &str, topic: &str, solved: bool) -> Problem {
        Problem {
            name: name.to_string(),
            topic: topic.to_string(),
            difficulty: "Easy".to_string(),
            solved,
            ..Problem::default()
        }
    }

    #[test]
    fn test_summary_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.completion_pct, 0.0);
    }

    #[test]
    fn test_summary_single_problem() {
        let unsolved = summarize(&[problem("Two Sum", "Arrays", false)]);
        assert_eq!(unsolved.completion_pct, 0.0);

        let solved = summarize(&[problem("Two Sum", "Arrays", true)]);
        assert_eq!(solved.total, 1);
        assert_eq!(solved.solved, 1);
        assert_eq!(solved.completion_pct, 100.0);
    }

    #[test]
    fn test_summary_partial_completion() {
        let problems: Vec<Problem> = (0..10)
            .map(|i| problem(&format!("p{}", i), "Graphs", i < 3))
            .collect();

        let summary = summarize(&problems);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.solved, 3);
        assert!((summary.completion_pct - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_counts_important() {
        let mut p = problem("Two Sum", "Arrays", false);
        p.important = true;
        let summary = summarize(&[p, problem("Three Sum", "Arrays", false)]);
        assert_eq!(summary.important, 1);
    }

    #[test]
    fn test_topic_breakdown_partitions_collection() {
        let problems = vec![
            problem("a", "Trees", true),
            problem("b", "Arrays", false),
            problem("c", "Trees", false),
            problem("d", "", true),
        ];

        let breakdown = topic_breakdown(&problems);

        let total: usize = breakdown.iter().map(|t| t.total).sum();
        assert_eq!(total, problems.len());

        let topics: Vec<&str> = breakdown.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["Arrays", "Trees", "Uncategorized"]);

        let trees = breakdown.iter().find(|t| t.topic == "Trees").unwrap();
        assert_eq!(trees.total, 2);
        assert_eq!(trees.solved, 1);
        assert_eq!(trees.percentage(), 50.0);
    }

    #[test]
    fn test_topic_breakdown_empty() {
        assert!(topic_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_filter_matches_across_fields() {
        let mut with_notes = problem("Dijkstra", "Graphs", false);
        with_notes.notes = Some("priority queue trick".to_string());
        let mut with_complexity = problem("Merge Sort", "Sorting", true);
        with_complexity.time_complexity = Some("O(n log n)".to_string());

        let problems = vec![
            problem("Two Sum", "Arrays", true),
            with_notes,
            with_complexity,
        ];

        assert_eq!(filter_problems(&problems, "two").len(), 1);
        assert_eq!(filter_problems(&problems, "GRAPHS").len(), 1);
        assert_eq!(filter_problems(&problems, "priority").len(), 1);
        assert_eq!(filter_problems(&problems, "n log n").len(), 1);
        assert_eq!(filter_problems(&problems, "").len(), 3);
        assert!(filter_problems(&problems, "zzz").is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut older = problem("a", "Arrays", false);
        older.added_date = "2024-01-01T00:00:00+00:00".to_string();
        let mut newer = problem("b", "Arrays", false);
        newer.added_date = "2024-06-01T00:00:00+00:00".to_string();

        let mut problems = vec![older, newer];
        sort_newest_first(&mut problems);

        assert_eq!(problems[0].name, "b");
        assert_eq!(problems[1].name, "a");
    }

    #[test]
    fn test_sort_unparseable_dates_last() {
        let mut dated = problem("a", "Arrays", false);
        dated.added_date = "2024-01-01T00:00:00+00:00".to_string();
        let garbled = problem("b", "Arrays", false);

        let mut problems = vec![garbled, dated];
        sort_newest_first(&mut problems);

        assert_eq!(problems[0].name, "a");
    }
}
