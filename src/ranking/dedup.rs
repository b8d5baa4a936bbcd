use std::collections::HashMap;

use crate::models::Candidate;

/// Collapse a candidate list to one entry per item id, keeping the maximum
/// score on collision (an item can match through several underlying source
/// categories). First-occurrence order is preserved; re-running on the
/// output is a no-op.
pub fn dedup_max(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(candidates.len());
    let mut merged: Vec<Candidate> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match index.get(&candidate.id) {
            Some(&i) => {
                if candidate.score > merged[i].score {
                    merged[i] = candidate;
                }
            }
            None => {
                index.insert(candidate.id.clone(), merged.len());
                merged.push(candidate);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(dedup_max(Vec::new()).is_empty());
    }

    #[test]
    fn test_unique_ids_pass_through() {
        let input = vec![Candidate::new("a", 0.9), Candidate::new("b", 0.5)];
        let out = dedup_max(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "a");
        assert_eq!(out[1].id, "b");
    }

    #[test]
    fn test_duplicate_keeps_max_score() {
        let input = vec![
            Candidate::new("a", 0.3),
            Candidate::new("b", 0.5),
            Candidate::new("a", 0.8),
        ];
        let out = dedup_max(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "a");
        assert_eq!(out[0].score, 0.8);
    }

    #[test]
    fn test_duplicate_lower_score_ignored() {
        let input = vec![Candidate::new("a", 0.8), Candidate::new("a", 0.3)];
        let out = dedup_max(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].score, 0.8);
    }

    #[test]
    fn test_winning_duplicate_carries_its_payload() {
        let mut low = Candidate::new("a", 0.2);
        low.payload = serde_json::json!({"source": "texture"});
        let mut high = Candidate::new("a", 0.9);
        high.payload = serde_json::json!({"source": "palette"});

        let out = dedup_max(vec![low, high]);
        assert_eq!(out[0].payload["source"], "palette");
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            Candidate::new("a", 0.3),
            Candidate::new("b", 0.5),
            Candidate::new("a", 0.8),
            Candidate::new("c", 0.1),
        ];
        let once = dedup_max(input);
        let twice = dedup_max(once.clone());
        assert_eq!(once.len(), twice.len());
        for (x, y) in once.iter().zip(twice.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.score, y.score);
        }
    }
}
