use crate::scoring::cosine;

/// Top-1 selection over document vectors with a relevance threshold.
///
/// Selection is a single linear scan; an incumbent is replaced only by a
/// strictly greater score, so equal scores keep the earliest vector. The
/// winner is reported only when its score strictly exceeds the threshold.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    pub threshold: f32,
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker { threshold: 0.2 }
    }
}

impl Ranker {
    pub fn new(threshold: f32) -> Self {
        Ranker { threshold }
    }

    pub fn rank(&self, query: &[f32], vectors: &[Vec<f32>]) -> Option<(usize, f32)> {
        let (index, score) = best_match(vectors.iter().map(|v| cosine(query, v)))?;
        if score > self.threshold {
            Some((index, score))
        } else {
            None
        }
    }
}

/// Linear scan for the highest score; ties keep the earliest index.
fn best_match(scores: impl IntoIterator<Item = f32>) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, incumbent)) if score <= incumbent => {}
            _ => best = Some((index, score)),
        }
    }
    best
}
