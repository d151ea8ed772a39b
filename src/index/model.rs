use std::collections::HashSet;

use crate::analysis::token::Token;
use crate::index::vocabulary::Vocabulary;

/// TF-IDF representation of a set of token sequences over a shared
/// vocabulary.
///
/// Every stored vector is TF-IDF weighted and L2-normalized, or all-zero
/// when its unit had no in-vocabulary tokens. The vocabulary, document
/// frequencies and document count are fixed at fit time; query vectors are
/// projected through them without mutating anything.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    pub vocabulary: Vocabulary,
    pub doc_frequency: Vec<usize>,
    pub doc_count: usize,
    pub vectors: Vec<Vec<f32>>,
}

impl TfIdfModel {
    pub fn fit(units: &[Vec<Token>]) -> Self {
        let vocabulary = Vocabulary::build(units);
        let doc_count = units.len();

        let mut doc_frequency = vec![0usize; vocabulary.len()];
        let mut vectors = Vec::with_capacity(doc_count);

        for unit in units {
            let mut vector = vec![0.0f32; vocabulary.len()];
            let mut seen = HashSet::new();
            for token in unit {
                if let Some(id) = vocabulary.get(&token.text) {
                    vector[id] += 1.0;
                    seen.insert(id);
                }
            }
            // Document frequency counts units, not occurrences.
            for id in seen {
                doc_frequency[id] += 1;
            }
            vectors.push(vector);
        }

        for vector in &mut vectors {
            apply_idf(vector, doc_count, &doc_frequency);
            l2_normalize(vector);
        }

        TfIdfModel {
            vocabulary,
            doc_frequency,
            doc_count,
            vectors,
        }
    }

    /// Projects query tokens through the frozen vocabulary and weighting.
    /// Out-of-vocabulary tokens are dropped silently.
    pub fn query_vector(&self, tokens: &[Token]) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokens {
            if let Some(id) = self.vocabulary.get(&token.text) {
                vector[id] += 1.0;
            }
        }
        apply_idf(&mut vector, self.doc_count, &self.doc_frequency);
        l2_normalize(&mut vector);
        vector
    }
}

/// Multiplies every non-zero slot by `ln(doc_count / (1 + df))`. Zero slots
/// stay untouched. A term present in every unit weighs `ln(N/(N+1))`,
/// slightly negative.
fn apply_idf(vector: &mut [f32], doc_count: usize, doc_frequency: &[usize]) {
    for (slot, df) in vector.iter_mut().zip(doc_frequency) {
        if *slot > 0.0 {
            *slot *= (doc_count as f32 / (1 + df) as f32).ln();
        }
    }
}

/// Scales the vector to unit Euclidean length; an exactly-zero norm leaves
/// the zero vector unchanged.
fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for slot in vector.iter_mut() {
        *slot /= norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(w.to_string(), i as u32, 0))
            .collect()
    }

    fn norm(vector: &[f32]) -> f32 {
        vector.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    #[test]
    fn fitted_vectors_have_unit_norm_or_are_zero() {
        let units = vec![
            unit(&["plazo", "garantía"]),
            unit(&["defecto", "fabricación", "defecto"]),
            unit(&[]),
        ];
        let model = TfIdfModel::fit(&units);

        for vector in &model.vectors {
            let n = norm(vector);
            assert!(n == 0.0 || (n - 1.0).abs() < 1e-5, "norm was {}", n);
        }
        // The empty unit contributes the zero vector and no document
        // frequency counts: every term here occurs in exactly one unit.
        assert_eq!(norm(&model.vectors[2]), 0.0);
        assert!(model.doc_frequency.iter().all(|&df| df == 1));
    }

    #[test]
    fn document_frequency_counts_units_once_each() {
        let units = vec![
            unit(&["plazo", "plazo", "plazo"]),
            unit(&["plazo", "garantía"]),
        ];
        let model = TfIdfModel::fit(&units);

        let plazo = model.vocabulary.get("plazo").unwrap();
        let garantia = model.vocabulary.get("garantía").unwrap();
        assert_eq!(model.doc_frequency[plazo], 2);
        assert_eq!(model.doc_frequency[garantia], 1);
    }

    #[test]
    fn term_counts_are_raw_occurrences_before_weighting() {
        // One unit, so IDF = ln(1/2) for every present term and the
        // three-fold repetition must survive into the ratio of slots.
        let units = vec![unit(&["plazo", "plazo", "plazo", "garantía"])];
        let model = TfIdfModel::fit(&units);

        let plazo = model.vocabulary.get("plazo").unwrap();
        let garantia = model.vocabulary.get("garantía").unwrap();
        let vector = &model.vectors[0];
        assert!((vector[plazo] / vector[garantia] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn query_vector_ignores_out_of_vocabulary_terms() {
        let units = vec![unit(&["plazo", "garantía"]), unit(&["defecto"])];
        let model = TfIdfModel::fit(&units);

        let query = model.query_vector(&unit(&["desconocido", "inexistente"]));
        assert_eq!(query.len(), model.vocabulary.len());
        assert!(query.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn query_vector_matches_fitted_vector_for_identical_unit() {
        let units = vec![unit(&["plazo", "garantía"]), unit(&["defecto", "plazo"])];
        let model = TfIdfModel::fit(&units);

        let query = model.query_vector(&unit(&["plazo", "garantía"]));
        assert_eq!(query, model.vectors[0]);
    }

    #[test]
    fn empty_fit_produces_an_empty_model() {
        let model = TfIdfModel::fit(&[]);
        assert_eq!(model.doc_count, 0);
        assert!(model.vectors.is_empty());
        assert!(model.vocabulary.is_empty());
        assert!(model.query_vector(&unit(&["plazo"])).is_empty());
    }
}
