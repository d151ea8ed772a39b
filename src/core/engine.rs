use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::types::{ScoredSentence, SentenceId};
use crate::index::model::TfIdfModel;
use crate::search::Ranker;
use crate::segment::SentenceSegmenter;

/// Ties the pipeline together: segmentation, analysis, vectorization and
/// ranking, configured once at construction.
pub struct Engine {
    config: Config,
    segmenter: SentenceSegmenter,
    analyzer: Analyzer,
    ranker: Ranker,
}

/// Read-only index over one document. Built once per document; any number
/// of queries may read it afterwards.
pub struct SentenceIndex {
    pub sentences: Vec<String>,
    pub model: TfIdfModel,
}

impl SentenceIndex {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Config::default())
    }
}

impl Engine {
    pub fn new(config: Config) -> Self {
        let segmenter = SentenceSegmenter::spanish().with_extra(&config.extra_abbreviations);
        let analyzer = Analyzer::spanish_with_extra_stopwords(&config.extra_stopwords);
        let ranker = Ranker::new(config.score_threshold);

        Engine {
            config,
            segmenter,
            analyzer,
            ranker,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segments the document, keeps sentences longer than the configured
    /// minimum, and fits the TF-IDF model over their token sequences.
    pub fn index(&self, text: &str) -> SentenceIndex {
        let sentences: Vec<String> = self
            .segmenter
            .segment(text)
            .into_iter()
            .filter(|s| s.chars().count() > self.config.min_sentence_chars)
            .collect();

        let units: Vec<_> = sentences.iter().map(|s| self.analyzer.analyze(s)).collect();
        let model = TfIdfModel::fit(&units);

        tracing::info!(
            sentences = sentences.len(),
            vocabulary = model.vocabulary.len(),
            "indexed document"
        );

        SentenceIndex { sentences, model }
    }

    /// Answers one query against an index. Returns `None` when no sentence
    /// scores strictly above the relevance threshold.
    pub fn answer(&self, index: &SentenceIndex, query: &str) -> Option<ScoredSentence> {
        let tokens = self.analyzer.analyze(query.trim());
        let query_vector = index.model.query_vector(&tokens);

        let result = self
            .ranker
            .rank(&query_vector, &index.model.vectors)
            .map(|(i, score)| ScoredSentence {
                id: SentenceId::new(i),
                score,
                text: index.sentences[i].clone(),
            });

        tracing::debug!(
            query_tokens = tokens.len(),
            matched = result.is_some(),
            "ranked query"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "El contrato establece un plazo de garantía de dos años. \
        La garantía cubre defectos de fabricación en componentes electrónicos. \
        El vendedor debe entregar el producto en un plazo de treinta días. \
        Sí. \
        El comprador puede rescindir el contrato por incumplimiento grave.";

    #[test]
    fn short_sentences_are_not_indexed() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);
        // "Sí" falls under the minimum length; four sentences remain.
        assert_eq!(index.len(), 4);
        assert!(index.sentences.iter().all(|s| s.chars().count() > 20));
    }

    #[test]
    fn query_matching_one_sentence_retrieves_it() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);

        let answer = engine
            .answer(&index, "¿Qué defectos de fabricación cubre?")
            .expect("a relevant sentence");
        assert_eq!(answer.id.value(), 1);
        assert!(answer.text.contains("defectos de fabricación"));
        assert!(answer.score > 0.2);
    }

    #[test]
    fn query_identical_to_a_sentence_scores_highest() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);

        let target = index.sentences[2].clone();
        let answer = engine.answer(&index, &target).expect("an exact match");
        assert_eq!(answer.id.value(), 2);
        assert!(answer.score > 0.99);
    }

    #[test]
    fn out_of_vocabulary_query_has_no_answer() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);
        assert!(engine.answer(&index, "astronauta espacial").is_none());
    }

    #[test]
    fn stopword_only_query_has_no_answer() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);
        assert!(engine.answer(&index, "el la de y que").is_none());
    }

    #[test]
    fn empty_document_yields_empty_index_and_no_answers() {
        let engine = Engine::default();
        let index = engine.index("");
        assert!(index.is_empty());
        assert!(engine.answer(&index, "¿Qué plazo de garantía hay?").is_none());
    }

    #[test]
    fn surrounding_query_whitespace_is_ignored() {
        let engine = Engine::default();
        let index = engine.index(DOCUMENT);

        let bare = engine.answer(&index, "¿Qué defectos de fabricación cubre?");
        let padded = engine.answer(&index, "  ¿Qué defectos de fabricación cubre?\n");
        assert_eq!(
            bare.map(|r| r.id),
            padded.map(|r| r.id)
        );
    }
}
