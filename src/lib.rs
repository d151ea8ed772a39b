pub mod core;
pub mod provider;
pub mod segment;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;

/*
┌─────────────────────────────────────────────────────────────────────────────┐
│                        RESPONDEX STRUCT ARCHITECTURE                        │
└─────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── CORE LAYER ───────────────────────────────┐
│                                                                             │
│  ┌────────────────────────────────────────────────────────────────────┐     │
│  │                           struct Engine                            │     │
│  │  ┌──────────────────────────────────────────────────────────────┐  │     │
│  │  │ config: Config               // Thresholds and word lists    │  │     │
│  │  │ segmenter: SentenceSegmenter // Abbreviation-aware splitting │  │     │
│  │  │ analyzer: Analyzer           // Spanish analysis pipeline    │  │     │
│  │  │ ranker: Ranker               // Top-1 selection + threshold  │  │     │
│  │  └──────────────────────────────────────────────────────────────┘  │     │
│  └────────────────────────────────────────────────────────────────────┘     │
│                                                                             │
│  ┌──────────────────────┐  ┌──────────────────┐  ┌──────────────────────┐   │
│  │ struct Config        │  │ struct SentenceId│  │ struct ScoredSentence│   │
│  │ • min_sentence_chars │  │ • 0: usize       │  │ • id: SentenceId     │   │
│  │ • score_threshold    │  └──────────────────┘  │ • score: f32         │   │
│  │ • extra_stopwords    │                        │ • text: String       │   │
│  │ • extra_abbreviations│                        └──────────────────────┘   │
│  └──────────────────────┘                                                   │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── ANALYSIS LAYER ─────────────────────────────┐
│                                                                             │
│  ┌────────────────────────┐  ┌──────────────────────┐  ┌─────────────────┐  │
│  │ struct Analyzer        │  │ struct Token         │  │ trait Tokenizer │  │
│  │ • tokenizer: Box<dyn>  │  │ • text: String       │  │ • tokenize()    │  │
│  │ • filters: Vec<Box>    │  │ • position: u32      │  │ Alphabet-       │  │
│  │ • analyze()            │  │ • offset: usize      │  │   Tokenizer     │  │
│  └────────────────────────┘  └──────────────────────┘  └─────────────────┘  │
│                                                                             │
│  ┌────────────────────────┐  ┌──────────────────────┐  ┌─────────────────┐  │
│  │ trait TokenFilter      │  │ struct StopWordFilter│  │ struct          │  │
│  │ • filter()             │  │ • stop_words: Set    │  │   StemmerFilter │  │
│  └────────────────────────┘  └──────────────────────┘  └─────────────────┘  │
│                                                                             │
│  ┌────────────────────────────────────────────────────────────────────┐     │
│  │ struct SentenceSegmenter                                           │     │
│  │ • abbreviations: HashSet<String>   // "art.", "etc.", "sra.", ...  │     │
│  │ • segment(text) -> Vec<String>                                     │     │
│  └────────────────────────────────────────────────────────────────────┘     │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── INDEXING LAYER ─────────────────────────────┐
│                                                                             │
│  ┌────────────────────────────────────────────────────────────────────┐     │
│  │                         struct TfIdfModel                          │     │
│  │  ┌──────────────────────────────────────────────────────────────┐  │     │
│  │  │ vocabulary: Vocabulary       // term -> dense id, frozen     │  │     │
│  │  │ doc_frequency: Vec<usize>    // units containing each term   │  │     │
│  │  │ doc_count: usize             // indexed units                │  │     │
│  │  │ vectors: Vec<Vec<f32>>       // TF-IDF, L2-normalized        │  │     │
│  │  └──────────────────────────────────────────────────────────────┘  │     │
│  └────────────────────────────────────────────────────────────────────┘     │
│                                                                             │
│  ┌──────────────────────┐          ┌───────────────────────────────────┐    │
│  │ struct Vocabulary    │          │ struct SentenceIndex              │    │
│  │ • index: HashMap     │          │ • sentences: Vec<String>          │    │
│  │ • terms: Vec<String> │          │ • model: TfIdfModel               │    │
│  └──────────────────────┘          └───────────────────────────────────┘    │
└─────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── SEARCH LAYER ──────────────────────────────┐
│                                                                             │
│  ┌──────────────────────┐  ┌───────────────────────────────────────────┐    │
│  │ struct Ranker        │  │ fn cosine(a, b) -> f32                    │    │
│  │ • threshold: f32     │  │ // dot / (|a| * |b|), 0.0 on zero norm    │    │
│  │ • rank() -> Option   │  └───────────────────────────────────────────┘    │
│  └──────────────────────┘                                                    │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── RELATIONSHIPS ──────────────────────────────┐
│                                                                             │
│  TextProvider ──extracts──> String ──segments_into──> Vec<String>           │
│                                                                             │
│  Engine ──owns──> SentenceSegmenter ──feeds──> Analyzer ──feeds──> TfIdfModel│
│     │                                                                       │
│     └──answers_with──> Ranker ──scores_via──> cosine ──over──> vectors      │
│                                                                             │
│  SentenceIndex is immutable after Engine::index; Engine::answer only reads. │
└─────────────────────────────────────────────────────────────────────────────┘
*/
