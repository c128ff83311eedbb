//! Text relevance scoring: stop-word removal, TF-IDF weighting and cosine similarity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

// Single-character tokens are not indexed
static TERM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid term regex"));

// Fused forms the Treebank tokenizer splits into two words
static CONTRACTIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(can)(not)\b",
        r"\b(gim)(me)\b",
        r"\b(gon)(na)\b",
        r"\b(got)(ta)\b",
        r"\b(lem)(me)\b",
        r"\b(wan)(na)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid contraction regex"))
    .collect()
});

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Lowercases `text`, splits it into words and drops English stop words.
///
/// The surviving words are joined with single spaces.
pub fn preprocess(text: &str) -> String {
    let mut lowered = text.to_lowercase();
    for contraction in CONTRACTIONS.iter() {
        lowered = contraction.replace_all(&lowered, "$1 $2").into_owned();
    }
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    TERM_REGEX.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// TF-IDF model fitted on a fixed set of documents
///
/// Uses raw term counts, smoothed inverse document frequency
/// (`ln((1 + n) / (1 + df)) + 1`) and L2-normalised vectors.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let unique: HashSet<String> = terms(document.as_ref()).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Weights `text` against the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                vector[index] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|w| *w /= norm);
        }
        vector
    }
}

/// Cosine of the angle between `a` and `b`; zero when either is a zero vector.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Scores every document against `query`, in document order.
pub fn score_documents<S: AsRef<str>>(query: &str, documents: &[S]) -> Vec<f64> {
    let vectorizer = TfidfVectorizer::fit(documents);
    let query_vector = vectorizer.transform(query);

    documents
        .iter()
        .map(|document| {
            cosine_similarity(&query_vector, &vectorizer.transform(document.as_ref()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_removes_stop_words() {
        assert_eq!(
            preprocess("The Lord of the Rings and the Return of the King"),
            "lord rings return king"
        );
    }

    #[test]
    fn test_preprocess_strips_punctuation() {
        assert_eq!(preprocess("Space, opera! (Epic)"), "space opera epic");
    }

    #[test]
    fn test_preprocess_splits_fused_words() {
        assert_eq!(preprocess("I cannot sleep"), "sleep");
        assert_eq!(preprocess("Gonna read"), "gon na read");
        assert_eq!(preprocess("Cannonball run"), "cannonball run");
    }

    #[test]
    fn test_preprocess_only_stop_words_is_empty() {
        assert_eq!(preprocess("The and of"), "");
    }

    #[test]
    fn test_idf_weights_rare_terms_higher() {
        let vectorizer = TfidfVectorizer::fit(&["dragon castle", "dragon forest", "dragon sea"]);
        assert_eq!(vectorizer.vocabulary_len(), 4);

        let vector = vectorizer.transform("dragon castle");
        let dragon = vector[vectorizer.vocabulary["dragon"]];
        let castle = vector[vectorizer.vocabulary["castle"]];
        assert!(castle > dragon);

        let norm: f64 = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let vectorizer = TfidfVectorizer::fit(&["dragon castle"]);
        let vector = vectorizer.transform("submarine");
        assert!(vector.iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-9);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_score_documents_ranks_matching_document_first() {
        let documents = [
            "gardening tomatoes soil",
            "dragon wizard magic quest",
            "wizard school",
        ];
        let scores = score_documents("dragon wizard", &documents);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > scores[2]);
        assert!(scores[2] > 0.0);
    }

    #[test]
    fn test_score_documents_with_empty_corpus_terms() {
        let scores = score_documents("dragon", &["", "a"]);
        assert_eq!(scores, vec![0.0, 0.0]);
    }
}
