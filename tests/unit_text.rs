// Unit tests for text normalization.
//
// Verifies the tokenizer's hard guarantees: no stop words, no markup
// fragments, no tokens shorter than 2 characters — for any input.

use spyglass::text::Tokenizer;

// ============================================================
// clean — markup and whitespace
// ============================================================

#[test]
fn clean_strips_nested_markup() {
    let t = Tokenizer::new();
    let cleaned = t.clean("<div><h1>Grow faster</h1><p>With our platform</p></div>");
    assert_eq!(cleaned, "grow faster with our platform");
}

#[test]
fn clean_replaces_tags_with_spaces() {
    let t = Tokenizer::new();
    // Words separated only by tags must not fuse
    let cleaned = t.clean("alpha<br/>beta");
    assert_eq!(cleaned, "alpha beta");
}

#[test]
fn clean_collapses_whitespace_runs() {
    let t = Tokenizer::new();
    assert_eq!(t.clean("one\t\ttwo\n\nthree   four"), "one two three four");
}

#[test]
fn clean_lowercases() {
    let t = Tokenizer::new();
    assert_eq!(t.clean("MiXeD Case TEXT"), "mixed case text");
}

#[test]
fn clean_of_empty_is_empty() {
    let t = Tokenizer::new();
    assert_eq!(t.clean(""), "");
    assert_eq!(t.clean("   "), "");
}

// ============================================================
// tokenize — stop words and token length
// ============================================================

#[test]
fn tokenize_never_emits_stop_words() {
    let t = Tokenizer::new();
    let samples = [
        "the quick brown fox jumps over the lazy dog",
        "this is a test of what we should filter and when",
        "which results were from that campaign for an audience",
    ];
    for sample in samples {
        for token in t.tokenize(sample) {
            assert!(
                !t.is_stop_word(&token),
                "stop word '{token}' leaked from '{sample}'"
            );
        }
    }
}

#[test]
fn tokenize_never_emits_short_tokens() {
    let t = Tokenizer::new();
    for token in t.tokenize("a b c d市 hi ok xy one") {
        assert!(token.chars().count() >= 2, "token '{token}' too short");
    }
}

#[test]
fn tokenize_after_clean_never_contains_markup() {
    let t = Tokenizer::new();
    let raw = "<section data-id=\"33\">Proven <em>expertise</em> in growth</section>";
    let tokens = t.tokenize_raw(raw);
    for token in &tokens {
        assert!(
            !token.contains('<') && !token.contains('>'),
            "markup fragment in '{token}'"
        );
    }
    assert!(tokens.contains(&"proven".to_string()));
    assert!(tokens.contains(&"expertise".to_string()));
    assert!(tokens.contains(&"growth".to_string()));
}

#[test]
fn tokenize_splits_on_every_non_alphanumeric_boundary() {
    let t = Tokenizer::new();
    let tokens = t.tokenize("data-driven decisions, conversion-rate optimization");
    // Hyphenated compounds split into their parts
    assert!(tokens.contains(&"driven".to_string()));
    assert!(tokens.contains(&"optimization".to_string()));
    assert!(tokens.iter().all(|t| !t.contains('-') && !t.contains(',')));
}

#[test]
fn stop_word_only_input_tokenizes_to_nothing() {
    let t = Tokenizer::new();
    assert!(t.tokenize("the and or but for with from").is_empty());
}

#[test]
fn required_stop_words_are_all_present() {
    let t = Tokenizer::new();
    let required = [
        "the", "and", "or", "but", "for", "with", "from", "this", "that", "which", "what",
        "where", "when", "is", "are", "was", "were", "an",
    ];
    for word in required {
        assert!(t.is_stop_word(word), "'{word}' must be a stop word");
    }
}
