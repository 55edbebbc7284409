use crate::{ChainedTable, HashStrategy, ProbingTable, WordTable};

/// Deterministic pseudo-words: base-26 spellings of `i` with a suffix.
fn words(n: u32) -> Vec<String> {
    (0..n)
        .map(|mut i| {
            let mut word = String::new();
            loop {
                word.push(char::from(b'a' + u8::try_from(i % 26).unwrap()));
                i /= 26;
                if i == 0 {
                    break;
                }
            }
            word.push_str("ing");
            word
        })
        .collect()
}

/// A dictionary-sized load: every inserted word is found, nothing else is.
#[test]
fn ten_thousand_words_all_tables() {
    let words = words(10_000);
    for strategy in HashStrategy::ALL {
        let mut chained = ChainedTable::with_strategy(strategy);
        let mut probing = ProbingTable::with_strategy(strategy);
        for (line, word) in (1..).zip(&words) {
            chained.insert(word, line).unwrap();
            probing.insert(word, line).unwrap();
        }
        assert_eq!(chained.len(), 10_000);
        assert_eq!(probing.len(), 10_000);

        for (line, word) in (1..).zip(&words) {
            assert_eq!(chained.search(word).line, Some(line), "{strategy} chained {word}");
            assert_eq!(probing.search(word).line, Some(line), "{strategy} probing {word}");
        }
        for word in ["", "zzzzzzzzzz", "ING", "a-missing-word"] {
            assert!(!chained.contains(word), "{strategy} chained {word}");
            assert!(!probing.contains(word), "{strategy} probing {word}");
        }
    }
}

/// Chain hits cost their 1-based position; misses cost the whole bucket.
#[test]
fn chained_costs_match_bucket_layout() {
    let words = words(3000);
    let mut table = ChainedTable::new(97, HashStrategy::Full);
    for word in &words {
        table.push(word, 1);
    }
    let total: usize = (0..97).map(|b| table.bucket_len(b)).sum();
    assert_eq!(total, 3000);

    for word in words.iter().step_by(37) {
        let bucket = HashStrategy::Full.index(word, 97);
        let cost = table.search(word).comparisons;
        assert!((1..=table.bucket_len(bucket)).contains(&cost));
    }
    let miss = "not-in-the-table";
    let bucket = HashStrategy::Full.index(miss, 97);
    assert_eq!(table.search(miss).comparisons, table.bucket_len(bucket));
}

/// Filling a probing table completely keeps every word reachable and
/// bounds a miss by the capacity.
#[test]
fn probing_filled_to_capacity() {
    let words = words(500);
    let mut table = ProbingTable::new(500, HashStrategy::Stride);
    for word in &words {
        table.insert(word, 1).unwrap();
    }
    assert!(table.insert("overflow", 1).is_err());
    for word in &words {
        let lookup = table.search(word);
        assert!(lookup.is_found());
        assert!(lookup.comparisons <= 500);
    }
    assert_eq!(table.search("absent").comparisons, 500);
    assert_eq!(table.stats().longest_run, 500);
}
