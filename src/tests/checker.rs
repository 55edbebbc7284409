use crate::{
    CheckerConfig, Dictionary, PasswordChecker, TableError, TableKind, Verdict, Weakness,
    WordTable,
};

fn checker() -> PasswordChecker {
    PasswordChecker::with_dictionary(&Dictionary::from_words([
        "account", "password", "the", "über",
    ]))
}

#[test]
fn too_short_regardless_of_dictionary() {
    let checker = checker();
    assert_eq!(
        checker.evaluate("ab3"),
        Verdict::Weak(Weakness::TooShort {
            length: 3,
            minimum: 8
        })
    );
    let empty = PasswordChecker::with_dictionary(&Dictionary::new());
    assert!(!empty.is_strong("Zq!9#x"));
}

#[test]
fn length_counts_characters_not_bytes() {
    let checker = checker();
    // 7 characters, 14 bytes.
    assert!(!checker.is_strong("ääääääx"));
    assert!(checker.is_strong("äääääääx"));
}

#[test]
fn dictionary_word_is_weak() {
    let checker = checker();
    assert_eq!(checker.evaluate("password"), Verdict::Weak(Weakness::DictionaryWord));
    assert_eq!(checker.evaluate("PassWord"), Verdict::Weak(Weakness::DictionaryWord));
}

#[test]
fn word_followed_by_digit_is_weak() {
    let checker = checker();
    assert_eq!(
        checker.evaluate("account8"),
        Verdict::Weak(Weakness::WordWithDigit {
            prefix: "account".to_owned()
        })
    );
    assert_eq!(
        checker.evaluate("Password123"),
        Verdict::Weak(Weakness::WordWithDigit {
            prefix: "password".to_owned()
        })
    );
}

#[test]
fn any_digit_position_is_checked() {
    let checker = checker();
    // Prefix before the first digit is "the".
    assert_eq!(
        checker.evaluate("the1secret"),
        Verdict::Weak(Weakness::WordWithDigit {
            prefix: "the".to_owned()
        })
    );
    // Prefixes always start at index 0; "account" here is preceded by "xy".
    assert!(checker.is_strong("xyaccount7"));
}

#[test]
fn multibyte_prefix() {
    let checker = checker();
    assert_eq!(
        checker.evaluate("Über2024!"),
        Verdict::Weak(Weakness::WordWithDigit {
            prefix: "über".to_owned()
        })
    );
}

#[test]
fn strong_passwords() {
    let checker = checker();
    assert!(checker.is_strong("accountability"));
    assert!(checker.is_strong("X9!vQ#mWz"));
    assert!(checker.is_strong("1account"));
    for password in ["9a$D#qW7!uX&Lv3zT", "B@k45*W!c$Y7#zR9P", "X$8vQ!mW#3Dz&Yr4K5"] {
        assert!(checker.is_strong(password), "{password} should be strong");
    }
}

#[test]
fn empty_dictionary_accepts_long_passwords() {
    let checker = PasswordChecker::with_dictionary(&Dictionary::new());
    assert!(checker.is_strong("password"));
    assert!(checker.is_strong("account8"));
}

#[test]
fn custom_min_length() {
    let config = CheckerConfig::default().with_min_length(4);
    let checker = PasswordChecker::new(config, &Dictionary::from_words(["cat"]));
    assert!(checker.is_strong("dogs"));
    assert!(!checker.is_strong("cat1"));
    assert!(!checker.is_strong("dog"));
}

#[test]
fn all_tables_populated_identically() {
    let checker = checker();
    for kind in TableKind::ALL {
        let table = checker.tables().table(kind);
        assert_eq!(table.len(), 4, "{kind}");
        assert_eq!(table.strategy(), kind.strategy());
        assert_eq!(table.search("account").line, Some(1), "{kind}");
        assert_eq!(table.search("über").line, Some(4), "{kind}");
        assert!(!table.contains("Account"), "{kind}");
    }
}

#[test]
fn probing_overflow_leaves_verdicts_intact() {
    let config = CheckerConfig::default().with_probe_capacity(2);
    let dictionary = Dictionary::from_words(["alpha", "beta", "gamma"]);
    let mut tables = crate::TableSet::new(&config);
    let failures = tables.populate(&dictionary);
    assert_eq!(
        failures,
        vec![
            (TableKind::ProbingStride, TableError::CapacityExceeded { capacity: 2 }),
            (TableKind::ProbingFull, TableError::CapacityExceeded { capacity: 2 }),
        ]
    );
    assert_eq!(tables.table(TableKind::ChainedFull).len(), 3);
    assert_eq!(tables.table(TableKind::ProbingFull).len(), 2);

    let checker = PasswordChecker::new(config, &dictionary);
    assert!(!checker.is_strong("gamma123"));
}

#[test]
fn report_counts_each_table() {
    let checker = checker();
    let report = checker.report("ACCOUNT");
    assert_eq!(
        report.verdict,
        Verdict::Weak(Weakness::TooShort {
            length: 7,
            minimum: 8
        })
    );
    // Searched lowercased: a hit costs at least one comparison everywhere.
    for kind in TableKind::ALL {
        assert!(report.comparisons_for(kind) >= 1, "{kind}");
    }
    assert_eq!(report.comparisons.map(|(kind, _)| kind), TableKind::ALL);
}

#[test]
fn report_on_empty_dictionary_costs_nothing() {
    let checker = PasswordChecker::with_dictionary(&Dictionary::new());
    let report = checker.report("whatever123");
    assert!(report.verdict.is_strong());
    for kind in TableKind::ALL {
        assert_eq!(report.comparisons_for(kind), 0);
    }
}

#[test]
fn report_is_repeatable() {
    let checker = checker();
    assert_eq!(checker.report("account8"), checker.report("account8"));
}

#[test]
fn report_display() {
    let checker = checker();
    let text = checker.report("account8").to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "=== testing password: account8 ===");
    assert_eq!(
        lines[1],
        "strong: no (dictionary word \"account\" followed by a digit)"
    );
    assert!(lines[2].starts_with("separate chaining (old hash) checks: "));
    assert!(lines[3].starts_with("separate chaining (new hash) checks: "));
    assert!(lines[4].starts_with("linear probing (old hash) checks: "));
    assert!(lines[5].starts_with("linear probing (new hash) checks: "));
    assert_eq!(lines.len(), 6);

    let strong = checker.report("accountability").to_string();
    assert!(strong.contains("strong: yes\n"));
}

#[test]
fn stats_cover_all_tables() {
    let checker = checker();
    let stats = checker.stats();
    assert_eq!(stats.map(|(kind, _)| kind), TableKind::ALL);
    for (kind, stats) in stats {
        assert_eq!(stats.entries, 4, "{kind}");
        assert!(stats.longest_run >= 1);
    }
    assert_eq!(stats[0].1.capacity, 1000);
    assert_eq!(stats[2].1.capacity, 20_000);
}
