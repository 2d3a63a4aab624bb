//! Concurrent readers and writers sharing one dictionary

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use spellcheck::spelling::Dictionary;

const WORDS: &[&str] = &[
    "apple", "banana", "cherry", "grape", "lemon", "mango", "melon", "orange", "peach", "pear",
    "plum", "berry",
];

#[test]
fn test_parallel_readers() {
    let dictionary = Dictionary::from_source(1, WORDS);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for word in WORDS {
                    assert!(dictionary.search_direct(word));
                }
                let result = dictionary.search("pech");
                assert!(!result.found());
                assert!(result.suggestions().contains(&"peach".to_string()));
            });
        }
    });
}

#[test]
fn test_searches_while_writing() {
    let dictionary = Arc::new(Dictionary::new(1));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let dictionary = Arc::clone(&dictionary);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut searches = 0;
                while !done.load(Ordering::Acquire) {
                    let result = dictionary.search("wrod");
                    // Suggestions must never name a word the tree does not hold.
                    for suggestion in result.suggestions() {
                        assert!(dictionary.search_direct(suggestion));
                    }
                    searches += 1;
                }
                searches
            })
        })
        .collect();

    for i in 0..500 {
        dictionary.insert(&format!("word{i}"));
    }
    dictionary.insert("word");
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(dictionary.word_count(), 501);
    let result = dictionary.search("wrod");
    assert_eq!(result.suggestions(), &["word".to_string()]);
}

#[test]
fn test_concurrent_writers() {
    let dictionary = Dictionary::new(1);

    thread::scope(|scope| {
        for t in 0..4 {
            let dictionary = &dictionary;
            scope.spawn(move || {
                for i in 0..250 {
                    dictionary.insert(&format!("w{t}x{i}"));
                    // every thread also races on the same shared words
                    dictionary.insert(WORDS[i % WORDS.len()]);
                }
            });
        }
    });

    assert_eq!(dictionary.word_count(), 4 * 250 + WORDS.len());
    assert!(dictionary.search_direct("w3x249"));
    assert!(!dictionary.search_direct("w4x0"));
}

#[test]
fn test_search_many_matches_search() {
    let dictionary = Dictionary::from_source(1, WORDS);
    let queries = ["aple", "banana", "chery", "grap", "lmon", "xyz", ""];

    let batch = dictionary.search_many(&queries);
    let single: Vec<_> = queries.iter().map(|q| dictionary.search(q)).collect();
    assert_eq!(batch, single);
}
