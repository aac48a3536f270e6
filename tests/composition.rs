// Composition tests — the full pipeline over the bundled jieba dictionary.
//
// These exercise the data flow between modules:
//   Tokenizer -> FrequencyVector -> cosine similarity -> band
// through the public `score` entry point and configured pipelines, without
// touching the filesystem.

use papercheck::config::Config;
use papercheck::pipeline::batch::{rank, score_batch, CachedReference};
use papercheck::similarity::band::SimilarityBand;
use papercheck::{score, Pipeline};

const SAMPLES: &[&str] = &[
    "我爱北京天安门",
    "今天天气晴朗",
    "今天天气真好，阳光明媚，我打算去公园散步，呼吸新鲜空气，享受这美好的周末时光。",
    "今天天气很不错，阳光灿烂，我计划去公园走走，呼吸一下新鲜空气，好好享受这个愉快的周末。",
    "机器学习是人工智能的核心分支，需要大量数据与算力支持。",
    "Hello, 我的世界！Python编程很有趣。",
    "",
    "，。！？",
];

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn identical_text_scores_one() {
    assert_eq!(score("我爱北京天安门", "我爱北京天安门"), 1.0);
    assert_eq!(score("夏天好热太阳好大啊", "夏天好热太阳好大啊"), 1.0);
}

#[test]
fn disjoint_text_scores_zero() {
    let s = score("我爱北京天安门", "今天天气晴朗");
    assert_eq!(s, 0.0);
    assert!(s.is_sign_positive(), "Disjoint texts should score +0.0, got {s:?}");
}

#[test]
fn one_shared_word_of_two_scores_half() {
    let result = score("苹果香蕉", "苹果橙子");
    assert!(
        (result - 0.5).abs() < 1e-12,
        "苹果香蕉 vs 苹果橙子 should be 0.5, got {result}"
    );
}

#[test]
fn empty_documents() {
    assert_eq!(score("", ""), 1.0);
    assert_eq!(score("正常文本", ""), 0.0);
    assert_eq!(score("", "正常文本"), 0.0);
}

#[test]
fn punctuation_only_counts_as_empty() {
    assert_eq!(score("，。！？", "……——"), 1.0);
    assert_eq!(score("，。！？", "我爱北京天安门"), 0.0);
}

#[test]
fn unrelated_sentences_score_low() {
    let result = score("西区的食堂，感觉一般般", "几乎每天，去东二吃饭");
    assert!(result < 0.3, "Unrelated sentences should score low, got {result}");
}

#[test]
fn reworded_copy_scores_between_unrelated_and_identical() {
    let original = "机器学习是人工智能的核心分支，需要大量数据与算力支持。";
    let reworded = "机器学习作为人工智能的关键方向，依赖海量数据与强大算力。";
    let result = score(original, reworded);
    assert!(result > 0.3, "Reworded copy should keep overlap, got {result}");
    assert!(result < 1.0, "Reworded copy should not be identical, got {result}");
}

#[test]
fn punctuation_and_spacing_do_not_change_score() {
    assert_eq!(score("我爱北京，天安门！", "我爱北京天安门"), 1.0);
    assert_eq!(score("我爱 北京\n天安门", "我爱北京天安门"), 1.0);
}

#[test]
fn full_width_latin_matches_half_width() {
    assert_eq!(score("Ｐｙｔｈｏｎ编程", "Python编程"), 1.0);
}

// ============================================================
// Properties over sample texts
// ============================================================

#[test]
fn score_is_symmetric() {
    for x in SAMPLES {
        for y in SAMPLES {
            let xy = score(x, y);
            let yx = score(y, x);
            assert!(
                (xy - yx).abs() < 1e-12,
                "score({x:?}, {y:?}) = {xy} but score({y:?}, {x:?}) = {yx}"
            );
        }
    }
}

#[test]
fn score_is_in_range() {
    for x in SAMPLES {
        for y in SAMPLES {
            let s = score(x, y);
            assert!((0.0..=1.0).contains(&s), "score({x:?}, {y:?}) = {s}");
        }
    }
}

#[test]
fn identity_for_nonempty_text() {
    for x in SAMPLES.iter().filter(|x| !x.is_empty()) {
        assert_eq!(score(x, x), 1.0, "score(X, X) should be 1.0 for {x:?}");
    }
}

#[test]
fn doubling_a_document_keeps_score_one() {
    // Each sample ends in punctuation so the seam can't merge two words.
    for x in [
        "我爱北京天安门。",
        "机器学习是人工智能的核心分支，需要大量数据与算力支持。",
        "Hello, 我的世界！",
    ] {
        let doubled = format!("{x}{x}");
        assert_eq!(score(x, &doubled), 1.0, "score(X, X+X) should be 1.0 for {x:?}");
    }
}

#[test]
fn replacing_more_words_never_raises_score() {
    // Latin words are atomic tokens, so replacement is exact.
    let words = [
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    ];
    let original = words.join(" ");

    let mut previous = f64::INFINITY;
    for replaced in 0..=words.len() {
        let suspect: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i < replaced {
                    format!("other{i}")
                } else {
                    w.to_string()
                }
            })
            .collect();
        let s = score(&original, &suspect.join(" "));
        assert!(
            s <= previous,
            "Replacing {replaced} words raised the score: {s} > {previous}"
        );
        previous = s;
    }
    assert_eq!(previous, 0.0);
}

// ============================================================
// Configured pipelines
// ============================================================

#[test]
fn builtin_stopwords_remove_function_words() {
    let config = Config {
        builtin_stopwords: true,
        ..Config::default()
    };
    let pipeline = config.build_pipeline().unwrap();
    let tokens = pipeline.tokenizer().tokenize("我的世界");
    assert!(
        !tokens.contains(&"的".to_string()),
        "的 should be filtered, got {tokens:?}"
    );
}

#[test]
fn default_config_matches_free_score() {
    let pipeline = Config::default().build_pipeline().unwrap();
    for x in SAMPLES {
        for y in SAMPLES {
            assert_eq!(pipeline.score(x, y), score(x, y));
        }
    }
}

#[test]
fn batch_agrees_with_pairwise_scores() {
    let pipeline = Pipeline::default();
    let original = SAMPLES[2];
    let suspects: Vec<&str> = SAMPLES.to_vec();

    let scores = score_batch(&pipeline, original, &suspects);
    assert_eq!(scores.len(), suspects.len());
    for (suspect, s) in suspects.iter().zip(&scores) {
        assert_eq!(*s, pipeline.score(original, suspect));
    }

    let cached = CachedReference::new(&pipeline, original);
    assert_eq!(cached.vector(), &pipeline.vectorize(original));
}

#[test]
fn ranking_puts_copies_first() {
    let pipeline = Pipeline::default();
    let original = SAMPLES[2];
    let suspects = [SAMPLES[4], original, SAMPLES[3]];
    let scores = score_batch(&pipeline, original, &suspects);

    let ranked = rank(vec!["unrelated", "copy", "reworded"], &scores);
    assert_eq!(ranked[0].suspect, "copy");
    assert_eq!(ranked[0].band, SimilarityBand::High);
    assert_eq!(ranked[1].suspect, "reworded");
    assert_eq!(ranked[2].suspect, "unrelated");
}
