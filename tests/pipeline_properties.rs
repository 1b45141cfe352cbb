//! Behavioural properties of the feature pipeline.

use spamlens::config::{EmojiMatching, FeatureConfig, PipelineConfig, SpamWordMatching};
use spamlens::features::patterns::EMAIL;
use spamlens::features::{
    ContainFlag, CurrencyFlag, EmailFlag, EmojiFlag, FlagExtractor, PhoneFlag, SpamWordFlag,
    raw_flag_extractors,
};
use spamlens::pipeline::{Deduplicate, RandomOversampler, Scrubber, Stage, TextTransform};
use spamlens::prelude::*;

const SAMPLES: &[&str] = &[
    "",
    "hello world",
    "Win $500 now!!! Call 555-123-4567",
    "contact me@x.com",
    "Visit https://www.example.com/offer now",
    "Call +91 9876543210 now",
    "Get 50% off, T&C apply",
    "Pay 20€ or €20 today",
    "🎉🎉 FREE gift 🎁 | limited offer",
    "3.14 is pi",
    "!!!???",
];

fn feature_configs() -> Vec<FeatureConfig> {
    vec![
        FeatureConfig::default(),
        FeatureConfig {
            emoji_matching: EmojiMatching::Curated,
            spam_word_matching: SpamWordMatching::CaseInsensitive,
            ..Default::default()
        },
    ]
}

#[test]
fn test_flags_are_zero_iff_no_match() {
    for features in feature_configs() {
        let config = PipelineConfig {
            features,
            ..Default::default()
        };
        let pipeline = FeaturePipeline::inference(&config);

        for text in SAMPLES {
            let record = pipeline.process_comment(text);
            for extractor in raw_flag_extractors(&features) {
                let value = record.features.get(extractor.column());
                let count = extractor.count(text);
                assert!(value >= 0.0, "{} on {text:?}", extractor.name());
                assert_eq!(value == 0.0, count == 0, "{} on {text:?}", extractor.name());
            }
        }
    }
}

#[test]
fn test_dedup_is_idempotent() {
    let raw: RawBatch = vec![
        RawRecord::new("Free cash", 1_i64),
        RawRecord::new("Free cash", true),
        RawRecord::new("Free cash", 0_i64),
        RawRecord::new("lunch?", "ham"),
        RawRecord::new("lunch?", "HAM"),
        RawRecord::new(None::<&str>, 1_i64),
    ]
    .into_iter()
    .collect();

    let dedup = Deduplicate::new();
    let once = dedup.coerce(raw);
    let twice = dedup.apply(once.clone());

    assert_eq!(once.len(), 3);
    assert_eq!(once, twice);
}

#[test]
fn test_length_reflects_processed_text() {
    let pipeline = FeaturePipeline::inference(&PipelineConfig::default());
    let max = PipelineConfig::default().features.normalization.length;

    for text in [
        "Visit https://www.example.com/offer now",
        "Call +91 9876543210 now",
    ] {
        let record = pipeline.process_comment(text);
        let raw_length = text.chars().count() as f32 / max;
        assert_ne!(record.features.length, raw_length, "{text:?}");
        assert_eq!(
            record.features.length,
            record.comment.chars().count() as f32 / max
        );
    }
}

#[test]
fn test_win_call_example() {
    let pipeline = FeaturePipeline::inference(&PipelineConfig::default());
    let record = pipeline.process_comment("Win $500 now!!! Call 555-123-4567");

    assert!(record.features.currency >= 0.5);
    assert!(record.features.phone >= 1.0);
    assert!(record.features.spam_word > 0.0);
}

#[test]
fn test_plain_comment() {
    let pipeline = FeaturePipeline::inference(&PipelineConfig::default());
    let record = pipeline.process_comment("hello world");

    assert_eq!(record.comment, "hello world");
    assert_eq!(record.features.currency, 0.0);
    assert_eq!(record.features.spam_word, 0.0);
    assert_eq!(record.features.emoji, 0.0);
    assert_eq!(record.features.contain, 0.0);
    assert_eq!(record.features.email, 0.0);
    assert_eq!(record.features.phone, 0.0);
    assert_eq!(record.features.length, 11.0_f32 / 50.0);
}

#[test]
fn test_scrub_removes_email() {
    let scrubbed = Scrubber::new().transform("contact me@x.com");
    assert!(!scrubbed.contains("me@x.com"));
    assert!(!EMAIL.is_match(&scrubbed));
    assert_eq!(EmailFlag::new().count(&scrubbed), 0);
}

#[test]
fn test_oversampling_balances_with_copies() {
    let raw: RawBatch = (0..9)
        .map(|i| RawRecord::new(format!("see you at {i}"), 0_i64))
        .chain((0..3).map(|i| RawRecord::new(format!("win ${i}00 now"), 1_i64)))
        .collect();

    let plain = FeaturePipeline::training(&PipelineConfig::default()).run(raw.clone());
    let balanced = FeaturePipeline::training(&PipelineConfig::default())
        .with_oversampling()
        .run(raw);

    let counts = balanced.label_counts();
    assert_eq!(counts[&Some(true)], counts[&Some(false)]);
    assert_eq!(counts[&Some(true)], 9);
    assert!(balanced.iter().all(|r| plain.records().contains(r)));
}

#[test]
fn test_oversampler_stage_standalone() {
    let batch = Batch::new(vec![
        Record::labelled("a", true),
        Record::labelled("b", false),
        Record::labelled("c", false),
    ]);
    let output = RandomOversampler::default().apply(batch);
    assert_eq!(output.len(), 4);
}

#[test]
fn test_individual_extractor_counts() {
    assert_eq!(CurrencyFlag::new().count("Pay 20€ or €20 today"), 2);
    assert_eq!(ContainFlag::new().count("Get 50% off, T&C apply"), 2);
    assert_eq!(PhoneFlag::new().count("Call +91 9876543210 now"), 2);
    assert_eq!(EmojiFlag::default().count("a|b 💭"), 2);
    assert_eq!(SpamWordFlag::default().count("free free"), 2);
}

#[test]
fn test_split_after_pipeline() {
    let raw: RawBatch = (0..20)
        .map(|i| RawRecord::new(format!("message number {i}"), (i % 2) as i64))
        .collect();
    let batch = FeaturePipeline::training(&PipelineConfig::default()).run(raw);
    let (train, test) = train_test_split(batch, &PipelineConfig::default().split);

    assert_eq!(train.len(), 16);
    assert_eq!(test.len(), 4);
}
