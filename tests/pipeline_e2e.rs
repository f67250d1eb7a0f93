//! End-to-end pipeline tests: scripted frames through detection,
//! classification, debouncing and text assembly.

use std::sync::Arc;

use signscribe::camera::ScriptedFrameSource;
use signscribe::classify::MockClassifier;
use signscribe::debounce::DebounceMode;
use signscribe::defaults::KEYPOINTS_PER_HAND;
use signscribe::detect::ScriptedDetector;
use signscribe::dictionary::Dictionary;
use signscribe::landmark::{HandPose, Point2D};
use signscribe::pipeline::{Pipeline, PipelineConfig};

fn pose() -> HandPose {
    HandPose::new(
        (0..KEYPOINTS_PER_HAND)
            .map(|i| Point2D::new(0.4 + i as f32 * 0.01, 0.5))
            .collect(),
    )
    .unwrap()
}

/// Builds a pipeline that replays the given per-tick labels. An empty label
/// means no hand in that frame.
fn replay_pipeline(labels: &[&str], frames: u32, dictionary: Dictionary) -> Pipeline {
    let detections = labels
        .iter()
        .map(|l| if l.is_empty() { None } else { Some(pose()) })
        .collect();
    let classifier = MockClassifier::new("replay")
        .with_script(labels.iter().filter(|l| !l.is_empty()).copied().collect());
    let config = PipelineConfig {
        debounce: DebounceMode::FrameCount(frames),
        ..Default::default()
    };
    Pipeline::new(
        config,
        Box::new(ScriptedFrameSource::blank_frames(labels.len())),
        Box::new(ScriptedDetector::new(detections)),
        Some(Box::new(classifier)),
        Arc::new(dictionary),
    )
}

#[test]
fn held_signs_become_buffer_text() {
    // "a" held 15 frames, hand withdrawn, "b" held 15 frames
    let mut labels = vec!["a"; 15];
    labels.push("");
    labels.extend(vec!["b"; 15]);

    let mut pipeline = replay_pipeline(&labels, 15, Dictionary::new());
    for _ in 0..labels.len() {
        pipeline.tick();
    }

    assert_eq!(pipeline.buffer_text(), "ab");
    assert_eq!(pipeline.transcript_text(), "");
}

#[test]
fn holding_past_confirmation_does_not_repeat() {
    let labels = vec!["a"; 60];
    let mut pipeline = replay_pipeline(&labels, 15, Dictionary::new());
    for _ in 0..labels.len() {
        pipeline.tick();
    }
    assert_eq!(pipeline.buffer_text(), "a");
}

#[test]
fn doubled_letter_needs_an_intervening_symbol() {
    // Re-signing "a" straight after a hand withdrawal is swallowed by the
    // append latch; signing a different letter in between re-arms it.
    let mut labels = vec!["a"; 15];
    labels.push("");
    labels.extend(vec!["a"; 15]);

    let mut pipeline = replay_pipeline(&labels, 15, Dictionary::new());
    for _ in 0..labels.len() {
        pipeline.tick();
    }
    assert_eq!(pipeline.buffer_text(), "a");

    let mut labels = vec!["a"; 15];
    labels.push("");
    labels.extend(vec!["b"; 15]);
    labels.push("");
    labels.extend(vec!["a"; 15]);

    let mut pipeline = replay_pipeline(&labels, 15, Dictionary::new());
    for _ in 0..labels.len() {
        pipeline.tick();
    }
    assert_eq!(pipeline.buffer_text(), "aba");
}

#[test]
fn word_flow_sign_suggest_accept_speak() {
    let mut dictionary = Dictionary::new();
    dictionary.insert("Trường");
    dictionary.insert("Trưởng");
    dictionary.insert("đèn");

    // Each letter held for two frames with a one-frame gap between letters
    let mut script: Vec<String> = Vec::new();
    for ch in "truong".chars() {
        let s = ch.to_string();
        script.push(s.clone());
        script.push(s);
        script.push(String::new());
    }
    let script_refs: Vec<&str> = script.iter().map(String::as_str).collect();

    let mut pipeline = replay_pipeline(&script_refs, 2, dictionary);
    for _ in 0..script_refs.len() {
        pipeline.tick();
    }

    assert_eq!(pipeline.buffer_text(), "truong");
    assert_eq!(
        pipeline.suggestions(),
        &["Trường".to_string(), "Trưởng".to_string()]
    );

    pipeline.accept_suggestion(0);
    assert_eq!(pipeline.transcript_text(), "Trường ");
    assert_eq!(pipeline.buffer_text(), "");
}

#[test]
fn session_edit_flow() {
    // Type "ab", commit as a word, then erase it token by token
    let mut labels = vec!["a"; 5];
    labels.push("");
    labels.extend(vec!["b"; 5]);

    let mut pipeline = replay_pipeline(&labels, 5, Dictionary::new());
    for _ in 0..labels.len() {
        pipeline.tick();
    }
    assert_eq!(pipeline.buffer_text(), "ab");

    pipeline.commit_space();
    assert_eq!(pipeline.transcript_text(), "ab ");
    assert_eq!(pipeline.buffer_text(), "");

    // Backspace removes the space token, then the word
    pipeline.backspace();
    assert_eq!(pipeline.transcript_text(), "ab");
    pipeline.backspace();
    assert_eq!(pipeline.transcript_text(), "");
}

#[test]
fn exhausted_source_freezes_state() {
    let labels = vec!["a"; 5];
    let mut pipeline = replay_pipeline(&labels, 5, Dictionary::new());
    for _ in 0..5 {
        pipeline.tick();
    }
    assert_eq!(pipeline.buffer_text(), "a");

    // Source exhausted: further ticks change nothing
    for _ in 0..10 {
        let out = pipeline.tick();
        assert!(out.frame.is_none());
    }
    assert_eq!(pipeline.buffer_text(), "a");
}
