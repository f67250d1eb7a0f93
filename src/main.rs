use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{BufRead, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use signscribe::camera::ScriptedFrameSource;
use signscribe::classify::MockClassifier;
use signscribe::cli::{Cli, Commands};
use signscribe::config::{Config, DebounceModeName};
use signscribe::defaults::KEYPOINTS_PER_HAND;
use signscribe::detect::ScriptedDetector;
use signscribe::diagnostics::check_resources;
use signscribe::dictionary::Dictionary;
use signscribe::landmark::{HandPose, Point2D};
use signscribe::pipeline::{Pipeline, PipelineConfig};
use signscribe::debounce::DebounceMode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    config.validate()?;

    match cli.command {
        Some(Commands::Check) => {
            check_resources(&config);
            Ok(())
        }
        None => run_replay(&cli, &config),
    }
}

/// Load configuration, then apply environment and CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_default(&path).with_env_overrides();

    if let Some(dictionary) = &cli.dictionary {
        config.suggest.dictionary_path = dictionary.display().to_string();
    }
    if let Some(model) = &cli.model {
        config.vision.model_paths.insert(0, model.display().to_string());
    }
    if let Some(hold_secs) = cli.hold_secs {
        config.debounce.mode = DebounceModeName::HoldTime;
        config.debounce.hold_secs = hold_secs;
    }
    if let Some(frames) = cli.frames {
        config.debounce.mode = DebounceModeName::FrameCount;
        config.debounce.frame_count = frames;
    }

    Ok(config)
}

/// Replay mode: drive the pipeline from a label-per-line script instead of a
/// camera. A blank line means no hand in that frame.
fn run_replay(cli: &Cli, config: &Config) -> Result<()> {
    let labels = read_labels(cli)?;
    if labels.is_empty() {
        bail!("replay script is empty");
    }

    // Replay has no real frame clock; hold-time debouncing would depend on
    // how fast the loop runs. Frame counting keeps the result deterministic
    // unless the user asked for a hold time explicitly.
    let debounce = if cli.hold_secs.is_some() {
        config.to_debounce_mode()
    } else {
        DebounceMode::FrameCount(config.debounce.frame_count)
    };

    let dictionary = Arc::new(Dictionary::load_or_empty(Path::new(
        &config.suggest.dictionary_path,
    )));

    let detections = labels
        .iter()
        .map(|l| {
            if l.is_empty() {
                None
            } else {
                Some(synthetic_pose())
            }
        })
        .collect();
    let classifier = MockClassifier::new("replay")
        .with_script(labels.iter().filter(|l| !l.is_empty()).cloned().collect());

    let pipeline_config = PipelineConfig {
        debounce,
        suggestion_limit: config.suggest.limit,
        labels_map: config.labels.map.clone(),
    };
    let mut pipeline = Pipeline::new(
        pipeline_config,
        Box::new(ScriptedFrameSource::blank_frames(labels.len())),
        Box::new(ScriptedDetector::new(detections)),
        Some(Box::new(classifier)),
        dictionary,
    );

    let mut last_confirmed = String::new();
    for _ in 0..labels.len() {
        let out = pipeline.tick();
        if !cli.quiet && !out.confirmed.is_empty() && out.confirmed != last_confirmed {
            println!("confirmed '{}'  buffer: {}", out.confirmed, pipeline.buffer_text());
        }
        last_confirmed = out.confirmed;
    }

    if !pipeline.suggestions().is_empty() {
        println!("suggestions: {}", pipeline.suggestions().join(", "));
    }
    println!(
        "{}{}",
        pipeline.transcript_text(),
        pipeline.buffer_text()
    );
    Ok(())
}

/// Reads the replay script from `--replay FILE`, or from stdin when piped.
fn read_labels(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.replay {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read replay script {}", path.display()))?;
        return Ok(contents.lines().map(|l| l.trim().to_string()).collect());
    }

    if std::io::stdin().is_terminal() {
        bail!(
            "no camera backend available in this build; \
             pass --replay FILE or pipe a label script to stdin \
             (one label per line, blank line = no hand)"
        );
    }

    let stdin = std::io::stdin();
    let mut labels = Vec::new();
    for line in stdin.lock().lines() {
        labels.push(line?.trim().to_string());
    }
    Ok(labels)
}

/// A plausible single-hand pose for scripted frames.
#[allow(clippy::unwrap_used)] // 21 points by construction
fn synthetic_pose() -> HandPose {
    HandPose::new(
        (0..KEYPOINTS_PER_HAND)
            .map(|i| Point2D::new(0.4 + i as f32 * 0.01, 0.5))
            .collect(),
    )
    .unwrap()
}
