// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! End-to-end: load the sample dataset, train, replay, classify, export.

use std::collections::HashMap;
use std::path::PathBuf;

use rce::config::{load_config_or_default, RceConfig};
use rce::prelude::*;
use tempfile::tempdir;

fn sample_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/two_clusters.json")
}

#[test]
fn test_sample_dataset_trains_and_classifies_its_own_points() {
    let mut session = TrainingSession::from_dataset_file(&RceConfig::default(), sample_dataset())
        .expect("sample dataset should load");

    let outcome = session.train().expect("training should converge");
    let TrainingOutcome::Converged {
        epochs, snapshots, ..
    } = outcome
    else {
        panic!("expected convergence, got {:?}", outcome);
    };
    assert!(epochs >= 1);
    assert_eq!(snapshots, session.trainer().trace().len());

    let network = session.trainer().final_network().unwrap();
    assert!(!network.modification());
    for point in session.data() {
        assert_eq!(
            network.classify(point.x(), point.y()),
            Classification::Class(point.class_name().to_string()),
            "training point {} misclassified",
            point
        );
    }
}

#[test]
fn test_replay_walks_whole_trace() {
    let mut session =
        TrainingSession::from_dataset_file(&RceConfig::default(), sample_dataset()).unwrap();
    session.train().unwrap();

    let trainer = session.trainer();
    let mut player = trainer.player().unwrap();
    assert_eq!(player.position(), 0);
    assert_eq!(player.current().hidden_layer().len(), 0);

    let mut visited = 1;
    while player.position() + 1 < trainer.trace().len() {
        player.next_step();
        visited += 1;
    }
    assert_eq!(visited, trainer.trace().len());
    assert_eq!(player.current(), trainer.final_network().unwrap());

    // Clamped at the end
    player.next_step();
    assert_eq!(player.position(), trainer.trace().len() - 1);

    player.first();
    player.next_epoch();
    assert!(player.current().is_epoch_start());
}

#[test]
fn test_small_radius_needs_more_neurons() {
    let mut overrides = HashMap::new();
    overrides.insert("r_max".to_string(), "0.5".to_string());
    let config = load_config_or_default(None, Some(&overrides)).unwrap();
    assert_eq!(config.network.r_max, 0.5);

    let mut session = TrainingSession::from_dataset_file(&config, sample_dataset()).unwrap();
    session.train().unwrap();

    // Every neighbour is farther than 0.5 away, so each point gets its own neuron
    let network = session.trainer().final_network().unwrap();
    assert_eq!(network.hidden_layer().len(), session.data().len());
    assert!(network.hidden_layer().iter().all(|n| n.radius() == 0.5));
}

#[test]
fn test_trace_json_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.json");

    let mut session =
        TrainingSession::from_dataset_file(&RceConfig::default(), sample_dataset()).unwrap();
    session.train().unwrap();
    session.write_trace_json(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let trace: Trace = serde_json::from_str(&content).unwrap();
    assert_eq!(&trace, session.trainer().trace());
    assert_eq!(trace.first().unwrap().action(), "No action - new network was created");
}

#[test]
fn test_dataset_edit_then_retrain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edited.json");

    let mut data = load_dataset_from_file(sample_dataset()).unwrap();
    data.add_point(Point::new(9.0, 9.0, "green")).unwrap();
    assert!(matches!(
        data.add_point(Point::new(9.0, 9.0, "red")),
        Err(StructuresError::AlreadyExists(_))
    ));
    save_dataset_to_file(&data, &path).unwrap();

    let mut session = TrainingSession::from_dataset_file(&RceConfig::default(), &path).unwrap();
    session.train().unwrap();

    let network = session.trainer().final_network().unwrap();
    let classes: Vec<&str> = network.output_layer().iter().map(|o| o.class_name()).collect();
    assert_eq!(classes, vec!["red", "blue", "green"]);
}
