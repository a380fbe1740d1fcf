// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end configuration-space exploration.
//!
//! These tests exercise the complete flow from pipeline text → instance
//! id assignment → grouping → variant enumeration → re-serialization,
//! proving that the three crates compose correctly.

use accelerator_registry::AcceleratorInventory;
use pipeline_ir::{PipelineDescription, StageKind};
use variant_explorer::{
    assign_instance_ids, BatchSizeVariants, ConcurrencyVariants, DeviceVariants, ExplorerConfig,
    VariantGenerator,
};

const TWO_MODEL_PIPELINE: &str = "filesrc location=cam.mp4 ! decodebin \
     ! gvadetect model=person-detect.xml \
     ! gvaclassify model=attrib.xml \
     ! gvaclassify model=attrib.xml \
     ! fakesink";

fn prepared_pipeline() -> PipelineDescription {
    let mut p = PipelineDescription::parse(TWO_MODEL_PIPELINE).unwrap();
    assign_instance_ids(&mut p).unwrap();
    p
}

#[test]
fn test_instance_ids_then_device_grouping() {
    let p = prepared_pipeline();

    // The two classify stages share attrib.xml and therefore one id.
    assert_eq!(p.stages()[2].params.get("model-instance-id"), Some("inf0"));
    assert_eq!(p.stages()[3].params.get("model-instance-id"), Some("inf1"));
    assert_eq!(p.stages()[4].params.get("model-instance-id"), Some("inf1"));

    // Two devices × two instance groups = 4 device variants.
    let inventory = AcceleratorInventory::from_identifiers(["GPU.0", "CPU"]).unwrap();
    let mut g = DeviceVariants::new(inventory);
    g.init(&p).unwrap();
    assert_eq!(g.count(), 4);
}

#[test]
fn test_shared_instance_moves_together() {
    let base = PipelineDescription::parse(
        "decodebin \
         ! gvadetect model=m.xml model-instance-id=inf0 \
         ! gvaclassify model=m.xml model-instance-id=inf0 \
         ! fakesink",
    )
    .unwrap();
    let inventory = AcceleratorInventory::from_identifiers(["GPU.0", "CPU"]).unwrap();
    let mut g = DeviceVariants::new(inventory);
    g.init(&base).unwrap();

    let variants: Vec<PipelineDescription> = g.collect();
    assert_eq!(variants.len(), 2);

    for variant in &variants {
        let devices: Vec<&str> = variant
            .stages()
            .iter()
            .filter(|s| s.kind.is_inference())
            .map(|s| s.params.get("device").unwrap())
            .collect();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0], devices[1], "linked stages diverged");
    }

    // GPU variant splices vapostproc + caps before each inference stage.
    let gpu = &variants[0];
    assert_eq!(gpu.len(), 8);
    let postproc_count = gpu
        .stages()
        .iter()
        .filter(|s| s.kind == StageKind::PostProc)
        .count();
    assert_eq!(postproc_count, 2);

    // CPU variant is purely parametric.
    assert_eq!(variants[1].len(), 4);
}

#[test]
fn test_variants_rederive_from_base_each_time() {
    let base = PipelineDescription::parse("decodebin ! gvadetect model=m.xml").unwrap();
    let inventory = AcceleratorInventory::from_identifiers(["GPU.0", "GPU.1"]).unwrap();
    let mut g = DeviceVariants::new(inventory);
    g.init(&base).unwrap();

    let first = g.next_variant().unwrap();
    let second = g.next_variant().unwrap();

    // Both GPU variants carry exactly one adjacency pair — insertions
    // from the first emission did not leak into the second.
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 4);
    assert_eq!(first.stages()[3].params.get("device"), Some("GPU.0"));
    assert_eq!(second.stages()[3].params.get("device"), Some("GPU.1"));
}

#[test]
fn test_batch_enumeration_count_over_two_stages() {
    let p = prepared_pipeline();
    let mut g = BatchSizeVariants::new();
    g.init(&p).unwrap();

    // Three inference stages, six candidates each: 6^3 variants; the
    // shared instance id does not merge batch groups.
    assert_eq!(g.num_variants(), 216);

    let mut seen = std::collections::HashSet::new();
    let mut count = 0;
    for variant in g {
        assert!(seen.insert(variant.serialize()), "duplicate variant");
        count += 1;
    }
    assert_eq!(count, 216);
}

#[test]
fn test_first_variant_matches_base_structure() {
    let p = prepared_pipeline();

    let mut g = ConcurrencyVariants::new();
    g.init(&p).unwrap();
    let first = g.next_variant().unwrap();

    // Same stage sequence, with nireq=1 (candidates[0]) applied.
    assert_eq!(first.len(), p.len());
    for (stage, base_stage) in first.stages().iter().zip(p.stages()) {
        assert_eq!(stage.raw_kind, base_stage.raw_kind);
        if stage.kind.is_inference() {
            assert_eq!(stage.params.get("nireq"), Some("1"));
        }
    }
}

#[test]
fn test_serialized_variants_reparse() {
    let p = prepared_pipeline();
    let inventory = AcceleratorInventory::from_identifiers(["GPU.0", "CPU", "NPU"]).unwrap();
    let mut g = DeviceVariants::new(inventory);
    g.init(&p).unwrap();

    for variant in g {
        let text = variant.serialize();
        let reparsed = PipelineDescription::parse(&text).unwrap();
        assert_eq!(reparsed, variant);
    }
}

#[test]
fn test_config_driven_exploration() {
    let config = ExplorerConfig::from_toml(
        r#"
allowed_devices = ["CPU"]
batch_sizes = [1, 4]
nireq_depths = [2]
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let p = prepared_pipeline();
    let inventory = AcceleratorInventory::from_identifiers(["CPU", "GPU.0"]).unwrap();

    let mut devices = config.device_generator(&inventory).unwrap();
    devices.init(&p).unwrap();
    // One allowed device, two instance groups: a single variant.
    assert_eq!(devices.count(), 1);

    let mut batches = config.batch_generator();
    batches.init(&p).unwrap();
    assert_eq!(batches.count(), 8); // 2^3

    let mut nireqs = config.concurrency_generator();
    nireqs.init(&p).unwrap();
    assert_eq!(nireqs.count(), 1); // 1^3
}

#[test]
fn test_pipeline_without_inference_stages() {
    let base = PipelineDescription::parse("videotestsrc ! fakesink").unwrap();

    let inventory = AcceleratorInventory::from_identifiers(["CPU"]).unwrap();
    let mut devices = DeviceVariants::new(inventory);
    devices.init(&base).unwrap();
    assert_eq!(devices.next_variant().unwrap(), base);
    assert!(devices.next_variant().is_none());

    let mut batches = BatchSizeVariants::new();
    batches.init(&base).unwrap();
    assert_eq!(batches.next_variant().unwrap(), base);
    assert!(batches.next_variant().is_none());
}

#[test]
fn test_generators_as_trait_objects() {
    let p = prepared_pipeline();
    let inventory = AcceleratorInventory::from_identifiers(["CPU"]).unwrap();

    let mut generators: Vec<Box<dyn VariantGenerator>> = vec![
        Box::new(DeviceVariants::new(inventory)),
        Box::new(BatchSizeVariants::with_candidates(vec![1, 8])),
        Box::new(ConcurrencyVariants::with_candidates(vec![1, 4])),
    ];

    for generator in &mut generators {
        generator.init(&p).unwrap();
        let mut count = 0;
        while generator.next_variant().is_some() {
            count += 1;
        }
        assert!(count > 0, "{} emitted nothing", generator.dimension());
        assert!(generator.next_variant().is_none());
    }
}
