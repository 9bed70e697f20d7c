use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use chrono::TimeZone;
use curbr::domain::{
    Borough, CurbRules, FrameContext, LaneType, VehicleObservation, VehicleType, ZoneDefinition,
    ZoneType,
};
use curbr::rules::RulesEngine;

fn test_frame(hour: u32) -> FrameContext {
    FrameContext {
        frame_id: "f1".to_string(),
        camera_id: "cam_01".to_string(),
        timestamp_utc: chrono::Utc
            .with_ymd_and_hms(2026, 1, 10, hour, 0, 0)
            .unwrap(),
        borough: Borough::Manhattan,
        segment_id: "seg_1001".to_string(),
    }
}

fn test_observation(vehicle_type: VehicleType, lane_type: LaneType) -> VehicleObservation {
    VehicleObservation {
        track_id: "t1".to_string(),
        vehicle_type,
        lane_type,
        is_double_parked: false,
        is_obstructing: false,
        curb_distance_m: 0.5,
        dwell_time_seconds: 0,
    }
}

fn test_engine() -> RulesEngine {
    let mut limits = HashMap::new();
    limits.insert(VehicleType::Passenger, 900);
    limits.insert(VehicleType::Commercial, 1800);
    limits.insert(VehicleType::Bus, 300);

    RulesEngine::new(CurbRules {
        version: "bench-1".to_string(),
        dwell_time_limits: limits,
    })
}

fn bench_evaluate_legal(c: &mut Criterion) {
    let engine = test_engine();
    let frame = test_frame(14);
    let obs = test_observation(VehicleType::Passenger, LaneType::Parking);

    c.bench_function("evaluate_legal", |b| {
        b.iter(|| engine.evaluate(black_box(&frame), black_box(&obs)))
    });
}

fn bench_evaluate_all_codes(c: &mut Criterion) {
    let engine = test_engine();
    let frame = test_frame(1);
    let obs = VehicleObservation {
        track_id: "t1".to_string(),
        vehicle_type: VehicleType::Commercial,
        lane_type: LaneType::Bus,
        is_double_parked: true,
        is_obstructing: true,
        curb_distance_m: 0.5,
        dwell_time_seconds: 2200,
    };

    c.bench_function("evaluate_all_codes", |b| {
        b.iter(|| engine.evaluate(black_box(&frame), black_box(&obs)))
    });
}

fn bench_evaluate_with_zone(c: &mut Criterion) {
    let engine = test_engine();
    let frame = test_frame(14);
    let obs = test_observation(VehicleType::Passenger, LaneType::Parking);
    let zone = ZoneDefinition {
        zone_id: "z1".to_string(),
        zone_type: ZoneType::NoParking,
        polygon: vec![[0.0, 0.0], [100.0, 0.0], [100.0, 50.0], [0.0, 50.0]],
        label: String::new(),
    };

    c.bench_function("evaluate_with_zone", |b| {
        b.iter(|| {
            engine.evaluate_with_zone(black_box(&frame), black_box(&obs), black_box(Some(&zone)))
        })
    });
}

fn bench_batch_evaluate(c: &mut Criterion) {
    let engine = test_engine();
    let frame = test_frame(14);

    let observations: Vec<VehicleObservation> = (0..100)
        .map(|i| {
            let lane_type = match i % 4 {
                0 => LaneType::Parking,
                1 => LaneType::Bus,
                2 => LaneType::Travel,
                _ => LaneType::Bike,
            };
            let mut obs = test_observation(VehicleType::Passenger, lane_type);
            obs.track_id = format!("t{}", i);
            obs.dwell_time_seconds = i * 20;
            obs
        })
        .collect();

    c.bench_function("batch_evaluate_100", |b| {
        b.iter(|| {
            observations
                .iter()
                .map(|obs| engine.evaluate(black_box(&frame), black_box(obs)))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate_legal,
    bench_evaluate_all_codes,
    bench_evaluate_with_zone,
    bench_batch_evaluate,
);

criterion_main!(benches);
