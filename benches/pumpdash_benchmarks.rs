//! Performance benchmarks for the hot paths of a list refresh
//!
//! Decoding the backend envelope and formatting the table run on every
//! refresh, so large pipeline sets should stay cheap.

use criterion::{Criterion, criterion_group, criterion_main};
use pumpdash::cli::commands::list::format_pipeline_table;
use pumpdash::models::{ApiResponse, Condition, EventType, Pipeline};
use std::hint::black_box;

fn sample_pipelines(count: usize) -> Vec<Pipeline> {
    (0..count)
        .map(|i| Pipeline {
            schema: Some(format!("schema_{}", i % 7)),
            table: Some(format!("table_{}", i)),
            event_types: Some(vec![EventType::Insert, EventType::Update, EventType::Delete]),
            stream: Some(format!("event.bus.table_{}", i)),
            condition: Some(Condition {
                column_changed: Some(vec!["status".to_string(), "updated_at".to_string()]),
            }),
        })
        .collect()
}

/// Benchmark decoding of a list-pipeline response
fn benchmark_envelope_decoding(c: &mut Criterion) {
    let body = serde_json::json!({
        "error": false,
        "data": sample_pipelines(500),
    })
    .to_string();

    c.bench_function("decode_list_response_500", |b| {
        b.iter(|| {
            let resp: ApiResponse<Vec<Pipeline>> =
                serde_json::from_str(black_box(&body)).unwrap();
            black_box(resp.into_result().unwrap());
        });
    });
}

/// Benchmark plain-text table formatting
fn benchmark_table_formatting(c: &mut Criterion) {
    let pipelines = sample_pipelines(500);

    c.bench_function("format_pipeline_table_500", |b| {
        b.iter(|| {
            black_box(format_pipeline_table(black_box(&pipelines)));
        });
    });
}

criterion_group!(
    benches,
    benchmark_envelope_decoding,
    benchmark_table_formatting
);
criterion_main!(benches);
