//! Performance benchmarks
//!
//! Measures extraction and rendering throughput over a synthesized
//! evaluation matrix. The dataset is generated in memory; no fixture
//! files are required.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vendorboard::{OutputFormat, ReportBuilder};

/// Synthesize a matrix with the default roster: `categories` categories
/// of `criteria_per_category` criteria each, plus subtotal, grand-total
/// and cost rows.
fn synthesize_matrix(categories: usize, criteria_per_category: usize) -> String {
    let labels = [
        "COPILOT",
        "ПОСТОБРОБКА (ACW)",
        "АНАЛІТИКА ТА QA",
        "PRE-CALL AI, як повноцінний IVR-замінник",
        "IT, ENTERPRISE & SECURITY",
        "БІЗНЕС ТА ВПРОВАДЖЕННЯ",
    ];
    let priorities = ["Must", "Should", "Could"];

    let mut csv = String::from("MSCW,Weight %,Description");
    let vendors = [
        "Google Cloud CCAI",
        "Ender Turing",
        "NICE",
        "Microsoft Copilot",
        "Genesys Cloud CX",
        "NICE Cognigy",
        "Live Person",
        "Ringo stat",
        "Deca gon",
        "Eleven Labs",
        "Poly AI",
        "Get Vocal",
    ];
    for vendor in vendors {
        csv.push(',');
        csv.push_str(vendor);
    }
    csv.push('\n');

    for (c, label) in labels.iter().cycle().take(categories).enumerate() {
        csv.push_str(&format!(",,\"{}\"\n", label));
        for i in 0..criteria_per_category {
            csv.push_str(priorities[i % 3]);
            csv.push_str(&format!(",{},\"Requirement {} of category {}\"", (i % 5) + 1, i, c));
            for v in 0..vendors.len() {
                csv.push_str(&format!(",{}", ((i + v) % 10) as f64 / 2.0));
            }
            csv.push('\n');
        }
        csv.push_str(",15%,");
        for v in 0..vendors.len() {
            csv.push_str(&format!(",{}%", 20 + (v * 3) % 70));
        }
        csv.push('\n');
    }

    csv.push_str(",100%,Загальна оцінка");
    for v in 0..vendors.len() {
        csv.push_str(&format!(",{}%", 30 + (v * 5) % 60));
    }
    csv.push('\n');

    csv.push_str(",,TCO");
    for v in 0..vendors.len() {
        csv.push_str(&format!(",{} - {} 000", 100 + v * 10, 150 + v * 10));
    }
    csv.push('\n');

    csv
}

fn benchmark_extract(c: &mut Criterion) {
    let data = synthesize_matrix(6, 170); // ~1k criteria
    let report = ReportBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("extract_1k_criteria", |b| {
        b.iter(|| {
            let result = report.extract(black_box(data.as_bytes()));
            black_box(result.unwrap())
        })
    });

    group.finish();
}

fn benchmark_render_html(c: &mut Criterion) {
    let data = synthesize_matrix(6, 170);
    let report = ReportBuilder::new().build().unwrap();
    let (evaluation, _) = report.extract(data.as_bytes()).unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("render_html_1k_criteria", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            report.render(black_box(&evaluation), &mut buffer).unwrap();
            black_box(buffer)
        })
    });

    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let data = synthesize_matrix(6, 40);
    let report = ReportBuilder::new()
        .with_output_format(OutputFormat::Json)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("convert_json", |b| {
        b.iter(|| {
            let output = report.convert_to_string(black_box(data.as_bytes()));
            black_box(output.unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extract,
    benchmark_render_html,
    benchmark_full_pipeline
);
criterion_main!(benches);
