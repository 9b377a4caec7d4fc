use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imagcdf::container::{Compression, FileContainer, MemoryContainer, OpenMode};
use imagcdf::dataset::{read_dataset, write_dataset, Dataset};
use imagcdf::metadata::Metadata;
use imagcdf::schema::VECTOR_TIMES;
use imagcdf::time::Tt2000;
use imagcdf::variable::{TimeSeries, Variable};
use tempfile::TempDir;

/// Build a day of XYZF data at `increment` seconds
fn generate_dataset(increment: i64) -> Dataset {
    let count = (86_400 / increment) as usize;
    let start = Tt2000::to_epoch(2024, 1, 1, 0, 0, 0).expect("valid start");
    let metadata = Metadata {
        iaga_code: "ESK".to_string(),
        elements_recorded: "XYZF".to_string(),
        ..Metadata::default()
    };

    let mut dataset = Dataset::new(metadata)
        .with_time_series(TimeSeries::regular(VECTOR_TIMES, start, increment, count));
    for (code, base) in [("X", 17180.0), ("Y", -1200.0), ("Z", 46500.0), ("F", 49500.0)] {
        let data = (0..count).map(|i| base + (i % 100) as f64 * 0.01).collect();
        dataset = dataset.with_variable(
            Variable::geomagnetic(code)
                .with_description(format!("Geomagnetic Field Element {code}"), "nT")
                .with_valid_range(-88000.0, 88000.0)
                .with_data(data),
        );
    }
    dataset
}

/// Benchmark the write and read paths against the in-memory container
fn bench_memory_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_round_trip");

    for (label, increment) in [("minute", 60_i64), ("second", 1)] {
        let dataset = generate_dataset(increment);
        group.throughput(Throughput::Elements((86_400 / increment) as u64 * 4));
        group.bench_with_input(BenchmarkId::from_parameter(label), &dataset, |b, dataset| {
            b.iter(|| {
                let mut container = MemoryContainer::new();
                write_dataset(&mut container, dataset).expect("write failed");
                read_dataset(&mut container).expect("read failed")
            });
        });
    }

    group.finish();
}

/// Benchmark persisting a minute-cadence day with each compression
fn bench_file_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_write");
    let dataset = generate_dataset(60);

    for compression in [Compression::None, Compression::Gzip(1), Compression::gzip()] {
        group.bench_with_input(
            BenchmarkId::from_parameter(compression),
            &compression,
            |b, &compression| {
                b.iter_batched(
                    || TempDir::new().unwrap(),
                    |temp_dir| {
                        let path = temp_dir.path().join("esk_20240101_pt1m_4.cdf");
                        let mut file =
                            FileContainer::open(&path, OpenMode::Create, compression).unwrap();
                        write_dataset(&mut file, &dataset).unwrap();
                        file.close().unwrap();
                        drop(temp_dir);
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_memory_round_trip, bench_file_write);
criterion_main!(benches);
