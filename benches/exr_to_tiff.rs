use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use exr2tiff::image_pipeline::{ConversionConfig, ExrToTiffPipeline, TiffCompression};

fn generate_exr(width: usize, height: usize, channel_names: &[&str]) -> Vec<u8> {
    use exr::prelude::*;

    let pixels = width * height;
    let list: smallvec::SmallVec<[AnyChannel<FlatSamples>; 4]> = channel_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let samples: Vec<f32> = (0..pixels)
                .map(|p| ((p + i) % 1024) as f32 / 1024.0)
                .collect();
            AnyChannel::new(*name, FlatSamples::F32(samples))
        })
        .collect();

    let layer = Layer::new(
        (width, height),
        LayerAttributes::named("main"),
        Encoding::default(),
        AnyChannels::sort(list),
    );

    let mut bytes = Vec::new();
    Image::from_layer(layer)
        .write()
        .to_buffered(Cursor::new(&mut bytes))
        .unwrap();
    bytes
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![(256, "256x256"), (512, "512x512"), (1024, "1024x1024")];

    for (size, label) in sizes {
        let exr_data = generate_exr(size, size, &["R", "G", "B", "A"]);
        group.throughput(Throughput::Bytes((size * size * 4 * 4) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(label), &exr_data, |b, data| {
            let pipeline = ExrToTiffPipeline::new(ConversionConfig::default());

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_methods");
    let exr_data = generate_exr(512, 512, &["R", "G", "B", "A"]);

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::Deflate, "deflate"),
        (TiffCompression::Packbits, "packbits"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(BenchmarkId::from_parameter(label), &exr_data, |b, data| {
            let config = ConversionConfig::builder().compression(compression).build();
            let pipeline = ExrToTiffPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_normals_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("normals_remap");

    let color_data = generate_exr(512, 512, &["R", "G", "B"]);
    let normals_data = generate_exr(512, 512, &["N.NX", "N.NY", "N.NZ"]);

    group.bench_function("color_passthrough", |b| {
        let pipeline = ExrToTiffPipeline::new(ConversionConfig::default());

        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            let _ = pipeline.convert(black_box(&color_data), &mut output);
        });
    });

    group.bench_function("normals_rescaled", |b| {
        let pipeline = ExrToTiffPipeline::new(ConversionConfig::default());

        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            let _ = pipeline.convert(black_box(&normals_data), &mut output);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_compression_methods,
    benchmark_normals_remap
);
criterion_main!(benches);
