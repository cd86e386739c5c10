use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use luma_line_detector::line_detection::{
    DetectionConfig, FrameBufferView, LineDetector, stages,
};

fn generate_frame(width: usize, height: usize, row_stride: usize) -> Vec<u8> {
    let mut data = vec![0u8; row_stride * height];
    for y in 0..height {
        for x in 0..width {
            data[y * row_stride + x] = ((x * 7 + y * 3) % 256) as u8;
        }
    }
    data
}

fn benchmark_detection_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_by_size");

    let sizes = vec![
        (320, 240, "320x240"),
        (640, 480, "640x480"),
        (1280, 720, "1280x720"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_frame(width, height, width);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &frame,
            |b, data| {
                let detector = LineDetector::new(DetectionConfig::default()).unwrap();
                let view = FrameBufferView::from_slice(width, height, width, data).unwrap();

                b.iter(|| detector.detect(black_box(&view)));
            },
        );
    }

    group.finish();
}

fn benchmark_row_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_padding");

    for (row_stride, label) in [(640, "packed"), (704, "stride_704"), (1024, "stride_1024")] {
        let frame = generate_frame(640, 480, row_stride);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &frame,
            |b, data| {
                let detector = LineDetector::default();
                let view = FrameBufferView::from_slice(640, 480, row_stride, data).unwrap();

                b.iter(|| detector.detect(black_box(&view)));
            },
        );
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let frame = generate_frame(640, 480, 640);
    let view = FrameBufferView::from_slice(640, 480, 640, &frame).unwrap();
    let profile = stages::reduce_rows(&view);

    group.bench_function("reduce_rows", |b| {
        b.iter(|| stages::reduce_rows(black_box(&view)));
    });

    group.bench_function("threshold", |b| {
        b.iter(|| stages::binarize(black_box(&profile), 160));
    });

    let binary = stages::binarize(&profile, 160);
    group.bench_function("decide", |b| {
        b.iter(|| stages::decide(black_box(&binary), 0.3));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_detection_sizes,
    benchmark_row_padding,
    benchmark_stages
);
criterion_main!(benches);
