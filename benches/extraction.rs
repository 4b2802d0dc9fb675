use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vibrance::{image::RgbaImage, Palette};

fn noise_image(seed: u64, width: u32, height: u32) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for _ in 0..width * height {
        data.push(rng.gen());
        data.push(rng.gen());
        data.push(rng.gen());
        data.push(255);
    }

    RgbaImage::from_raw(width, height, data).unwrap()
}

fn benchmark_extraction(c: &mut Criterion) {
    let at_cap = noise_image(11, 280, 280);
    c.bench_function("generate_280px_noise", |b| {
        b.iter(|| black_box(Palette::from_image(at_cap.clone()).generate()))
    });

    let oversized = noise_image(13, 1400, 1050);
    c.bench_function("generate_with_downscale", |b| {
        b.iter(|| black_box(Palette::from_image(oversized.clone()).generate()))
    });

    let photo_like = noise_image(17, 120, 80);
    c.bench_function("generate_small_image", |b| {
        b.iter(|| black_box(Palette::from_image(photo_like.clone()).generate()))
    });
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
