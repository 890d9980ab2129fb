use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use editor_core_chardet::{LanguageFilter, UniversalDetector, detect};

// "的是不了在人有我他这个们中来上大为和国地到以说时" in GB2312.
const GB2312_LINE: &[u8] = b"\xb5\xc4\xca\xc7\xb2\xbb\xc1\xcb\xd4\xda\xc8\xcb\xd3\xd0\xce\xd2\xcb\xfb\xd5\xe2\xb8\xf6\xc3\xc7\xd6\xd0\xc0\xb4\xc9\xcf\xb4\xf3\xce\xaa\xba\xcd\xb9\xfa\xb5\xd8\xb5\xbd\xd2\xd4\xcb\xb5\xca\xb1\n";

fn large_utf8(line_count: usize) -> Vec<u8> {
    let mut out = String::with_capacity(line_count * 40);
    for i in 0..line_count {
        out.push_str(&format!("line {i}: plain ascii text with no accents\n"));
    }
    out.push_str("naïve café\n");
    out.into_bytes()
}

fn large_gb2312(line_count: usize) -> Vec<u8> {
    GB2312_LINE.repeat(line_count)
}

fn bench_utf8_tail(c: &mut Criterion) {
    let bytes = large_utf8(20_000);
    c.bench_function("detect/utf8_ascii_prefix_20k_lines", |b| {
        b.iter(|| black_box(detect(&bytes)))
    });
}

fn bench_gb2312_chunked(c: &mut Criterion) {
    let bytes = large_gb2312(20_000);
    c.bench_function("detect/gb2312_4k_chunks", |b| {
        b.iter_batched(
            || UniversalDetector::new(LanguageFilter::ALL),
            |mut detector| {
                for chunk in bytes.chunks(4096) {
                    detector.handle_data(chunk);
                    if detector.is_done() {
                        break;
                    }
                }
                detector.data_end();
                black_box(detector.charset());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_utf8_tail, bench_gb2312_chunked);
criterion_main!(benches);
