use anyhow::Result;
use gascost_chart::{Axis, Chart, Marker, LineStyle, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(series: usize, points: usize) -> Chart {
    let mut ch = Chart::new();
    for s in 0..series {
        let data = (0..points)
            .map(|i| {
                let x = 10.0 + 3.0 * i as f64;
                (x, (s + 1) as f64 * (1.0 + (x * 0.1).sin()))
            })
            .collect();
        let style = LineStyle::new(gascost_chart::Color::from_argb(255, 40 * s as u8, 0, 200)).with_marker(Marker::Circle);
        ch.add_series(Series::with_data(format!("series {s}"), data).with_style(style));
    }
    ch.y_axis = Axis::new("Y", 0.0, 14.0);
    ch.autoscale_x(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &points in &[6usize, 1_000usize] {
        let ch = build_chart(5, points);
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        group.bench_function(format!("pdf_{points}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(ch.render_to_pdf_bytes(&opts)?);
                Ok(())
            });
        });
        group.bench_function(format!("png_{points}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(ch.render_to_png_bytes(&opts)?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
