//! Frame latency runner (prints p50/p95/p99 in microseconds) for local checks.
//! Run with: cargo run --release --example bench_latency

use std::time::Instant;

use softview::{demo, Canvas, Compositing, FrameInput, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let iterations: usize = std::env::var("BENCH_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let warmup = 10usize;
    let threshold_us: u64 = std::env::var("PERF_P95_THRESHOLD_US")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(50_000);

    let mut failed = false;
    for compositing in [Compositing::Direct, Compositing::Offscreen] {
        let mut app = demo::app(RenderConfig { compositing, ..Default::default() });
        let mut frame = Canvas::new(0, 0);
        let input = FrameInput::new(640, 480).with_pointer(420.0, 240.0);

        for _ in 0..warmup {
            app.update(&input, &mut frame);
        }

        let mut samples = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let t0 = Instant::now();
            app.update(&input, &mut frame);
            samples.push(t0.elapsed().as_micros() as u64);
        }
        samples.sort_unstable();

        let p50 = percentile(&samples, 50.0);
        let p95 = percentile(&samples, 95.0);
        let p99 = percentile(&samples, 99.0);
        println!(
            "{:?}: p50={}us p95={}us p99={}us (threshold={}us)",
            compositing, p50, p95, p99, threshold_us
        );
        if p95 > threshold_us {
            eprintln!("Performance regression ({:?}): p95 {}us > threshold {}us", compositing, p95, threshold_us);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn percentile(samples: &[u64], pct: f64) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let n = samples.len();
    let rank = ((pct / 100.0) * (n as f64)).ceil() as usize;
    samples[rank.saturating_sub(1).min(n - 1)]
}
