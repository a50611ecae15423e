// File: crates/gascost-chart/src/grid.rs
// Summary: Grid/tick layout helpers (evenly spaced values, "nice" tick steps, tick labels).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Step from the 1-2-2.5-5-10 ladder closest to `span / target` from above.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick values inside `[min, max]` (either order) on a nice step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() { return Vec::new(); }
    let step = nice_step(hi - lo, target);
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // avoid printing "-0"
            if v.abs() < eps { 0.0 } else { v }
        })
        .collect()
}

/// Decimal places needed to tell ticks `step` apart.
pub fn tick_decimals(step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) { return 0; }
    let mut decimals = 0usize;
    let mut scaled = step;
    while decimals < 12 && (scaled - scaled.round()).abs() > 1e-6 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Format all ticks with a shared precision.
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let step = ticks.windows(2).map(|w| (w[1] - w[0]).abs()).fold(f64::INFINITY, f64::min);
    let decimals = if step.is_finite() {
        tick_decimals(step)
    } else {
        ticks.first().map(|v| tick_decimals(v.abs())).unwrap_or(0)
    };
    ticks.iter().map(|v| format!("{:.*}", decimals, v)).collect()
}
