// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV (numeric or RFC 3339 x values), builds line, spline and area paths,
//          then steps the animator through first paint, an appended point and a removed point.

use anyhow::{Context, Result};
use chart_anim::{
    AnimationConfig, AnimationStore, DataPoint, DateTimeInterval, PathAnimator, PathFrame, PathRequest, RenderOptions,
    Series, SeriesKind, SplineOptions, SplineType, XValueType,
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

const STEPS: usize = 4;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv")));
    let config = match args.next() {
        Some(path) => AnimationConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => AnimationConfig::default(),
    };
    println!("Using input file: {}", input.display());

    let (points, x_type) = load_xy_csv(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    if points.len() < 2 {
        anyhow::bail!("need at least two rows of x,y data");
    }
    println!("Loaded {} points ({:?} x axis)", points.len(), x_type);

    let animator = PathAnimator::new(&config);
    let kinds = [SeriesKind::Line, SeriesKind::Spline(SplineType::Natural), SeriesKind::Area];
    let spline = SplineOptions::from_config(SplineType::Natural, &config).with_x_type(x_type);
    let mut series: Vec<Series> = kinds
        .iter()
        .map(|&kind| Series { points: points.clone(), ..Series::new(kind).with_spline_options(spline) })
        .collect();
    let mut store = AnimationStore::new();

    println!("\n== first paint ==");
    run_pass(&animator, &mut store, &series);

    let next = extrapolate(&points);
    for s in &mut series {
        s.push(next);
    }
    println!("\n== point appended at x={} ==", next.x_value);
    run_pass(&animator, &mut store, &series);

    for s in &mut series {
        let last = s.points.len().saturating_sub(1);
        s.remove(last);
        s.remove(last.saturating_sub(1));
    }
    println!("\n== last two points removed ==");
    run_pass(&animator, &mut store, &series);

    Ok(())
}

/// One progress sequence 0..=1 over every series, committing at the end.
fn run_pass(animator: &PathAnimator, store: &mut AnimationStore, series: &[Series]) {
    let options: Vec<RenderOptions> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let opts = RenderOptions::new(format!("series-{i}"), s.path().serialize()).with_stroke("#40a0ff", 2.0);
            if s.kind.is_spline() { opts.with_dash_array("6 3") } else { opts }
        })
        .collect();

    for step in 0..=STEPS {
        let progress = step as f64 / STEPS as f64;
        store.set_progress(progress);
        for (i, (s, opts)) in series.iter().zip(&options).enumerate() {
            let req = PathRequest::new(opts, i, s.kind);
            let phase = animator.classify(store, &req);
            let frame = animator.animate(store, &req);
            println!("  p={progress:.2} {:<22} {:<14} {}", format!("{:?}", s.kind), format!("{phase:?}"), describe(&frame, opts));
        }
        store.finish_frame();
    }
}

fn describe(frame: &PathFrame, opts: &RenderOptions) -> String {
    let d = frame.effective_d(opts);
    let shown = if d.chars().count() > 72 { format!("{}…", d.chars().take(72).collect::<String>()) } else { d.to_string() };
    format!("dash={} offset={:.2} d={}", frame.stroke_dasharray, frame.stroke_dashoffset, shown)
}

/// Next point one step past the last, continuing the final slope.
fn extrapolate(points: &[DataPoint]) -> DataPoint {
    let n = points.len();
    let (a, b) = (points[n - 2], points[n - 1]);
    DataPoint::new(2.0 * b.x_value - a.x_value, 2.0 * b.y_value - a.y_value)
}

/// Loads `x,y` rows. x is numeric or an RFC 3339 timestamp; timestamps switch the axis to date-time.
fn load_xy_csv(path: &Path) -> Result<(Vec<DataPoint>, XValueType)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    let mut saw_dates = false;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let (Some(x), Some(y)) = (rec.get(0), rec.get(1)) else {
            log::warn!("row {row}: expected two columns");
            continue;
        };
        let Ok(y) = y.parse::<f64>() else {
            log::warn!("row {row}: y value {y:?} is not a number");
            continue;
        };
        if let Ok(x) = x.parse::<f64>() {
            out.push(DataPoint::new(x, y));
        } else {
            let at = DateTime::parse_from_rfc3339(x).with_context(|| format!("row {row}: x value {x:?}"))?;
            out.push(DataPoint::from_datetime(at.with_timezone(&Utc), y));
            saw_dates = true;
        }
    }
    let x_type = if saw_dates { XValueType::DateTime(DateTimeInterval::Days) } else { XValueType::Double };
    Ok((out, x_type))
}
