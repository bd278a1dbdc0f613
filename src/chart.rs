use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::info;

/// Fixed bucket count for the price histogram.
pub const BUCKETS: usize = 10;

/// Equal-width partition of `[min, max]` into `buckets` intervals. Bucket i
/// counts prices in `[lower, upper)`; the last bucket includes the upper
/// bound. A degenerate span (all prices equal) collapses into bucket 0.
/// Counts always sum to `prices.len()`.
pub fn bucket_counts(prices: &[u64], buckets: usize) -> Vec<usize> {
    let mut counts = vec![0usize; buckets];
    let Some((min, max)) = min_max(prices) else {
        return counts;
    };
    let span = (max - min) as f64;
    let width = span / buckets as f64;
    for &price in prices {
        let idx = if span == 0.0 {
            0
        } else {
            ((((price - min) as f64) / width) as usize).min(buckets - 1)
        };
        counts[idx] += 1;
    }
    counts
}

fn min_max(prices: &[u64]) -> Option<(u64, u64)> {
    let first = *prices.first()?;
    Some(
        prices
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}

/// Render the price histogram to an SVG at `path`, overwriting any previous
/// artifact. Axis labels are Korean; the SVG backend emits them as plain
/// `<text>` nodes, so glyph coverage is the viewer's problem, not ours.
pub fn render_histogram(prices: &[u64], path: &Path) -> Result<()> {
    let Some((min, max)) = min_max(prices) else {
        anyhow::bail!("cannot chart an empty price list");
    };
    let counts = bucket_counts(prices, BUCKETS);

    // Keep the x range drawable when every price is identical.
    let (lo, hi) = if min == max {
        (min as f64 - 1.0, max as f64 + 1.0)
    } else {
        (min as f64, max as f64)
    };
    let bar_width = (hi - lo) / BUCKETS as f64;
    let y_max = counts.iter().copied().max().unwrap_or(0) as u32 + 1;

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("가격대별 상품 분포", ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(48)
        .build_cartesian_2d(lo..hi, 0u32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("가격 (원)")
        .y_desc("상품 수")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 12))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + bar_width * i as f64;
        Rectangle::new(
            [(x0, 0u32), (x0 + bar_width, count as u32)],
            BLUE.mix(0.7).filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    info!(path = %path.display(), "chart written");
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u64; 7] = [3500, 1980, 19800, 69900, 7980, 4900, 99000];

    #[test]
    fn counts_sum_to_input_len() {
        for prices in [
            &SAMPLE[..],
            &[100][..],
            &[5, 5, 5][..],
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10][..],
        ] {
            let counts = bucket_counts(prices, BUCKETS);
            assert_eq!(counts.iter().sum::<usize>(), prices.len());
        }
    }

    #[test]
    fn max_lands_in_last_bucket() {
        let counts = bucket_counts(&[0, 100], 10);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn lower_bound_inclusive_upper_exclusive() {
        // width = 10: 50 belongs to [50, 60), i.e. bucket 5
        let counts = bucket_counts(&[0, 50, 100], 10);
        assert_eq!(counts[5], 1);
    }

    #[test]
    fn identical_prices_collapse_to_first_bucket() {
        let counts = bucket_counts(&[4900, 4900, 4900], 10);
        assert_eq!(counts[0], 3);
        assert_eq!(counts[1..].iter().sum::<usize>(), 0);
    }

    #[test]
    fn empty_prices_all_zero() {
        let counts = bucket_counts(&[], 10);
        assert_eq!(counts, vec![0; 10]);
    }

    #[test]
    fn render_writes_svg() {
        let path = std::env::temp_dir().join("ssg_trend_render_test.svg");
        render_histogram(&SAMPLE, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn render_to_unwritable_path_errors() {
        let path = std::env::temp_dir().join("ssg_trend_no_such_dir/out.svg");
        assert!(render_histogram(&SAMPLE, &path).is_err());
    }

    #[test]
    fn render_empty_errors() {
        let path = std::env::temp_dir().join("ssg_trend_empty_test.svg");
        assert!(render_histogram(&[], &path).is_err());
        assert!(!path.exists());
    }
}
