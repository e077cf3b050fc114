//! Write a small synthetic artifact tree into the working directory so the
//! dashboard can be tried without the analysis notebooks.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

const STATES: [(&str, [&str; 2]); 5] = [
    ("Maharashtra", ["Pune", "Mumbai"]),
    ("Odisha", ["Cuttack", "Khordha"]),
    ("West Bengal", ["Kolkata", "Howrah"]),
    ("Madhya Pradesh", ["Indore", "Bhopal"]),
    ("Delhi", ["New Delhi", "North Delhi"]),
];
const YEARS: std::ops::RangeInclusive<u32> = 2017..=2022;
const GENDERS: [&str; 2] = ["Female", "Male"];
const AGE_GROUPS: [&str; 4] = ["0-18", "18-30", "30-45", "45+"];

/// Seeded xoshiro256**, small enough to keep in-tree instead of pulling in
/// `rand`. The same seed always writes the same artifact tree.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

/// Draw a plain bar chart: one bar per value, scaled to the tallest.
fn bar_chart(values: &[u64], color: Rgb<u8>) -> RgbImage {
    let (width, height) = (700u32, 400u32);
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let max = values.iter().copied().max().unwrap_or(1).max(1);
    let slot = width / values.len().max(1) as u32;

    for (i, &v) in values.iter().enumerate() {
        let bar_height = ((v as f64 / max as f64) * (height - 40) as f64) as u32;
        let x0 = i as u32 * slot + slot / 6;
        let x1 = (i as u32 + 1) * slot - slot / 6;
        for x in x0..x1.min(width) {
            for y in (height - 20 - bar_height)..(height - 20) {
                img.put_pixel(x, y, color);
            }
        }
    }
    // Baseline.
    for x in 0..width {
        img.put_pixel(x, height - 20, Rgb([38, 39, 48]));
    }
    img
}

fn write_png(path: &Path, img: &RgbImage) -> Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    fs::create_dir_all("data/cleaned").context("creating data/cleaned")?;
    fs::create_dir_all("visual").context("creating visual")?;
    fs::create_dir_all("streamlit").context("creating streamlit")?;

    // ---- Dataset ----
    let csv_path = Path::new("data/cleaned/cleaned_missing_data.csv");
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("creating {}", csv_path.display()))?;
    writer.write_record(["year", "state", "district", "gender", "age_group", "count"])?;

    let mut per_state = vec![0u64; STATES.len()];
    let mut per_year = vec![0u64; YEARS.clone().count()];
    let mut per_age_gender = vec![0u64; AGE_GROUPS.len() * GENDERS.len()];
    let mut rows = 0usize;

    for (yi, year) in YEARS.enumerate() {
        for (si, (state, districts)) in STATES.iter().enumerate() {
            for district in districts {
                for (gi, gender) in GENDERS.iter().enumerate() {
                    for (ai, age) in AGE_GROUPS.iter().enumerate() {
                        let count = rng.range(5, 400);
                        writer.write_record([
                            year.to_string().as_str(),
                            *state,
                            *district,
                            *gender,
                            *age,
                            count.to_string().as_str(),
                        ])?;
                        per_state[si] += count;
                        per_year[yi] += count;
                        per_age_gender[ai * GENDERS.len() + gi] += count;
                        rows += 1;
                    }
                }
            }
        }
    }
    writer.flush().context("flushing dataset")?;

    // ---- EDA charts ----
    let red = Rgb([255, 75, 75]);
    write_png(Path::new("visual/top_states.png"), &bar_chart(&per_state, red))?;
    write_png(Path::new("visual/year_trends.png"), &bar_chart(&per_year, red))?;
    write_png(
        Path::new("visual/age_gender_bar.png"),
        &bar_chart(&per_age_gender, Rgb([70, 110, 200])),
    )?;

    // ---- Heatmap fragment ----
    let cells: String = STATES
        .iter()
        .zip(&per_state)
        .map(|((state, _), total)| format!("  <tr><td>{state}</td><td>{total}</td></tr>\n"))
        .collect();
    let html = format!(
        "<table class=\"heatmap\">\n  <tr><th>State</th><th>Missing</th></tr>\n{cells}</table>\n"
    );
    fs::write("visual/missing_heatmap.html", html).context("writing heatmap")?;

    // ---- Dashboard pages ----
    for (i, name) in ["page1.png", "pag2.png", "page3.png", "page4.png"].iter().enumerate() {
        let values: Vec<u64> = (0..6).map(|_| rng.range(10, 100)).collect();
        let shade = 60 + 40 * i as u8;
        write_png(&Path::new("streamlit").join(name), &bar_chart(&values, Rgb([shade, 39, 48])))?;
    }

    println!(
        "Wrote {rows} dataset rows, 3 charts, 1 heatmap and 4 dashboard pages (no powerbi.pbix)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = SimpleRng::new(7);
        let mut b = SimpleRng::new(7);
        let xs: Vec<u64> = (0..16).map(|_| a.range(10, 20)).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.range(10, 20)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| (10..20).contains(v)));
    }
}
