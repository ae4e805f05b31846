use crate::core::checks::pillar_score;
use crate::domain::model::{
    ColorReport, ContrastCheck, GrayscaleCheck, PairContrast, PaletteSafety, Thresholds,
};
use crate::utils::error::{LintError, Result};

/// Parses `#rrggbb` (leading `#` optional) into RGB normalized to [0,1].
pub fn hex_to_rgb(hex: &str) -> Result<[f64; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LintError::ColorParseError {
            value: hex.to_string(),
            reason: "expected #rrggbb".to_string(),
        });
    }

    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|e| {
            LintError::ColorParseError {
                value: hex.to_string(),
                reason: e.to_string(),
            }
        })?;
        *channel = f64::from(byte) / 255.0;
    }
    Ok(rgb)
}

/// WCAG relative luminance: channels below 0.03928 are divided by 12.92,
/// the rest gamma-expanded with ((c+0.055)/1.055)^2.4.
pub fn relative_luminance(rgb: [f64; 3]) -> f64 {
    fn channel_lum(c: f64) -> f64 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    let [r, g, b] = rgb;
    0.2126 * channel_lum(r) + 0.7152 * channel_lum(g) + 0.0722 * channel_lum(b)
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
pub fn contrast_ratio(a: [f64; 3], b: [f64; 3]) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Color-pillar checks over a palette and its background.
pub struct ColorChecks {
    palette: Vec<String>,
    background: String,
}

impl ColorChecks {
    pub fn new(palette: Vec<String>, background: String) -> Self {
        Self {
            palette,
            background,
        }
    }

    fn rgb_values(&self) -> Result<Vec<[f64; 3]>> {
        self.palette.iter().map(|c| hex_to_rgb(c)).collect()
    }

    /// Rudimentary red-green confusion scan over consecutive palette pairs.
    pub fn check_palette_safety(&self) -> Result<PaletteSafety> {
        let rgb_values = self.rgb_values()?;
        let mut safe = true;
        for window in rgb_values.windows(2) {
            let [r1, g1, _] = window[0];
            let [r2, g2, _] = window[1];
            if (r1 - g1).abs() < 0.2 && (r2 - g2).abs() < 0.2 {
                safe = false;
                break;
            }
        }
        let message = if safe {
            "Colorblind-safe"
        } else {
            "Red/Green confusion risk"
        };
        Ok(PaletteSafety {
            safe,
            message: message.to_string(),
        })
    }

    /// Contrast of each palette color against the background.
    pub fn check_background_contrast(&self, min_ratio: f64) -> Result<Vec<ContrastCheck>> {
        let background = hex_to_rgb(&self.background)?;
        let mut results = Vec::new();
        for color in &self.palette {
            let ratio = round2(contrast_ratio(hex_to_rgb(color)?, background));
            results.push(ContrastCheck {
                color: color.clone(),
                ratio,
                pass: ratio >= min_ratio,
            });
        }
        Ok(results)
    }

    /// Contrast between consecutive palette colors.
    pub fn check_adjacent_contrast(&self, min_ratio: f64) -> Result<Vec<PairContrast>> {
        let rgb_values = self.rgb_values()?;
        let mut results = Vec::new();
        for i in 0..self.palette.len().saturating_sub(1) {
            let ratio = round2(contrast_ratio(rgb_values[i], rgb_values[i + 1]));
            results.push(PairContrast {
                pair: (self.palette[i].clone(), self.palette[i + 1].clone()),
                ratio,
                pass: ratio >= min_ratio,
            });
        }
        Ok(results)
    }

    /// Colors must remain distinguishable when reduced to luminance alone.
    pub fn check_grayscale(&self) -> Result<GrayscaleCheck> {
        let luminances: Vec<f64> = self
            .rgb_values()?
            .into_iter()
            .map(|rgb| round2(relative_luminance(rgb)))
            .collect();

        // 以百分位整數比較，避免浮點相等問題
        let mut cents: Vec<i64> = luminances
            .iter()
            .map(|l| (l * 100.0).round() as i64)
            .collect();
        cents.sort_unstable();
        cents.dedup();
        let unique = cents.len() == luminances.len();

        Ok(GrayscaleCheck { unique, luminances })
    }

    pub fn run_all(&self, thresholds: &Thresholds) -> Result<ColorReport> {
        let palette_safety = self.check_palette_safety()?;
        let background_contrast = self.check_background_contrast(thresholds.text_contrast)?;
        let adjacent_contrast = self.check_adjacent_contrast(thresholds.graphic_contrast)?;
        let grayscale_test = self.check_grayscale()?;

        let passed = usize::from(palette_safety.safe)
            + usize::from(background_contrast.iter().all(|c| c.pass))
            + usize::from(adjacent_contrast.iter().all(|c| c.pass))
            + usize::from(grayscale_test.unique);
        let score = pillar_score(passed, 4);

        Ok(ColorReport {
            palette_safety,
            background_contrast,
            adjacent_contrast,
            grayscale_test,
            score,
        })
    }
}
