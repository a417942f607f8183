//! # Text Preview
//!
//! Renders a noise field as a character grid for headless inspection.

use timberlands_procedural::NoiseField;

/// Characters from low to high noise.
pub const RAMP: &[u8] = b" .:-=+*#%@";

/// Renders `width` x `height` cells, sampling the field every `scale` units.
///
/// Each row ends with a newline. A zero width or height yields an empty
/// string.
#[must_use]
pub fn render_ascii(noise: &NoiseField, width: usize, height: usize, scale: f32) -> String {
    let mut out = String::with_capacity((width + 1) * height);
    let levels = RAMP.len() as u32;

    for row in 0..height {
        if width == 0 {
            break;
        }
        let y = row as f32 * scale;
        for col in 0..width {
            let x = col as f32 * scale;
            let level = noise.sample_discrete(x, y, levels) as usize;
            out.push(char::from(RAMP[level.min(RAMP.len() - 1)]));
        }
        out.push('\n');
    }

    out
}

/// One-line summary of a field's value range over the previewed area.
#[must_use]
pub fn describe_range(noise: &NoiseField, width: usize, height: usize, scale: f32) -> String {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for row in 0..height {
        for col in 0..width {
            let value = noise.sample(col as f32 * scale, row as f32 * scale);
            min = min.min(value);
            max = max.max(value);
        }
    }

    if min > max {
        return String::from("empty preview");
    }
    format!("noise range [{min:.3}, {max:.3}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use timberlands_procedural::WorldSeed;

    #[test]
    fn test_grid_shape() {
        let noise = NoiseField::new(WorldSeed::new(42));
        let text = render_ascii(&noise, 16, 4, 0.25);

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 16));
        assert!(text.bytes().filter(|b| *b != b'\n').all(|b| RAMP.contains(&b)));
    }

    #[test]
    fn test_deterministic() {
        let a = render_ascii(&NoiseField::new(WorldSeed::new(9)), 20, 10, 0.3);
        let b = render_ascii(&NoiseField::new(WorldSeed::new(9)), 20, 10, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let noise = NoiseField::new(WorldSeed::new(1));
        assert_eq!(render_ascii(&noise, 0, 5, 1.0), "");
        assert_eq!(render_ascii(&noise, 5, 0, 1.0), "");
        assert_eq!(describe_range(&noise, 0, 0, 1.0), "empty preview");
    }

    #[test]
    fn test_range_line() {
        let noise = NoiseField::new(WorldSeed::new(1));
        let line = describe_range(&noise, 8, 8, 0.4);
        assert!(line.starts_with("noise range ["));
    }
}
