//! Markdown hit list.
//!
//! Renders every measurement point inside a ```` ```diff ```` fence so
//! that hit points show up green (`+`) and missed points red (`-`) in
//! any markdown viewer.

use super::write_text;
use crate::aggregator::MeasurementPoints;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Render the diff-fenced hit list
pub fn render_hit_list(points: &MeasurementPoints) -> String {
    let mut out = String::from("```diff\n");
    for (id, hit) in points.iter() {
        let prefix = if hit { '+' } else { '-' };
        out.push_str(&format!("{} point {}\n", prefix, id));
    }
    out.push_str("```\n");
    out
}

/// Write the hit list to `output_path`
pub fn write_hit_list(points: &MeasurementPoints, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing markdown hit list to: {}", output_path.display());
    write_text(&render_hit_list(points), output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hit_list() {
        let mut points = MeasurementPoints::new(3);
        points.mark(1, 3).unwrap();

        assert_eq!(
            render_hit_list(&points),
            "```diff\n- point 1\n- point 2\n+ point 3\n```\n"
        );
    }

    #[test]
    fn test_render_no_points() {
        assert_eq!(render_hit_list(&MeasurementPoints::new(0)), "```diff\n```\n");
    }
}
