use anyhow::Result;

use wheelslider_core::{AppConfig, SliderModel};
use wheelslider_tui::widgets::format_value;

/// Where a value lands on the wheel
#[derive(Debug, PartialEq)]
struct Placement {
    /// Unclamped index; may fall outside the track
    index: i64,
    /// Tick the wheel would center on mount
    clamped: usize,
    /// Value written back if the wheel settles there
    snapped: f64,
}

fn place(model: &SliderModel, value: f64) -> Placement {
    Placement {
        index: model.index_for_value(value),
        clamped: model.clamped_index_for_value(value),
        snapped: model.snap_value(value),
    }
}

pub fn run(config: &AppConfig) -> Result<()> {
    let model = config.slider.model()?;
    let value = config.slider.value;
    let placement = place(&model, value);

    println!("value:         {}", value);
    println!("index:         {}", placement.index);
    println!("clamped index: {} of {}", placement.clamped, model.step_count());
    println!("snapped value: {}", format_value(placement.snapped, &model));
    if !model.range().contains(value) {
        println!("(value is outside {}..={})", model.range().lower, model.range().upper);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use wheelslider_core::{IndexRounding, StepSpec, ValueRange};

    use super::*;

    fn model() -> SliderModel {
        SliderModel::new(ValueRange::new(0.0, 30.0), StepSpec::Step(0.5)).unwrap()
    }

    #[test]
    fn test_place_in_range() {
        assert_eq!(
            place(&model(), 5.0),
            Placement {
                index: 10,
                clamped: 10,
                snapped: 5.0
            }
        );
        assert_eq!(place(&model(), 5.3).snapped, 5.0);
    }

    #[test]
    fn test_place_nearest() {
        let nearest = model().with_rounding(IndexRounding::Nearest);
        assert_eq!(place(&nearest, 5.3).snapped, 5.5);
    }

    #[test]
    fn test_place_out_of_range() {
        let placement = place(&model(), -5.0);
        assert_eq!(placement.index, -10);
        assert_eq!(placement.clamped, 0);
        assert_eq!(placement.snapped, 0.0);
        assert_eq!(place(&model(), 99.0).clamped, 60);
    }
}
