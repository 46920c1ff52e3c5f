use anyhow::Result;

use wheelslider_core::{AppConfig, SliderModel};
use wheelslider_tui::widgets::format_value;

pub fn run(config: &AppConfig) -> Result<()> {
    let model = config.slider.model()?;
    println!(
        "{} ticks from {} to {} (step {})\n",
        model.tick_count(),
        format_value(model.range().lower, &model),
        format_value(model.range().upper, &model),
        model.step()
    );
    for line in lattice_lines(&model) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per tick: index, value and a marker on major ticks
fn lattice_lines(model: &SliderModel) -> Vec<String> {
    model
        .lattice()
        .map(|(index, value)| {
            let marker = if model.is_major(index) { "  |" } else { "" };
            format!("{:>6}  {}{}", index, format_value(value, model), marker)
        })
        .collect()
}
