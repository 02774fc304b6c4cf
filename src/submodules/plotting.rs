use std::path::Path;

use plotters::prelude::*;

use super::scheil_curve::ScheilCurve;

const KELVIN_OFFSET: f64 = 273.15;

/// Renders one solidification curve as `<output_dir>/<index>.png`, one line
/// series per stable-phase segment, temperatures converted to Celsius.
pub fn plot_scheil_curve(curve: &ScheilCurve, index: usize, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Nothing to draw for a curve without samples.
    let Some((temp_min, temp_max)) = curve.temperature_range() else {
        return Ok(());
    };
    let path = output_dir.join(format!("{}.png", index));
    let y_spec = (temp_min - KELVIN_OFFSET)..(temp_max - KELVIN_OFFSET);

    let root = BitMapBackend::new(&path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Scheil solidification path #{}", index), ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0_f64..1.0_f64, y_spec)?;

    chart
        .configure_mesh()
        .x_desc("Mole fraction of all solid phases [-]")
        .y_desc("Temperature [deg C]")
        .draw()?;

    for (series_index, segment) in curve.segments.iter().enumerate() {
        let color = Palette99::pick(series_index).to_rgba();
        chart
            .draw_series(LineSeries::new(
                segment
                    .fraction_solid
                    .iter()
                    .zip(segment.temperature.iter())
                    .map(|(&fraction, &temp)| (fraction, temp - KELVIN_OFFSET)),
                &color,
            ))?
            .label(segment.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
