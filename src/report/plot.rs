use std::path::Path;

use plotly::color::NamedColor;
use plotly::common::{Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use tracing::info;

use crate::data::dataset::{Dataset, TrainingExample};
use crate::error::Result;
use crate::train::loss_record::LossRecord;

/// Line chart of average loss against epoch.
pub fn loss_curve(records: &[LossRecord]) -> Plot {
    let epochs: Vec<usize> = records.iter().map(|r| r.epoch).collect();
    let losses: Vec<f64> = records.iter().map(|r| r.average_loss).collect();

    let trace = Scatter::new(epochs, losses)
        .mode(Mode::Lines)
        .name("Training Loss")
        .line(Line::new().color(NamedColor::Red));

    let layout = Layout::new()
        .title(Title::new("Neural Network Training Loss"))
        .x_axis(Axis::new().title(Title::new("Epoch")))
        .y_axis(Axis::new().title(Title::new("Average Loss")));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Scatter of the training inputs, one trace per class (target below or at
/// least 0.5). Only the first two input features are plotted.
pub fn data_distribution(dataset: &Dataset) -> Plot {
    let (class0, class1): (Vec<_>, Vec<_>) = dataset.iter()
        .partition(|ex| ex.target < 0.5);

    let coords = |examples: &[&TrainingExample]| -> (Vec<f64>, Vec<f64>) {
        examples.iter()
            .map(|ex| (ex.input[0], ex.input.get(1).copied().unwrap_or(0.0)))
            .unzip()
    };

    let mut plot = Plot::new();
    if !class0.is_empty() {
        let (x, y) = coords(&class0);
        plot.add_trace(
            Scatter::new(x, y)
                .mode(Mode::Markers)
                .name("Class 0 (XOR=0)")
                .marker(Marker::new().color(NamedColor::Blue).symbol(MarkerSymbol::Square).size(16)),
        );
    }
    if !class1.is_empty() {
        let (x, y) = coords(&class1);
        plot.add_trace(
            Scatter::new(x, y)
                .mode(Mode::Markers)
                .name("Class 1 (XOR=1)")
                .marker(Marker::new().color(NamedColor::Red).symbol(MarkerSymbol::Circle).size(16)),
        );
    }

    let layout = Layout::new()
        .title(Title::new("XOR Training Data"))
        .x_axis(Axis::new().title(Title::new("Input 1")).range(vec![-0.2, 1.2]))
        .y_axis(Axis::new().title(Title::new("Input 2")).range(vec![-0.2, 1.2]));
    plot.set_layout(layout);
    plot
}

pub fn loss_curve_html(records: &[LossRecord]) -> String {
    loss_curve(records).to_html()
}

pub fn data_distribution_html(dataset: &Dataset) -> String {
    data_distribution(dataset).to_html()
}

/// Writes the loss curve as a standalone HTML page.
pub fn write_loss_curve<P: AsRef<Path>>(records: &[LossRecord], path: P) -> Result<()> {
    std::fs::write(path.as_ref(), loss_curve_html(records))?;
    info!(path = %path.as_ref().display(), "loss plot saved");
    Ok(())
}

/// Writes the training data scatter as a standalone HTML page.
pub fn write_data_distribution<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    std::fs::write(path.as_ref(), data_distribution_html(dataset))?;
    info!(path = %path.as_ref().display(), "data distribution plot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_curve_page_names_its_trace() {
        let records = [
            LossRecord { epoch: 0, average_loss: 0.3 },
            LossRecord { epoch: 1000, average_loss: 0.05 },
        ];
        let html = loss_curve_html(&records);
        assert!(html.contains("Training Loss"));
        assert!(html.contains("Neural Network Training Loss"));
    }

    #[test]
    fn data_plot_has_both_classes() {
        let html = data_distribution_html(&Dataset::xor());
        assert!(html.contains("Class 0 (XOR=0)"));
        assert!(html.contains("Class 1 (XOR=1)"));
    }
}
