/// Weight distribution bar chart
/// Draws one bar per chart entry with its weight label on top
use iced::widget::canvas::{self, Text};
use iced::{mouse, Color, Pixels, Point, Rectangle, Size};

use crate::state::statistics::{BarTone, WeightBar};
use crate::Message;

/// Horizontal gap between bars
const BAR_GAP: f32 = 10.0;

/// Space reserved above the tallest bar for its label
const LABEL_HEIGHT: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct WeightChart {
    pub bars: Vec<WeightBar>,
}

impl WeightChart {
    pub fn new(bars: Vec<WeightBar>) -> Self {
        Self { bars }
    }
}

/// Fill colour for a bar
pub fn tone_color(tone: BarTone) -> Color {
    match tone {
        BarTone::Heavy => Color::from_rgb(0.9, 0.2, 0.2),
        BarTone::Light => Color::from_rgb(0.2, 0.75, 0.3),
    }
}

impl canvas::Program<Message> for WeightChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let count = self.bars.len();
        if count == 0 {
            return vec![frame.into_geometry()];
        }

        // Scale so the heaviest bar fills the height below its label
        let max_weight = self
            .bars
            .iter()
            .map(|bar| bar.weight_kg)
            .max()
            .unwrap_or(1)
            .max(1) as f32;
        let scale = (bounds.height - LABEL_HEIGHT).max(0.0) / max_weight;
        let bar_width = ((bounds.width - BAR_GAP * count as f32) / count as f32).max(1.0);
        let label_color = theme.palette().text;

        for (i, bar) in self.bars.iter().enumerate() {
            let x = i as f32 * (bar_width + BAR_GAP);
            let bar_height = bar.weight_kg as f32 * scale;
            let y = bounds.height - bar_height;

            frame.fill_rectangle(
                Point::new(x, y),
                Size::new(bar_width, bar_height),
                tone_color(bar.tone),
            );

            frame.fill_text(Text {
                content: format!("{} кг", bar.weight_kg),
                position: Point::new(x, y - LABEL_HEIGHT),
                color: label_color,
                size: Pixels(12.0),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::statistics::weight_bars;

    #[test]
    fn test_tone_colors_differ() {
        assert_ne!(tone_color(BarTone::Heavy), tone_color(BarTone::Light));
    }

    #[test]
    fn test_chart_keeps_bar_order() {
        let chart = WeightChart::new(weight_bars());
        let weights: Vec<u32> = chart.bars.iter().map(|bar| bar.weight_kg).collect();
        assert_eq!(weights, [2, 5, 15, 35, 50]);
    }
}
