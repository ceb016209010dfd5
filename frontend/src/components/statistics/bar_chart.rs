use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::pie_chart::SLICE_COLORS;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    /// Category -> summed amount, already placeholder-substituted so it is
    /// never empty.
    pub data: Vec<(String, f64)>,
}

/// Canvas bar chart over a category-sum mapping, one bar per category.
pub struct BarChart {
    canvas_ref: NodeRef,
}

impl Component for BarChart {
    type Message = ();
    type Properties = BarChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().data);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="bar-chart-canvas"
                    width="600"
                    height="400"
                ></canvas>
            </div>
        }
    }
}

impl BarChart {
    fn draw(&self, data: &[(String, f64)]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(600);
        canvas.set_height(400);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = data.iter().map(|(category, _)| category.clone()).collect();
        // Keep a visible axis even when every bar is zero (the placeholder).
        let y_max = data
            .iter()
            .map(|(_, value)| *value)
            .fold(0.0_f64, f64::max)
            .max(1.0)
            * 1.1;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..data.len() as u32 - 1).into_segmented(), 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Total amount")
            .y_label_formatter(&|value| format!("${:.0}", value))
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) => {
                    labels.get(*index as usize).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_labels(labels.len())
            .label_style(("sans-serif", 12))
            .draw()
            .is_err()
        {
            return;
        }

        if chart
            .draw_series(data.iter().enumerate().map(|(index, (_, total))| {
                let color = SLICE_COLORS[index % SLICE_COLORS.len()];
                let left = SegmentValue::Exact(index as u32);
                let right = SegmentValue::Exact(index as u32 + 1);
                Rectangle::new([(left, 0.0), (right, *total)], color.filled())
            }))
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_hold_the_mapping() {
        let props = BarChartProps {
            data: vec![("No Data".to_string(), 0.0)],
        };
        assert_eq!(props.data[0].1, 0.0);
    }

    #[test]
    fn draw_without_data_returns_early() {
        let chart = BarChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[]);
    }

    #[test]
    fn draw_without_canvas_returns_early() {
        let chart = BarChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[("A".to_string(), 15.0), ("B".to_string(), 3.0)]);
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn component_draws_without_panicking_in_browser() {
        let chart = BarChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[("Transport".to_string(), 3.0)]);
    }
}
