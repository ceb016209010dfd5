use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Slice palette shared by the pie and bar charts, cycled when a mapping has
/// more categories than colors.
pub const SLICE_COLORS: [RGBColor; 5] = [
    RGBColor(255, 99, 132),
    RGBColor(54, 162, 235),
    RGBColor(255, 206, 86),
    RGBColor(75, 192, 192),
    RGBColor(153, 102, 255),
];

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    /// Category -> summed amount, already placeholder-substituted so it is
    /// never empty.
    pub data: Vec<(String, f64)>,
}

/// Canvas pie chart over a category-sum mapping, with percentage labels.
pub struct PieChart {
    canvas_ref: NodeRef,
}

impl Component for PieChart {
    type Message = ();
    type Properties = PieChartProps;

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
                    class="pie-chart-canvas"
                    width="500"
                    height="400"
                ></canvas>
            </div>
        }
    }
}

impl PieChart {
    fn draw(&self, data: &[(String, f64)]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(500);
        canvas.set_height(400);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let total: f64 = data.iter().map(|(_, value)| *value).sum();
        let labels: Vec<String> = data.iter().map(|(category, _)| category.clone()).collect();
        // A zero-total mapping (the placeholder) still gets a full circle.
        let sizes: Vec<f64> = if total > 0.0 {
            data.iter().map(|(_, value)| *value).collect()
        } else {
            vec![1.0; data.len()]
        };
        let colors: Vec<RGBColor> = data
            .iter()
            .enumerate()
            .map(|(i, _)| SLICE_COLORS[i % SLICE_COLORS.len()])
            .collect();

        let center = (250, 200);
        let radius = 140.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        if total > 0.0 {
            pie.percentages(("sans-serif", 13).into_font().color(&BLACK));
        }

        if root.draw(&pie).is_err() {
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
        let props = PieChartProps {
            data: vec![("A".to_string(), 15.0), ("B".to_string(), 3.0)],
        };
        assert_eq!(props.data.len(), 2);
        assert_eq!(props.data[0].0, "A");
    }

    #[test]
    fn draw_without_data_returns_early() {
        let chart = PieChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[]);
    }

    #[test]
    fn draw_without_canvas_returns_early() {
        // No canvas is attached outside the browser, so drawing must bail
        // out before touching the backend.
        let chart = PieChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[("No Data".to_string(), 0.0)]);
    }

    #[test]
    fn palette_cycles_for_long_mappings() {
        assert_eq!(SLICE_COLORS[7 % SLICE_COLORS.len()], SLICE_COLORS[2]);
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn component_draws_without_panicking_in_browser() {
        let chart = PieChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[("Groceries".to_string(), 15.0)]);
    }
}
