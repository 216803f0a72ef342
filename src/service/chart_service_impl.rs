use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::dto::data_point::*;
use crate::enums::vcs_type::*;
use crate::model::{chart::chart_frame::*, sources::category_set::*};
use crate::utils_modules::{color_utils::*, io_utils::*};

use plotly::{
    Layout, Plot, Scatter,
    color::Rgb as PlotlyRgb,
    common::{Anchor, Line, Mode, Title},
    layout::Legend,
};
use plotters::coord::Shift;
use plotters::prelude::*;

const CHART_TITLE: &str = "Sources count";
const BACKGROUND_COLOR: RGBColor = RGBColor(20, 20, 20);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
    categories: CategorySet,
}

impl ChartServiceImpl {
    fn build_frame(&self, series: &[DataPoint]) -> anyhow::Result<ChartFrame> {
        let palette: Vec<(VcsType, Rgb)> = palette_for(&self.categories)
            .context("[ChartServiceImpl->build_frame] failed to assign category colors")?;

        Ok(ChartFrame::build(CHART_TITLE, series, &palette))
    }

    #[doc = r#"
        Draws the static line chart image.

        1. Creates the parent directory of `output_path` when missing
        2. Picks the svg backend for a `.svg` extension, the bitmap backend otherwise
        3. Draws on a blocking thread, since plotters is synchronous

        # Arguments
        * `frame` - dates, per-category values and colours to plot
        * `output_path` - image file, overwritten when it exists

        # Errors
        - the directory or file cannot be written
        - the blocking task panics or a drawing call fails
    "#]
    async fn render_image(&self, frame: &ChartFrame, output_path: &Path) -> anyhow::Result<()> {
        ensure_parent_dir(output_path)?;

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let is_svg: bool = output_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        let size: (u32, u32) = (self.width, self.height);
        let frame: ChartFrame = frame.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                if is_svg {
                    let root = SVGBackend::new(&output_path_str, size).into_drawing_area();
                    draw_line_chart(root, &frame)
                } else {
                    let root = BitMapBackend::new(&output_path_str, size).into_drawing_area();
                    draw_line_chart(root, &frame)
                }
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_image] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->render_image] drawing/present failed")?;

        info!("Line chart image generated successfully: {:?}", output_path);

        Ok(())
    }

    #[doc = r#"
        Writes the same chart as an interactive plotly html page.

        One lines-mode trace per category, with the legend anchored top-left.
        The plotly.js bundle is inlined into the page, so it opens without
        network access.

        # Arguments
        * `frame` - dates, per-category values and colours to plot
        * `output_path` - html file, overwritten when it exists

        # Errors
        The directory or file cannot be written.
    "#]
    fn render_html(&self, frame: &ChartFrame, output_path: &Path) -> anyhow::Result<()> {
        ensure_parent_dir(output_path)?;

        let mut plot: Plot = Plot::new();

        for line in frame.lines() {
            let (r, g, b) = line.color().to_rgb8();

            let trace = Scatter::new(frame.date_labels().clone(), line.values().clone())
                .name(line.vcs().as_str())
                .mode(Mode::Lines)
                .line(Line::new().color(PlotlyRgb::new(r, g, b)));

            plot.add_trace(trace);
        }

        let layout: Layout = Layout::new().title(Title::from(frame.title().as_str())).legend(
            Legend::new()
                .x(0.0)
                .y(1.0)
                .x_anchor(Anchor::Left)
                .y_anchor(Anchor::Top),
        );
        plot.set_layout(layout);

        fs::write(output_path, plot.to_html()).with_context(|| {
            format!(
                "[ChartServiceImpl->render_html] Failed to write {:?}",
                output_path
            )
        })?;

        info!("Interactive chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[doc = "Formats `1234567` as `1,234,567`."]
fn format_thousands(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut result: String = String::new();

    for (count, c) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

fn draw_line_chart<DB>(root: DrawingArea<DB, Shift>, frame: &ChartFrame) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&BACKGROUND_COLOR)?;

    let x_labels: &Vec<String> = frame.date_labels();
    let x_max: usize = x_labels.len().saturating_sub(1).max(1);
    let (y_min, y_max) = *frame.y_range();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            frame.title(),
            ("sans-serif", 40).into_font().color(&RGBColor(240, 240, 240)),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("date")
        .y_desc("sources")
        .x_labels(x_labels.len().clamp(2, 10))
        .y_labels(10)
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(("sans-serif", 20).into_font().color(&TEXT_COLOR))
        .x_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .y_label_formatter(&|y| format_thousands(*y))
        .draw()?;

    for line in frame.lines() {
        let (r, g, b) = line.color().to_rgb8();
        let line_color: RGBColor = RGBColor(r, g, b);

        chart
            .draw_series(LineSeries::new(
                line.values().iter().enumerate().map(|(i, &y)| (i, y)),
                ShapeStyle::from(&line_color).stroke_width(3),
            ))?
            .label(line.vcs().as_str())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    ShapeStyle::from(&line_color).stroke_width(3),
                )
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(BACKGROUND_COLOR.mix(0.8))
        .border_style(AXIS_COLOR)
        .label_font(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .draw()?;

    root.present()?;

    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render(
        &self,
        series: &[DataPoint],
        image_path: Option<&Path>,
        html_path: Option<&Path>,
    ) -> anyhow::Result<()> {
        if image_path.is_none() && html_path.is_none() {
            info!("[ChartServiceImpl->render] no output path given, nothing to render");
            return Ok(());
        }

        let frame: ChartFrame = self.build_frame(series)?;

        if let Some(path) = image_path {
            self.render_image(&frame, path).await?;
        }

        if let Some(path) = html_path {
            self.render_html(&frame, path)?;
        }

        Ok(())
    }
}
