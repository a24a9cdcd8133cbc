use plotters::prelude::*;
use tracing::{debug, info};

use super::{ChartData, ChartSink, ChartStyle, draw_chart};
use crate::error::{PlotError, Result};

/// A [`ChartSink`] that opens a native window with the chart.
///
/// `show` blocks until the window is closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowViewer;

impl ChartSink for WindowViewer {
    fn show(&self, data: &ChartData, style: &ChartStyle) -> Result<()> {
        let image = rasterize(data, style)?;

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(style.title.clone())
                .with_inner_size([style.width as f32, style.height as f32]),
            ..Default::default()
        };

        info!("Opening chart window");
        eframe::run_native(
            &style.title,
            native_options,
            Box::new(move |_cc| Ok(Box::new(ChartApp::new(image)))),
        )
        .map_err(PlotError::render)?;
        info!("Chart window closed");
        Ok(())
    }
}

/// Draws the chart into an RGB buffer sized by `style`.
fn rasterize(data: &ChartData, style: &ChartStyle) -> Result<egui::ColorImage> {
    let (width, height) = (style.width, style.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(&root, data, style)?;
    }
    debug!(width, height, "Chart rasterized");

    Ok(egui::ColorImage::from_rgb(
        [width as usize, height as usize],
        &buffer,
    ))
}

struct ChartApp {
    image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl ChartApp {
    fn new(image: egui::ColorImage) -> Self {
        Self {
            image,
            texture: None,
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let image = &self.image;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("chart", image.clone(), egui::TextureOptions::LINEAR)
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new(&*texture).shrink_to_fit());
            });
        });
    }
}
