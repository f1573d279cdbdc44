use crate::constants::LABEL_DISTANCE_FACTOR;
use crate::core::orbit::{label_scale, world_to_screen};
use crate::core::scene::{NodeId, SceneGraph};
use crate::core::weather::WeatherPoint;
use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Floating captions, one per marker, positioned over the canvas each frame.
pub struct MarkerLabels {
    entries: Vec<(NodeId, web::HtmlElement)>,
}

impl MarkerLabels {
    pub fn new(
        document: &web::Document,
        weather: &[WeatherPoint],
        markers: &[NodeId],
    ) -> anyhow::Result<Self> {
        let layer = document
            .get_element_by_id("marker-labels")
            .ok_or_else(|| anyhow::anyhow!("missing #marker-labels"))?;
        layer.set_inner_html("");
        let mut entries = Vec::with_capacity(markers.len());
        for (point, &node) in weather.iter().zip(markers) {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el.set_class_name("marker-label");
            el.set_text_content(Some(&point.label()));
            el.set_title(point.city);
            layer
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            entries.push((node, el));
        }
        Ok(Self { entries })
    }

    /// `width`/`height` are the canvas size in CSS pixels.
    pub fn update(
        &self,
        graph: &SceneGraph,
        view_proj: Mat4,
        eye: Vec3,
        fovy_radians: f32,
        width: f32,
        height: f32,
    ) {
        for (node, el) in &self.entries {
            let world = graph.world_matrix(*node).transform_point3(Vec3::ZERO);
            let style = el.style();
            match world_to_screen(view_proj, world, width, height) {
                Some([x, y]) => {
                    let scale = label_scale(fovy_radians, eye.distance(world), LABEL_DISTANCE_FACTOR);
                    _ = style.set_property("display", "");
                    _ = style.set_property(
                        "transform",
                        &format!(
                            "translate({:.1}px, {:.1}px) scale({:.3}) translate(-50%, -50%)",
                            x, y, scale
                        ),
                    );
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
