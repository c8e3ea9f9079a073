//! Decorative hero scene.
//!
//! Seven shaded boxes standing on a ground grid, drawn as an isometric SVG.
//! Each box bobs vertically following `y = base + sin(0.5 t + delay) * 0.05`;
//! the motion is a CSS animation so it stops with the element and honours
//! `prefers-reduced-motion`.

use std::f64::consts::PI;

/// Angular speed of the float motion, in radians per second.
pub const FLOAT_SPEED: f64 = 0.5;

/// Peak vertical displacement of a floating block, in world units.
pub const FLOAT_AMPLITUDE: f64 = 0.05;

/// Pixels per world unit in the projected drawing.
pub const SCENE_SCALE: f64 = 40.0;

/// Direction the key light shines from (not normalised).
const LIGHT_POSITION: [f64; 3] = [10.0, 20.0, 5.0];

/// Share of a face's brightness that does not depend on the light angle.
const AMBIENT: f64 = 0.55;

const GRID_HALF_EXTENT: i32 = 10;
const GRID_SECTION: i32 = 5;
const GRID_Y: f64 = -0.1;
const GRID_CELL_COLOR: &str = "#cbd5e1";
const GRID_SECTION_COLOR: &str = "#94a3b8";
const EDGE_COLOR: &str = "#ffffff";

/// A box primitive of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryBlock {
    /// Centre of the box in world units (x, y, z; y is up)
    pub position: [f64; 3],
    /// Edge lengths along x, y and z
    pub scale: [f64; 3],
    /// Base colour as `#rrggbb`
    pub color: &'static str,
    /// Phase offset of the float motion, in radians
    pub delay: f64,
}

pub static FACTORY_BLOCKS: [FactoryBlock; 7] = [
    // Central hub
    FactoryBlock { position: [0.0, 0.5, 0.0], scale: [2.0, 1.0, 3.0], color: "#1e293b", delay: 0.0 },
    // Surrounding factories
    FactoryBlock { position: [2.5, 0.25, 0.0], scale: [1.5, 0.5, 2.0], color: "#334155", delay: 1.0 },
    FactoryBlock { position: [-2.5, 0.25, 1.0], scale: [1.5, 0.5, 2.5], color: "#475569", delay: 2.0 },
    FactoryBlock { position: [0.0, 0.25, 3.0], scale: [3.0, 0.5, 1.5], color: "#0D9488", delay: 3.0 },
    FactoryBlock { position: [0.0, 0.25, -2.5], scale: [2.5, 0.5, 1.5], color: "#64748b", delay: 0.5 },
    // Towers
    FactoryBlock { position: [-3.0, 1.0, -2.0], scale: [0.8, 2.0, 0.8], color: "#C5A059", delay: 4.0 },
    FactoryBlock { position: [-3.8, 0.75, -1.5], scale: [0.6, 1.5, 0.6], color: "#e2e8f0", delay: 4.2 },
];

/// Seconds for one full float cycle.
pub fn float_period() -> f64 {
    2.0 * PI / FLOAT_SPEED
}

/// The three faces visible from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Right,
    Front,
}

impl FaceKind {
    pub fn normal(&self) -> [f64; 3] {
        match self {
            FaceKind::Top => [0.0, 1.0, 0.0],
            FaceKind::Right => [1.0, 0.0, 0.0],
            FaceKind::Front => [0.0, 0.0, 1.0],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            FaceKind::Top => "top",
            FaceKind::Right => "right",
            FaceKind::Front => "front",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub corners: [[f64; 3]; 4],
}

impl FactoryBlock {
    /// Vertical centre of the block at time `t` seconds.
    pub fn offset_at(&self, t: f64) -> f64 {
        self.position[1] + (t * FLOAT_SPEED + self.delay).sin() * FLOAT_AMPLITUDE
    }

    /// CSS `animation-delay` that starts the cycle at this block's phase.
    ///
    /// Negative, so the animation begins part-way through instead of waiting.
    pub fn animation_delay(&self) -> f64 {
        -(self.delay / FLOAT_SPEED)
    }

    /// Top, right and front faces at rest.
    pub fn faces(&self) -> [Face; 3] {
        let [cx, cy, cz] = self.position;
        let [sx, sy, sz] = self.scale;
        let (x0, x1) = (cx - sx / 2.0, cx + sx / 2.0);
        let (y0, y1) = (cy - sy / 2.0, cy + sy / 2.0);
        let (z0, z1) = (cz - sz / 2.0, cz + sz / 2.0);

        [
            Face {
                kind: FaceKind::Top,
                corners: [[x0, y1, z0], [x1, y1, z0], [x1, y1, z1], [x0, y1, z1]],
            },
            Face {
                kind: FaceKind::Right,
                corners: [[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]],
            },
            Face {
                kind: FaceKind::Front,
                corners: [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
            },
        ]
    }

    /// Distance from the camera along the view axis; larger is nearer.
    fn depth(&self) -> f64 {
        self.position[0] + self.position[2]
    }
}

/// Lambert brightness of a face with `normal`, in `AMBIENT..=1.0`.
pub fn brightness(normal: [f64; 3]) -> f64 {
    let length = LIGHT_POSITION.iter().map(|c| c * c).sum::<f64>().sqrt();
    let dot: f64 = normal
        .iter()
        .zip(LIGHT_POSITION.iter())
        .map(|(n, l)| n * l / length)
        .sum();
    AMBIENT + (1.0 - AMBIENT) * dot.max(0.0)
}

/// Scale a `#rrggbb` colour by `factor`. Unparseable colours pass through.
pub fn shade(color: &str, factor: f64) -> String {
    let Some(hex) = color.strip_prefix('#').filter(|h| h.len() == 6 && h.is_ascii()) else {
        return color.to_string();
    };

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        match u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16) {
            Ok(value) => *channel = (f64::from(value) * factor).round().clamp(0.0, 255.0) as u8,
            Err(_) => return color.to_string(),
        }
    }

    format!("#{:02x}{:02x}{:02x}", channels[0], channels[1], channels[2])
}

/// Isometric projection from world units to SVG user units, centred on the
/// world origin.
pub fn project(point: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = point;
    let cos30 = (PI / 6.0).cos();
    let sin30 = (PI / 6.0).sin();
    (
        (x - z) * cos30 * SCENE_SCALE,
        ((x + z) * sin30 - y) * SCENE_SCALE,
    )
}

fn polygon_points(corners: &[[f64; 3]; 4]) -> String {
    corners
        .iter()
        .map(|&corner| {
            let (x, y) = project(corner);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_grid(svg: &mut String) {
    let extent = f64::from(GRID_HALF_EXTENT);
    svg.push_str("<g class=\"scene-grid\">");
    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let offset = f64::from(i);
        let (color, width) = if i % GRID_SECTION == 0 {
            (GRID_SECTION_COLOR, 1.5)
        } else {
            (GRID_CELL_COLOR, 1.0)
        };
        // Lines fade towards the edge of the grid
        let opacity = (1.0 - offset.abs() / extent).max(0.1);

        for (from, to) in [
            ([offset, GRID_Y, -extent], [offset, GRID_Y, extent]),
            ([-extent, GRID_Y, offset], [extent, GRID_Y, offset]),
        ] {
            let (x1, y1) = project(from);
            let (x2, y2) = project(to);
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{:.2}\"/>",
                x1, y1, x2, y2, color, width, opacity
            ));
        }
    }
    svg.push_str("</g>");
}

fn render_block(svg: &mut String, block: &FactoryBlock) {
    svg.push_str(&format!(
        "<g class=\"scene-block\" style=\"animation-delay:{:.2}s;--float-amp:{:.1}px\">",
        block.animation_delay(),
        FLOAT_AMPLITUDE * SCENE_SCALE
    ));
    for face in block.faces() {
        svg.push_str(&format!(
            "<polygon class=\"face-{}\" points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-opacity=\"0.2\"/>",
            face.kind.as_str(),
            polygon_points(&face.corners),
            shade(block.color, brightness(face.kind.normal())),
            EDGE_COLOR
        ));
    }
    svg.push_str("</g>");
}

/// The whole scene as an inline SVG element.
pub fn render_svg() -> String {
    let mut blocks: Vec<&FactoryBlock> = FACTORY_BLOCKS.iter().collect();
    // Painter's order: farthest first
    blocks.sort_by(|a, b| a.depth().total_cmp(&b.depth()));

    let mut svg = String::with_capacity(16 * 1024);
    svg.push_str(&format!(
        "<svg class=\"scene\" viewBox=\"-700 -420 1400 840\" preserveAspectRatio=\"xMidYMid slice\" \
         aria-hidden=\"true\" focusable=\"false\" style=\"--float-period:{:.3}s\">",
        float_period()
    ));
    render_grid(&mut svg);
    for block in blocks {
        render_block(&mut svg, block);
    }
    svg.push_str("</svg>");
    svg
}
