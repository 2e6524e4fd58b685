use egui::{Color32, Painter, Pos2, Rect, Vec2, vec2};
use life_matrix::{Grid, Selector};

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Side of one cell in points.
    pub cell_size: f32,
    pub gap: f32,
    pub dead_color: Color32,
    pub alive_color: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 50.,
            gap: 1.,
            dead_color: Color32::WHITE,
            alive_color: Color32::BLACK,
        }
    }
}

pub fn grid_size(grid: &Grid, settings: Settings) -> Vec2 {
    vec2(grid.width() as f32, grid.height() as f32) * settings.cell_size
}

/// The cell under `pointer` for a grid drawn with its top-left corner at
/// `origin`. May fall outside the grid.
pub fn selector_at(origin: Pos2, pointer: Pos2, cell_size: f32) -> Selector {
    let offset = (pointer - origin) / cell_size;
    Selector::new(offset.x.floor() as isize, offset.y.floor() as isize)
}

pub fn paint(painter: &Painter, origin: Pos2, grid: &Grid, settings: Settings) {
    for (selector, cell) in grid.cells() {
        let min = origin + vec2(selector.x as f32, selector.y as f32) * settings.cell_size;
        let rect = Rect::from_min_size(min, Vec2::splat(settings.cell_size)).shrink(settings.gap);
        let color = if cell.is_alive() {
            settings.alive_color
        } else {
            settings.dead_color
        };
        painter.rect_filled(rect, 0.0, color);
    }
}
