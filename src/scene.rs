use super::*;

/// What a click at some position did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Shape at this index started turning
    Selected(usize),
    AlreadyAnimating(usize),
    /// Too close to a shape that is already turning
    Neighbor(usize),
    /// Nothing was hit and nothing was turning, so the roles were swapped
    Swapped,
    /// Nothing was hit but something is still turning
    Busy,
}

/// The grid of shapes and everything that is turning in it
pub struct Scene {
    config: Config,
    policy: Policy,
    palette: Palette,
    foreground_layer: Layer,
    shapes: Vec<Shape>,
    /// Indices into `shapes`, in the order they were clicked
    selected: Vec<usize>,
}

/// Number of elements in `start..end` stepping by `step`
fn range_len(start: f32, end: f32, step: f32) -> usize {
    ((end - start) / step).ceil().max(0.0) as usize
}

fn shape_palette(colors: Colors, roles: Palette, shape: &Shape) -> Palette {
    match colors {
        Colors::SwappableRoles => roles,
        Colors::FixedPerShape => shape.palette,
    }
}

impl Scene {
    pub fn new(config: Config, canvas: &mut dyn Canvas) -> Self {
        let mut scene = Self {
            policy: config.policy(),
            palette: Palette {
                color: config.foreground_color,
                background: config.background_color,
            },
            foreground_layer: Layer::Primary,
            shapes: Vec::new(),
            selected: Vec::new(),
            config,
        };
        scene.init_shapes(canvas);
        scene
    }

    /// Tiles the viewport with interleaved primary and secondary shapes
    /// and paints the whole first frame.
    fn init_shapes(&mut self, canvas: &mut dyn Canvas) {
        let size = self.config.shape_size;
        let width = self.config.width as f32;
        let columns = 4 * range_len(-4.0 * size, width, 4.0 * size)
            .min(range_len(0.0, -width, -size / 3.0 * 4.0));
        let rows = (self.config.height as f32 / size).floor() as usize + 10;

        let primary = self.layer_palette(Layer::Primary);
        let secondary = self.layer_palette(Layer::Secondary);
        self.shapes.clear();
        self.selected.clear();
        self.shapes.reserve(2 * columns * rows);
        for column in 0..columns {
            let start = vec2((column as f32 - 4.0) * size, -(column as f32) * size / 3.0);
            for row in 0..rows {
                let pos = start + vec2(size / 3.0, size) * row as f32;
                self.shapes.push(Shape::new(
                    pos.map(f32::trunc),
                    size,
                    Layer::Primary,
                    primary,
                ));
                self.shapes.push(Shape::new(
                    (pos + vec2(size / 3.0 * 2.0, size / 3.0)).map(f32::trunc),
                    size,
                    Layer::Secondary,
                    secondary,
                ));
            }
        }
        log::info!(
            "tiled {}x{} with {} shapes ({columns} columns, {rows} rows)",
            self.config.width,
            self.config.height,
            self.shapes.len(),
        );

        canvas.fill(self.palette.background);
        for shape in &self.shapes {
            shape.draw(canvas, shape.palette.color);
        }
    }

    /// Roles of `layer`, the foreground layer owns the scene palette
    fn layer_palette(&self, layer: Layer) -> Palette {
        if layer == self.foreground_layer {
            self.palette
        } else {
            self.palette.swapped()
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn foreground_layer(&self) -> Layer {
        self.foreground_layer
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    fn is_selectable(&self, shape: &Shape) -> bool {
        match self.policy.colors {
            Colors::SwappableRoles => shape.layer == self.foreground_layer,
            Colors::FixedPerShape => true,
        }
    }

    fn is_neighbor_of_selected(&self, shape: &Shape) -> bool {
        let max_distance = self.config.shape_size * 2.0 / 3.0;
        self.selected.iter().any(|&index| {
            let delta = self.shapes[index].center - shape.center;
            delta.x.abs() <= max_distance && delta.y.abs() <= max_distance
        })
    }

    pub fn select_at(&mut self, position: vec2<f32>) -> Selection {
        let hit = self
            .shapes
            .iter()
            .position(|shape| self.is_selectable(shape) && shape.hit_test(position));
        let Some(index) = hit else {
            return if self.swap_roles() {
                Selection::Swapped
            } else {
                Selection::Busy
            };
        };
        let shape = &self.shapes[index];
        if shape.is_animating() {
            log::trace!("shape #{index} is {} frames in", shape.rotation_count());
            return Selection::AlreadyAnimating(index);
        }
        if self.policy.neighbors == Neighbors::Suppress && self.is_neighbor_of_selected(shape) {
            return Selection::Neighbor(index);
        }
        log::debug!("selected shape #{index} at {}", shape.center);
        self.shapes[index].create_background_footprint();
        self.selected.push(index);
        Selection::Selected(index)
    }

    /// Swaps foreground and background roles unless something is turning.
    ///
    /// Nothing is repainted.
    pub fn swap_roles(&mut self) -> bool {
        if !self.selected.is_empty() {
            return false;
        }
        self.palette = self.palette.swapped();
        if self.policy.colors == Colors::SwappableRoles {
            self.foreground_layer = self.foreground_layer.other();
        }
        log::debug!("swapped roles, foreground layer is {:?}", self.foreground_layer);
        true
    }

    /// One animation tick: erase, turn, then repaint what is still turning
    pub fn update_frame(&mut self, canvas: &mut dyn Canvas) {
        let colors = self.policy.colors;
        let roles = self.palette;
        let fps = self.config.fps;

        for &index in &self.selected {
            let shape = &self.shapes[index];
            shape.draw(canvas, shape_palette(colors, roles, shape).background);
        }

        let shapes = &mut self.shapes;
        self.selected.retain(|&index| {
            let shape = &mut shapes[index];
            if !shape.advance(fps) {
                return true;
            }
            log::trace!("shape #{index} settled at {:?}", shape.rotation());
            shape.draw(canvas, shape_palette(colors, roles, shape).color);
            false
        });

        for &index in &self.selected {
            let shape = &self.shapes[index];
            let palette = shape_palette(colors, roles, shape);
            shape.draw_background_footprint(canvas, palette.background);
            shape.draw(canvas, palette.color);
        }
    }
}
