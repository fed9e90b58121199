use super::*;

/// Scene pixels, origin in the top-left corner and y growing down
pub struct PixelCamera {
    pub size: vec2<f32>,
}

impl geng::AbstractCamera2d for PixelCamera {
    fn view_matrix(&self) -> mat3<f32> {
        mat3::identity()
    }

    fn projection_matrix(&self, _framebuffer_size: vec2<f32>) -> mat3<f32> {
        mat3::translate(vec2(-1.0, 1.0)) * mat3::scale(vec2(2.0 / self.size.x, -2.0 / self.size.y))
    }
}

pub struct FramebufferCanvas<'a, 'b> {
    pub geng: &'a Geng,
    pub framebuffer: &'a mut ugli::Framebuffer<'b>,
    pub camera: &'a dyn geng::AbstractCamera2d,
}

impl Canvas for FramebufferCanvas<'_, '_> {
    fn fill(&mut self, color: Rgba<f32>) {
        ugli::clear(self.framebuffer, Some(color), None, None);
    }

    fn polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>) {
        self.geng.draw2d().draw2d(
            self.framebuffer,
            self.camera,
            &geng::draw2d::Polygon::new(points.to_vec(), color),
        );
    }

    fn rect(&mut self, rect: Aabb2<f32>, color: Rgba<f32>) {
        self.geng
            .draw2d()
            .quad(self.framebuffer, self.camera, rect, color);
    }
}

/// Where a scene of `scene_size` lands inside the window, keeping its aspect
pub fn fit(scene_size: vec2<f32>, framebuffer_size: vec2<f32>) -> Aabb2<f32> {
    let scale = partial_min(
        framebuffer_size.x / scene_size.x,
        framebuffer_size.y / scene_size.y,
    );
    Aabb2::point(framebuffer_size / 2.0).extend_symmetric(scene_size * scale / 2.0)
}

/// Window pixels (y up) to scene pixels (y down), `None` while the window
/// has no area to show the scene in
pub fn window_to_scene(
    window_pos: vec2<f32>,
    scene_size: vec2<f32>,
    framebuffer_size: vec2<f32>,
) -> Option<vec2<f32>> {
    let area = fit(scene_size, framebuffer_size);
    if !(area.width() > 0.0 && area.height() > 0.0) {
        return None;
    }
    let x = (window_pos.x - area.min.x) / area.width();
    let y = (window_pos.y - area.min.y) / area.height();
    Some(vec2(x * scene_size.x, (1.0 - y) * scene_size.y))
}

/// The persistent picture the scene paints into
pub struct Render {
    geng: Geng,
    size: vec2<usize>,
    texture: ugli::Texture,
}

impl Render {
    pub fn new(geng: &Geng, size: vec2<usize>, background: Rgba<f32>) -> Self {
        let mut texture = ugli::Texture::new_with(geng.ugli(), size, |_| background);
        texture.set_filter(ugli::Filter::Nearest);
        Self {
            geng: geng.clone(),
            size,
            texture,
        }
    }

    pub fn size(&self) -> vec2<f32> {
        self.size.map(|x| x as f32)
    }

    pub fn paint<R>(&mut self, f: impl FnOnce(&mut dyn Canvas) -> R) -> R {
        let camera = PixelCamera { size: self.size() };
        let mut framebuffer = ugli::Framebuffer::new_color(
            self.geng.ugli(),
            ugli::ColorAttachment::Texture(&mut self.texture),
        );
        let mut canvas = FramebufferCanvas {
            geng: &self.geng,
            framebuffer: &mut framebuffer,
            camera: &camera,
        };
        f(&mut canvas)
    }

    pub fn present(&self, framebuffer: &mut ugli::Framebuffer, border: Rgba<f32>) {
        let framebuffer_size = framebuffer.size().map(|x| x as f32);
        ugli::clear(framebuffer, Some(border), None, None);
        self.geng.draw2d().textured_quad(
            framebuffer,
            &geng::PixelPerfectCamera,
            fit(self.size(), framebuffer_size),
            &self.texture,
            Rgba::WHITE,
        );
    }
}
