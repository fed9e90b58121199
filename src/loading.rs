use super::*;

/// Spins a single cross until the config is loaded
pub async fn run(geng: &Geng) {
    let camera = Camera2d {
        center: vec2::ZERO,
        rotation: Angle::ZERO,
        fov: 20.0,
    };
    let palette = Palette {
        color: Rgba::WHITE,
        background: Rgba::BLACK,
    };
    let mut cross = Shape::new(vec2::ZERO, 3.0, Layer::Primary, palette);
    let mut timer = Timer::new();
    while let Some(event) = geng.window().events().next().await {
        if let geng::Event::Draw = event {
            let delta_time = timer.tick().as_secs_f64() as f32;
            cross.rotate(Angle::from_radians(f32::PI * delta_time));
            geng::async_state::with_current_framebuffer(geng.window(), |framebuffer| {
                let mut canvas = render::FramebufferCanvas {
                    geng,
                    framebuffer,
                    camera: &camera,
                };
                canvas.fill(palette.background);
                cross.draw(&mut canvas, palette.color);
            });
        }
    }
}
