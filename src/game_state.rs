use super::*;

pub struct GameState {
    ctx: Ctx,
    scene: Scene,
    render: render::Render,
    clock: clock::FrameClock,
    framebuffer_size: vec2<f32>,
    /// Window position of the held mouse button or touch
    pointer: Option<vec2<f64>>,
    quit: bool,
    need_restart: bool,
}

impl GameState {
    pub fn new(ctx: &Ctx) -> Self {
        let config = ctx.config.clone();
        let mut render = render::Render::new(&ctx.geng, config.size(), config.background_color);
        let clock = clock::FrameClock::new(config.fps);
        let scene = render.paint(|canvas| Scene::new(config, canvas));
        Self {
            ctx: ctx.clone(),
            framebuffer_size: render.size(),
            scene,
            render,
            clock,
            pointer: None,
            quit: false,
            need_restart: false,
        }
    }

    fn key_press(&mut self, key: geng::Key) {
        let controls = &self.ctx.controls;
        if controls.quit.contains(&key) && !cfg!(target_arch = "wasm32") {
            self.quit = true;
        }
        if controls.restart.contains(&key) {
            self.need_restart = true;
        }
        if controls.swap.contains(&key) {
            if self.scene.swap_roles() {
                log::info!(
                    "{:?} layer in front, painting with {:?}",
                    self.scene.foreground_layer(),
                    self.scene.palette().color,
                );
            } else {
                log::debug!("not swapping while {} shapes turn", self.scene.selected().len());
            }
        }
    }

    fn pointer_start(&mut self, pos: vec2<f64>) {
        self.pointer = Some(pos);
    }

    fn pointer_move(&mut self, pos: vec2<f64>) {
        if let Some(pointer) = &mut self.pointer {
            *pointer = pos;
        }
    }

    fn pointer_end(&mut self) {
        self.pointer = None;
    }

    pub async fn run(mut self) {
        let ctx = self.ctx.clone();
        let mut timer = Timer::new();
        while let Some(event) = ctx.geng.window().events().next().await {
            if let geng::Event::Draw = event {
                self.update(timer.tick());
                geng::async_state::with_current_framebuffer(ctx.geng.window(), |framebuffer| {
                    self.draw(framebuffer)
                });
            } else {
                self.handle_event(event);
            }
            if self.quit {
                break;
            }
            if self.need_restart {
                log::info!("restarting {} shapes", self.scene.shapes().len());
                self = Self::new(&self.ctx);
            }
        }
    }

    fn update(&mut self, delta_time: time::Duration) {
        let ticks = self.clock.tick(delta_time.as_secs_f64());
        for _ in 0..ticks {
            let pos = self.pointer.and_then(|pos| {
                render::window_to_scene(
                    pos.map(|x| x as f32),
                    self.render.size(),
                    self.framebuffer_size,
                )
            });
            if let Some(pos) = pos {
                let selection = self.scene.select_at(pos);
                log::trace!("pointer at {pos}: {selection:?}");
            }
            let scene = &mut self.scene;
            self.render.paint(|canvas| scene.update_frame(canvas));
        }
    }

    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        self.framebuffer_size = framebuffer.size().map(|x| x as f32);
        self.render
            .present(framebuffer, self.ctx.config.background_color);
    }

    fn handle_event(&mut self, event: geng::Event) {
        match event {
            geng::Event::KeyPress { key } => {
                self.key_press(key);
            }
            geng::Event::MousePress { .. } => {
                if let Some(pos) = self.ctx.geng.window().cursor_position() {
                    self.pointer_start(pos);
                }
            }
            geng::Event::CursorMove { position } => {
                self.pointer_move(position);
            }
            geng::Event::MouseRelease { .. } => {
                self.pointer_end();
            }
            geng::Event::TouchStart(touch) => {
                self.pointer_start(touch.position);
            }
            geng::Event::TouchMove(touch) => {
                self.pointer_move(touch.position);
            }
            geng::Event::TouchEnd(..) => {
                self.pointer_end();
            }
            _ => {}
        }
    }
}
