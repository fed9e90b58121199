use geng::prelude::*;

mod canvas;
mod clock;
mod config;
mod controls;
mod ctx;
mod game_state;
mod geometry;
mod loading;
mod render;
mod scene;
mod shape;

use canvas::Canvas;
use config::{Colors, Config, Mode, Neighbors, Policy};
use ctx::Ctx;
use scene::Scene;
use shape::{Layer, Palette, Shape};

async fn run(geng: Geng, overrides: ctx::Overrides) {
    let ctx = match future::select(
        Ctx::load(&geng, overrides).boxed_local(),
        loading::run(&geng).boxed_local(),
    )
    .await
    {
        future::Either::Left(ctx) => ctx.0,
        future::Either::Right(_) => return,
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("invalid configuration: {e:#}");
            return;
        }
    };
    game_state::GameState::new(&ctx).run().await;
}

#[derive(clap::Parser)]
struct CliArgs {
    /// Scene config, assets/config.toml by default
    #[clap(long)]
    config: Option<std::path::PathBuf>,
    /// Overrides the mode from the config file
    #[clap(long, value_enum)]
    mode: Option<Mode>,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

pub fn main() {
    logger::init();
    geng::setup_panic_handler();

    let args: CliArgs = cli::parse();
    let mut options = geng::ContextOptions::default();
    options.window.title = format!(
        "{name} v{version}",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
    options.with_cli(&args.geng);

    let overrides = ctx::Overrides {
        config: args.config,
        mode: args.mode,
    };
    Geng::run_with(&options, move |geng| run(geng, overrides.clone()));
}
