use super::*;

#[derive(Clone, Deref)]
pub struct Ctx {
    #[deref]
    inner: Rc<CtxInner>,
}

pub struct CtxInner {
    pub geng: Geng,
    pub config: Config,
    pub controls: controls::Controls,
}

/// Command line overrides for the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<std::path::PathBuf>,
    pub mode: Option<Mode>,
}

impl Ctx {
    pub async fn load(geng: &Geng, overrides: Overrides) -> anyhow::Result<Self> {
        let path = overrides
            .config
            .unwrap_or_else(|| run_dir().join("assets").join("config.toml"));
        let mut config = match file::load_detect::<Config>(&path).await {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{} could not be loaded, using defaults: {e:#}", path.display());
                Config::default()
            }
        };
        if let Some(mode) = overrides.mode {
            config.mode = mode;
        }
        config.validate()?;
        log::info!("running {:?} with {config:?}", config.mode);

        let controls = file::load_detect(run_dir().join("assets").join("controls.toml"))
            .await
            .unwrap_or_else(|e| {
                log::warn!("controls could not be loaded: {e:#}");
                controls::Controls::default()
            });
        Ok(Self {
            inner: Rc::new(CtxInner {
                geng: geng.clone(),
                config,
                controls,
            }),
        })
    }
}
