use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info
};

const CONFIG_FILE: &str =
  "trellis.toml";
const CONFIG_ENV_VAR: &str =
  "TRELLIS_CONFIG";

fn default_grid_event_limit()
-> usize {
  2
}

fn default_min_event_height() -> f32 {
  0.6
}

fn default_hour_end() -> u32 {
  23
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Config {
  #[serde(default)]
  pub version:  u32,
  #[serde(default)]
  pub policies: Policies,
  #[serde(default)]
  pub day_view: DayView
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Policies {
  #[serde(
    default = "default_grid_event_limit"
  )]
  pub grid_event_limit: usize,
  #[serde(
    default = "default_min_event_height"
  )]
  pub min_event_height: f32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct DayView {
  #[serde(default)]
  pub hour_start: u32,
  #[serde(default = "default_hour_end")]
  pub hour_end:   u32
}

impl Default for Config {
  fn default() -> Self {
    Self {
      version:  1,
      policies: Policies::default(),
      day_view: DayView::default()
    }
  }
}

impl Default for Policies {
  fn default() -> Self {
    Self {
      grid_event_limit:
        default_grid_event_limit(),
      min_event_height:
        default_min_event_height()
    }
  }
}

impl Default for DayView {
  fn default() -> Self {
    Self {
      hour_start: 0,
      hour_end:   default_hour_end()
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    override_path
  ))]
  pub fn load(
    override_path: Option<&Path>
  ) -> anyhow::Result<Self> {
    let Some(path) =
      resolve_config_path(
        override_path
      )
    else {
      info!(
        "no config file found; using \
         defaults"
      );
      return Ok(Self::default());
    };

    info!(config = %path.display(), "loading config");
    let raw = fs::read_to_string(&path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    Self::from_toml_str(&raw)
      .with_context(|| {
        format!(
          "failed to parse {}",
          path.display()
        )
      })
  }

  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<Self>(raw)?;
    sanitize_config(&mut config);
    debug!(
      version = config.version,
      grid_event_limit = config
        .policies
        .grid_event_limit,
      hour_start =
        config.day_view.hour_start,
      hour_end =
        config.day_view.hour_end,
      "parsed config"
    );
    Ok(config)
  }
}

fn resolve_config_path(
  override_path: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Ok(raw) =
    std::env::var(CONFIG_ENV_VAR)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  let candidate = dirs::home_dir()?
    .join(CONFIG_FILE);
  if candidate.exists() {
    return Some(candidate);
  }

  None
}

fn sanitize_config(
  config: &mut Config
) {
  if config.policies.grid_event_limit
    == 0
  {
    config.policies.grid_event_limit =
      default_grid_event_limit();
  }

  if config.policies.min_event_height
    <= 0.0
  {
    config.policies.min_event_height =
      default_min_event_height();
  }

  if config.day_view.hour_start > 23 {
    config.day_view.hour_start = 23;
  }
  if config.day_view.hour_end > 23 {
    config.day_view.hour_end = 23;
  }
  if config.day_view.hour_end
    < config.day_view.hour_start
  {
    config.day_view.hour_end =
      config.day_view.hour_start;
  }
}
