use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use taskboard_model::{
  Filter,
  ViewLabels
};
use tracing::{
  debug,
  info,
  trace,
  warn
};

pub const BOARDRC_ENV: &str =
  "TASKBOARDRC";

#[derive(Debug, Clone)]
pub struct Config {
  map: HashMap<String, String>,
  pub loaded_files: Vec<PathBuf>
}

impl Default for Config {
  fn default() -> Self {
    Self::defaults()
  }
}

impl Config {
  pub fn defaults() -> Self {
    let mut map = HashMap::new();
    for (key, value) in [
      ("seed", "on"),
      ("color", "on"),
      ("title", "TODO"),
      (
        "placeholder",
        "Create a new todo..."
      ),
      ("default.filter", "all"),
      ("prompt", "> ")
    ] {
      map.insert(
        key.to_string(),
        value.to_string()
      );
    }

    Self {
      map,
      loaded_files: vec![]
    }
  }

  #[tracing::instrument(skip(
    boardrc_override
  ))]
  pub fn load(
    boardrc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Self::defaults();

    let boardrc = resolve_boardrc_path(
      boardrc_override,
      std::env::var(BOARDRC_ENV).ok(),
      dirs::home_dir()
    );
    if let Some(path) = boardrc {
      info!(boardrc = %path.display(), "loading boardrc");
      cfg.load_file(
        &path,
        &mut Vec::new()
      )?;
    } else {
      debug!(
        "no boardrc found; using \
         defaults"
      );
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  /// Strict boolean lookup; a value
  /// that is not a recognised switch
  /// is an error rather than `false`.
  pub fn get_bool(
    &self,
    key: &str
  ) -> anyhow::Result<Option<bool>> {
    self
      .map
      .get(key)
      .map(|v| {
        parse_bool(v).ok_or_else(|| {
          anyhow!(
            "invalid {key} setting: \
             {v}"
          )
        })
      })
      .transpose()
  }

  pub fn seed_demo_tasks(
    &self
  ) -> anyhow::Result<bool> {
    Ok(
      self
        .get_bool("seed")?
        .unwrap_or(true)
    )
  }

  pub fn default_filter(
    &self
  ) -> anyhow::Result<Filter> {
    match self.map.get("default.filter")
    {
      | Some(raw) => {
        raw.parse::<Filter>().context(
          "invalid default.filter \
           setting"
        )
      }
      | None => Ok(Filter::All)
    }
  }

  pub fn view_labels(
    &self
  ) -> ViewLabels {
    let defaults = ViewLabels::default();
    ViewLabels {
      title:       self
        .get("title")
        .unwrap_or(defaults.title),
      placeholder: self
        .get("placeholder")
        .unwrap_or(defaults.placeholder)
    }
  }

  pub fn prompt(&self) -> String {
    self
      .get("prompt")
      .unwrap_or_else(|| {
        "> ".to_string()
      })
  }

  /// Reads one rc file. `chain` holds
  /// the canonical paths of the files
  /// whose includes are being expanded
  /// right now, outermost first.
  #[tracing::instrument(skip(
    self, chain
  ))]
  fn load_file(
    &mut self,
    path: &Path,
    chain: &mut Vec<PathBuf>
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let canonical =
      fs::canonicalize(&path)
        .with_context(|| {
          format!(
            "failed to resolve {}",
            path.display()
          )
        })?;

    self
      .loaded_files
      .push(path.clone());
    chain.push(canonical);

    let base_dir = path
      .parent()
      .map(|p| p.to_path_buf())
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if let Some((before, _)) =
        line.split_once('#')
      {
        line = before.trim();
      }

      if line.is_empty() {
        continue;
      }

      if let Some(include_rest) =
        line.strip_prefix("include ")
      {
        let include_path =
          resolve_include_path(
            &base_dir,
            include_rest.trim()
          )?;
        debug!(
            file = %path.display(),
            include = %include_path.display(),
            line = line_num + 1,
            "processing include"
        );

        if !include_path.exists() {
          warn!(include = %include_path.display(), "include file does not exist; skipping");
          continue;
        }
        let include_canonical =
          fs::canonicalize(&include_path)
            .with_context(|| {
              format!(
                "failed to resolve {}",
                include_path.display()
              )
            })?;
        if chain
          .contains(&include_canonical)
        {
          return Err(anyhow!(
            "include cycle at {}:{}: \
             {} is already being loaded",
            path.display(),
            line_num + 1,
            include_path.display()
          ));
        }
        self.load_file(
          &include_path,
          chain
        )?;
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    chain.pop();
    Ok(())
  }
}

fn resolve_boardrc_path(
  override_path: Option<&Path>,
  env_path: Option<String>,
  home: Option<PathBuf>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Some(env_path) = env_path {
    if env_path == "/dev/null" {
      return None;
    }
    return Some(PathBuf::from(
      env_path
    ));
  }

  let candidate =
    home?.join(".taskboardrc");
  candidate
    .exists()
    .then_some(candidate)
}

fn resolve_include_path(
  base_dir: &Path,
  include: &str
) -> anyhow::Result<PathBuf> {
  if include.trim().is_empty() {
    return Err(anyhow!(
      "include path cannot be empty"
    ));
  }

  let raw = PathBuf::from(include);
  let expanded = expand_tilde(&raw);
  if expanded.is_absolute() {
    Ok(expanded)
  } else {
    Ok(base_dir.join(expanded))
  }
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> Option<bool> {
  match s
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "1" | "y" | "yes" | "on"
    | "true" => Some(true),
    | "0" | "n" | "no" | "off"
    | "false" => Some(false),
    | _ => None
  }
}
