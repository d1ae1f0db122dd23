//! File-based game loading, saving, conversion, and discovery.
//!
//! A game is a directory holding exactly one `.config` properties file and
//! exactly one `.cells` run-length grid. A `.grid` map file is an authoring
//! input that [`convert`] turns into that pair.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::codec::{Properties, decode, encode, parse_map};
use crate::error::{ConfigError, FormatError};
use crate::sim::{GameConfig, Grid};

/// Errors from loading, saving, or converting game artifacts.
#[derive(Debug)]
pub enum LoadError {
    /// Underlying filesystem failure.
    Io(io::Error),
    /// A grid artifact was malformed.
    Format(FormatError),
    /// The properties file was malformed.
    Config(ConfigError),
    /// A game directory is missing its `.config` or `.cells` file.
    MissingArtifact {
        /// The directory searched.
        dir: PathBuf,
        /// The extension that was not found.
        extension: &'static str,
    },
    /// A game directory holds more than one file of a required kind.
    DuplicateArtifact {
        /// The directory searched.
        dir: PathBuf,
        /// The extension that appeared more than once.
        extension: &'static str,
    },
    /// A map file's dimensions disagree with the configuration.
    GridShape {
        /// Width and height from the configuration.
        expected: (u16, u16),
        /// Width and height inferred from the map.
        found: (u16, u16),
    },
    /// The file passed to [`convert`] is not a `.grid` map.
    NotAGrid {
        /// The offending path.
        path: PathBuf,
    },
    /// A conversion output already exists and `force` was not given.
    OutputExists {
        /// The existing file.
        path: PathBuf,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "io error: {e}"),
            LoadError::Format(e) => write!(f, "malformed grid: {e}"),
            LoadError::Config(e) => write!(f, "malformed properties: {e}"),
            LoadError::MissingArtifact { dir, extension } => {
                write!(f, "no .{extension} file in {}", dir.display())
            }
            LoadError::DuplicateArtifact { dir, extension } => {
                write!(f, "more than one .{extension} file in {}", dir.display())
            }
            LoadError::GridShape { expected, found } => write!(
                f,
                "map is {}x{} but the configuration says {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            LoadError::NotAGrid { path } => {
                write!(f, "{} is not a .grid file", path.display())
            }
            LoadError::OutputExists { path } => {
                write!(f, "{} already exists (pass --force to overwrite)", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Format(e) => Some(e),
            LoadError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<FormatError> for LoadError {
    fn from(e: FormatError) -> Self {
        LoadError::Format(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Config(e)
    }
}

/// The two artifacts that make up a game directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDir {
    /// Path of the single `.config` file.
    pub config_path: PathBuf,
    /// Path of the single `.cells` file.
    pub cells_path: PathBuf,
}

/// Find the `.config` and `.cells` files of a game directory.
///
/// Other files are allowed, but exactly one file of each required kind must
/// be present.
///
/// # Errors
///
/// Returns [`LoadError::MissingArtifact`] or
/// [`LoadError::DuplicateArtifact`] when the directory does not hold
/// exactly one of each, and [`LoadError::Io`] when it cannot be read.
pub fn discover(dir: &Path) -> Result<GameDir, LoadError> {
    let mut config_path: Option<PathBuf> = None;
    let mut cells_path: Option<PathBuf> = None;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(extension) = path.extension().and_then(std::ffi::OsStr::to_str) else {
            continue;
        };
        let (slot, kind) = match extension {
            "config" => (&mut config_path, "config"),
            "cells" => (&mut cells_path, "cells"),
            _ => continue,
        };
        if slot.is_some() {
            return Err(LoadError::DuplicateArtifact {
                dir: dir.to_path_buf(),
                extension: kind,
            });
        }
        *slot = Some(path);
    }

    match (config_path, cells_path) {
        (Some(config_path), Some(cells_path)) => Ok(GameDir {
            config_path,
            cells_path,
        }),
        (None, _) => Err(LoadError::MissingArtifact {
            dir: dir.to_path_buf(),
            extension: "config",
        }),
        (_, None) => Err(LoadError::MissingArtifact {
            dir: dir.to_path_buf(),
            extension: "cells",
        }),
    }
}

/// Load a game from its directory.
///
/// Discovers the artifacts, parses the properties into a configuration, and
/// decodes the cells against it.
///
/// # Errors
///
/// Any discovery, io, properties, or decode failure.
pub fn load_dir(dir: &Path) -> Result<(Grid, GameConfig), LoadError> {
    let found = discover(dir)?;
    load(&found.cells_path, &found.config_path)
}

/// Load a grid and configuration from explicit paths.
///
/// The grid path is dispatched on its extension: `.grid` parses as a plain
/// map (whose inferred dimensions must then agree with the configuration),
/// anything else decodes as a run-length `.cells` file.
///
/// # Errors
///
/// Any io, properties, or grid failure, plus [`LoadError::GridShape`] when
/// a map's dimensions disagree with the configuration.
pub fn load(grid_path: &Path, config_path: &Path) -> Result<(Grid, GameConfig), LoadError> {
    let props = Properties::parse(&fs::read_to_string(config_path)?)?;
    let config = GameConfig::from_properties(&props)?;

    let text = fs::read_to_string(grid_path)?;
    let is_map = grid_path.extension().and_then(std::ffi::OsStr::to_str) == Some("grid");
    let grid = if is_map {
        let grid = parse_map(&text)?;
        if (grid.width(), grid.height()) != (config.width, config.height) {
            return Err(LoadError::GridShape {
                expected: (config.width, config.height),
                found: (grid.width(), grid.height()),
            });
        }
        grid
    } else {
        decode(&text, &config)?
    };

    Ok((grid, config))
}

/// Persist a grid as a run-length `.cells` file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be written.
pub fn save_cells(grid: &Grid, path: &Path) -> Result<(), LoadError> {
    fs::write(path, encode(grid))?;
    Ok(())
}

/// Files produced by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// The run-length cells file.
    pub cells_path: PathBuf,
    /// The minimal properties file (height and width).
    pub config_path: PathBuf,
}

/// Convert a `.grid` map into sibling `.cells` and `.config` files.
///
/// The generated properties hold only `height` and `width`; everything else
/// takes its default at load time. Existing outputs are not overwritten
/// unless `force` is set.
///
/// # Errors
///
/// [`LoadError::NotAGrid`] for a non-`.grid` input,
/// [`LoadError::OutputExists`] when an output is present without `force`,
/// plus any io or parse failure.
pub fn convert(grid_path: &Path, force: bool) -> Result<ConvertOutcome, LoadError> {
    if grid_path.extension().and_then(std::ffi::OsStr::to_str) != Some("grid") {
        return Err(LoadError::NotAGrid {
            path: grid_path.to_path_buf(),
        });
    }

    let grid = parse_map(&fs::read_to_string(grid_path)?)?;

    let cells_path = grid_path.with_extension("cells");
    let config_path = grid_path.with_extension("config");
    if !force {
        for path in [&cells_path, &config_path] {
            if path.exists() {
                return Err(LoadError::OutputExists { path: path.clone() });
            }
        }
    }

    fs::write(&cells_path, encode(&grid))?;
    let mut props = Properties::default();
    props.push("height", grid.height().to_string());
    props.push("width", grid.width().to_string());
    fs::write(&config_path, props.to_text())?;

    Ok(ConvertOutcome {
        cells_path,
        config_path,
    })
}

/// A discovered, loadable game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Directory name.
    pub name: String,
    /// Directory path.
    pub path: PathBuf,
    /// Grid width from the configuration.
    pub width: u16,
    /// Grid height from the configuration.
    pub height: u16,
    /// Number of teams alive in the starting grid.
    pub teams: usize,
}

/// Scan a root directory for loadable games.
///
/// Considers the root itself plus its immediate subdirectories; anything
/// that fails discovery or loading is silently skipped.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the root cannot be read.
pub fn list_games(root: &Path) -> Result<Vec<GameEntry>, LoadError> {
    let mut candidates = vec![root.to_path_buf()];
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            candidates.push(path);
        }
    }

    let mut entries = Vec::new();
    for dir in candidates {
        let Ok((grid, config)) = load_dir(&dir) else {
            continue;
        };
        let name = dir
            .file_name()
            .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().to_string());
        entries.push(GameEntry {
            name,
            path: dir,
            width: config.width,
            height: config.height,
            teams: crate::sim::Census::of(&grid).teams_alive(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
