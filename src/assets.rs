//! Asset manifest
//!
//! The host loads textures, sounds and fonts itself; the core only needs to
//! know they are all there before the first tick.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::audio::{MUSIC_TRACK, sound_file};
use crate::sim::Cue;

pub const TEXTURES: &[&str] = &[
    "assets/visual/menu_background.png",
    "assets/visual/game_background.png",
    "assets/visual/mole_normal.png",
    "assets/visual/mole_normal_hit.png",
    "assets/visual/mole_golden.png",
    "assets/visual/mole_golden_hit.png",
    "assets/visual/mole_bomber.png",
    "assets/visual/mole_bomber_hit.png",
    "assets/visual/hammer_red.png",
    "assets/visual/hammer_red_hit.png",
    "assets/visual/hammer_blue.png",
    "assets/visual/hammer_blue_hit.png",
    "assets/visual/star.png",
    "assets/visual/red_box.png",
    "assets/visual/blue_box.png",
    "assets/visual/black_box.png",
    "assets/visual/green_box.png",
];

pub const FONT: &str = "assets/font/myfont.ttf";

const ALL_CUES: [Cue; 7] = [
    Cue::Spawn,
    Cue::HitNormal,
    Cue::HitGolden,
    Cue::HitBomber,
    Cue::HitEmpty,
    Cue::Button,
    Cue::Victory,
];

/// Startup-abort conditions
#[derive(Debug)]
pub enum AssetError {
    /// Asset root is not a directory
    BadRoot { root: PathBuf },
    /// One or more files are missing
    Missing { files: Vec<PathBuf> },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::BadRoot { root } => {
                write!(f, "asset root {} is not a directory", root.display())
            }
            AssetError::Missing { files } => {
                write!(f, "{} asset file(s) missing:", files.len())?;
                for file in files {
                    write!(f, " {}", file.display())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Every file the game needs, relative to the asset root
pub fn manifest() -> Vec<&'static str> {
    let mut files: Vec<&'static str> = TEXTURES.to_vec();
    files.extend(ALL_CUES.iter().map(|&cue| sound_file(cue)));
    files.push(MUSIC_TRACK);
    files.push(FONT);
    files
}

/// Check that every manifest entry exists under `root`
pub fn verify(root: &Path) -> Result<usize, AssetError> {
    if !root.is_dir() {
        return Err(AssetError::BadRoot {
            root: root.to_path_buf(),
        });
    }

    let files = manifest();
    let missing: Vec<PathBuf> = files
        .iter()
        .map(|rel| root.join(rel))
        .filter(|path| !path.is_file())
        .collect();

    if missing.is_empty() {
        log::info!("All {} assets present under {}", files.len(), root.display());
        Ok(files.len())
    } else {
        Err(AssetError::Missing { files: missing })
    }
}
