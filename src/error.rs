use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failure to turn a scene file and its assets into a [`Scene`](crate::render::Scene).
#[derive(Debug)]
pub enum SceneError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Mesh {
        path: PathBuf,
        source: tobj::LoadError,
    },
    Texture {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io { path, .. } => write!(f, "unable to read scene file {}", path.display()),
            SceneError::Json(_) => write!(f, "invalid scene description"),
            SceneError::Mesh { path, .. } => write!(f, "unable to load mesh {}", path.display()),
            SceneError::Texture { path, .. } => {
                write!(f, "unable to load texture {}", path.display())
            }
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SceneError::Io { source, .. } => Some(source),
            SceneError::Json(source) => Some(source),
            SceneError::Mesh { source, .. } => Some(source),
            SceneError::Texture { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(error: serde_json::Error) -> Self {
        SceneError::Json(error)
    }
}
