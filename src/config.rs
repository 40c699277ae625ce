// src/config.rs

use std::path::PathBuf;

pub const QUESTIONS_ENV: &str = "AWS_QUIZ_QUESTIONS";
pub const DATA_DIR_ENV: &str = "AWS_QUIZ_DATA_DIR";
pub const EXPORT_DIR_ENV: &str = "AWS_QUIZ_EXPORT_DIR";

const DEFAULT_DATA_DIR: &str = ".aws_quiz";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Configuración de arranque (variables de entorno, con valores por defecto).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// `None` = banco embebido
    pub questions_path: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable (tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            questions_path: get(QUESTIONS_ENV).map(PathBuf::from),
            data_dir: get(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            export_dir: get(EXPORT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
        }
    }
}
