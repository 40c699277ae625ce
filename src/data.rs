// src/data.rs

use crate::error::SourceError;
use crate::model::Question;
use std::collections::HashSet;

/// Banco de preguntas embebido en el binario (único origen en el navegador).
const EMBEDDED_QUESTIONS: &str = include_str!("data/aws_questions_final.json");

/// Carga el banco embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, SourceError> {
    parse_questions_json(EMBEDDED_QUESTIONS)
}

pub fn parse_questions_json(text: &str) -> Result<Vec<Question>, SourceError> {
    let questions: Vec<Question> = serde_json::from_str(text)?;
    check_unique_ids(&questions)?;
    Ok(questions)
}

pub fn parse_questions_yaml(text: &str) -> Result<Vec<Question>, SourceError> {
    let questions: Vec<Question> = serde_yaml::from_str(text)?;
    check_unique_ids(&questions)?;
    Ok(questions)
}

/// Lee el banco desde disco. `.yaml`/`.yml` se parsea como YAML, lo demás como JSON.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_questions_from_path(path: &std::path::Path) -> Result<Vec<Question>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        parse_questions_yaml(&text)
    } else {
        parse_questions_json(&text)
    }
}

/// Carga las preguntas según la configuración. Si falla, se registra el error y
/// se devuelve una lista vacía (la UI se queda en "Cargando…").
pub fn load_questions(config: &crate::config::QuizConfig) -> Vec<Question> {
    #[cfg(not(target_arch = "wasm32"))]
    let result = match &config.questions_path {
        Some(path) => read_questions_from_path(path),
        None => read_questions_embedded(),
    };
    #[cfg(target_arch = "wasm32")]
    let result = {
        let _ = config;
        read_questions_embedded()
    };

    match result {
        Ok(questions) => {
            log::info!("Banco de preguntas cargado: {} preguntas", questions.len());
            questions
        }
        Err(e) => {
            log::error!("No se pudo cargar el banco de preguntas: {e}");
            Vec::new()
        }
    }
}

fn check_unique_ids(questions: &[Question]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for q in questions {
        if !seen.insert(q.id()) {
            return Err(SourceError::DuplicateId(q.id().to_string()));
        }
    }
    Ok(())
}
