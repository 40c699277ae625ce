// Entrada/salida de ficheros de progreso (descarga e importación).

use crate::config::QuizConfig;
use crate::error::TransferError;
use crate::progress::EXPORT_FILE_NAME;
#[cfg(target_arch = "wasm32")]
use crate::progress::EXPORT_MIME;

/// Escribe el documento exportado en el directorio de exportación.
/// Devuelve la ruta escrita.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver_export(config: &QuizConfig, bytes: &[u8]) -> Result<String, TransferError> {
    let path = config.export_dir.join(EXPORT_FILE_NAME);
    let io_err = |source| TransferError::Io {
        path: path.display().to_string(),
        source,
    };
    std::fs::create_dir_all(&config.export_dir).map_err(io_err)?;
    std::fs::write(&path, bytes).map_err(io_err)?;
    Ok(path.display().to_string())
}

/// Descarga el documento como `aws_quiz_progress.json` (Blob + enlace temporal).
#[cfg(target_arch = "wasm32")]
pub fn deliver_export(_config: &QuizConfig, bytes: &[u8]) -> Result<String, TransferError> {
    use wasm_bindgen::JsCast;

    let web = |e: wasm_bindgen::JsValue| TransferError::Web(format!("{e:?}"));

    let text = String::from_utf8_lossy(bytes).into_owned();
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&text));
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(EXPORT_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props).map_err(web)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(web)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TransferError::Web("sin document".into()))?;
    let anchor = document
        .create_element("a")
        .map_err(web)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| TransferError::Web("no es un <a>".into()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(web)?;

    Ok(EXPORT_FILE_NAME.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_import_path(path: &str) -> Result<Vec<u8>, TransferError> {
    let path = path.trim();
    std::fs::read(path).map_err(|source| TransferError::Io {
        path: path.to_string(),
        source,
    })
}

/// Contenido de un fichero soltado sobre la ventana. En el navegador llega en
/// `bytes`; en escritorio sólo trae la ruta.
pub fn dropped_file_bytes(file: &egui::DroppedFile) -> Result<Vec<u8>, TransferError> {
    if let Some(bytes) = &file.bytes {
        return Ok(bytes.to_vec());
    }
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return std::fs::read(path).map_err(|source| TransferError::Io {
            path: path.display().to_string(),
            source,
        });
    }
    Err(TransferError::EmptyDrop)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("aws_quiz_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn export_writes_named_file_in_export_dir() {
        let dir = scratch_dir("export");
        let config = QuizConfig {
            export_dir: dir.clone(),
            ..QuizConfig::default()
        };
        let written = deliver_export(&config, b"{}").expect("export ok");
        assert!(written.ends_with(EXPORT_FILE_NAME));
        assert_eq!(std::fs::read(dir.join(EXPORT_FILE_NAME)).expect("leído"), b"{}");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn dropped_file_prefers_bytes_then_path() {
        let file = egui::DroppedFile {
            bytes: Some(std::sync::Arc::from(&b"{\"1\":[]}"[..])),
            ..Default::default()
        };
        assert_eq!(dropped_file_bytes(&file).expect("bytes"), b"{\"1\":[]}");

        let empty = egui::DroppedFile::default();
        assert!(matches!(dropped_file_bytes(&empty), Err(TransferError::EmptyDrop)));

        assert!(matches!(
            read_import_path("/no/existe.json"),
            Err(TransferError::Io { .. })
        ));
    }
}
