use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;

/// Reads a transcript and returns its trimmed text.
///
/// `.pdf` files go through `pdf_extract` on the blocking pool; anything else
/// is read as UTF-8 text. A missing file and a blank transcript are both
/// errors, reported before any model is called.
pub async fn read_transcript(path: &Path) -> Result<String, AppError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(AppError::TranscriptNotFound(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::TranscriptNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    }

    info!("Reading transcript from: {}", path.display());

    let text = if is_pdf(path) {
        let bytes = tokio::fs::read(path).await?;
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))?
            .map_err(|e| AppError::Validation(format!("Could not extract text from PDF: {e}")))?
    } else {
        tokio::fs::read_to_string(path).await?
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyTranscript("Transcript file is empty".to_string()));
    }

    debug!("Transcript length: {} chars", text.chars().count());
    Ok(text.to_string())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_reads_and_trims_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n\n  Sales rep: Thanks for joining, Sarah.  \n").unwrap();
        let text = read_transcript(file.path()).await.unwrap();
        assert_eq!(text, "Sales rep: Thanks for joining, Sarah.");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported_with_path() {
        let err = read_transcript(Path::new("/nonexistent/transcript.txt"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "TRANSCRIPT_NOT_FOUND");
        assert_eq!(
            err.to_string(),
            "Transcript file not found: /nonexistent/transcript.txt"
        );
    }

    #[tokio::test]
    async fn test_directory_is_not_a_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transcript(dir.path()).await.unwrap_err();
        assert_eq!(err.code(), "TRANSCRIPT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_whitespace_only_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n\t  \n").unwrap();
        let err = read_transcript(file.path()).await.unwrap_err();
        assert_eq!(err.to_string(), "Transcript file is empty");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.PDF");
        std::fs::write(&path, "this is not a pdf").unwrap();
        let err = read_transcript(&path).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    /// Single-page PDF with one line of Helvetica text and a correct xref table.
    fn single_page_pdf(line: &str) -> Vec<u8> {
        let stream = format!("BT /F1 18 Tf 72 720 Td ({line}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }

        let xref_start = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }

    #[tokio::test]
    async fn test_pdf_transcript_is_converted_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discovery_call.pdf");
        std::fs::write(&path, single_page_pdf("Discovery call with Acme Retail")).unwrap();

        let text = read_transcript(&path).await.unwrap();
        assert!(text.contains("Discovery"), "extracted: {text:?}");
        assert!(text.contains("Acme"), "extracted: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_pdf_detection_ignores_case() {
        assert!(is_pdf(Path::new("call.pdf")));
        assert!(is_pdf(Path::new("call.Pdf")));
        assert!(!is_pdf(Path::new("call.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }
}
