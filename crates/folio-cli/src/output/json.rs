use folio_core::error::FolioError;
use folio_core::model::ExtractionResult;

/// Pretty JSON, two-space indent, non-ASCII left as is.
pub fn render(result: &ExtractionResult) -> Result<String, FolioError> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn print(result: &ExtractionResult) -> Result<(), FolioError> {
    let json = render(result)?;
    println!("{json}");
    Ok(())
}
