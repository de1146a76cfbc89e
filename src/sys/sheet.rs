use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::download::DownloadRow;

pub fn read_pending(path: &Path) -> Result<Vec<DownloadRow>> {
    let file = std::fs::File::open(path)?;
    pending_rows(file)
}

pub fn pending_rows<R: Read>(reader: R) -> Result<Vec<DownloadRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize::<DownloadRow>() {
        let row = record?;
        if row.is_pending() {
            rows.push(row);
        }
    }
    log::debug!("{} pending rows", rows.len());
    Ok(rows)
}
