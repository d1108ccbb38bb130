use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::Record;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to write records to {}", path.display())]
pub struct ExportError {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Writes `records` as comma-separated lines, one line per record row.
///
/// Records are written in order, and the rows of each record in row order.
/// There is no header.
pub fn write_records<W>(records: &[Record], writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    for record in records {
        for row in record.rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(writer, "{first}")?;
            }
            for cell in cells {
                write!(writer, ",{cell}")?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Writes `records` to `path`, truncating any previous content.
///
/// # Example
///
/// ```no_run
/// use pieceshot_engine::dataset::{Record, flush};
///
/// let records = [Record::from_rows(vec![vec![1, 0], vec![0, 1]])];
/// flush(&records, "board_position.csv").unwrap();
/// ```
pub fn flush<P>(records: &[Record], path: P) -> Result<(), ExportError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let to_error = |source| ExportError {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(())
}
