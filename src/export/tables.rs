use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::pipeline::Reconstruction;

use super::ExportError;

/// File name of the heatmap table inside a CSV export directory
pub const HEATMAP_FILE: &str = "heatmap.csv";

/// File name of the extracted-slice table
pub const SLICE_FILE: &str = "slice.csv";

/// File name of the projection table
pub const PROJECTION_FILE: &str = "projection.csv";

/// Write the enhanced heatmap as a table.
///
/// The first row holds an empty corner cell followed by first-dimension
/// times; each following row starts with its second-dimension time.
pub fn write_heatmap_csv<W: Write>(
    writer: W,
    reconstruction: &Reconstruction,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![String::new()];
    header.extend(reconstruction.axes.first_dimension.iter().map(|t| t.to_string()));
    csv_writer.write_record(&header)?;

    let matrix = reconstruction.enhanced.as_array();
    for (time, row) in reconstruction.axes.second_dimension.iter().zip(matrix.rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(time.to_string());
        record.extend(row.iter().map(|v| v.to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the extracted 2D chromatogram as `second_dimension_s,signal`.
pub fn write_slice_csv<W: Write>(
    writer: W,
    reconstruction: &Reconstruction,
) -> Result<(), ExportError> {
    write_xy(
        writer,
        ["second_dimension_s", "signal"],
        &reconstruction.axes.second_dimension,
        &reconstruction.slice,
    )
}

/// Write the projected 1D chromatogram as `first_dimension_min,signal`.
pub fn write_projection_csv<W: Write>(
    writer: W,
    reconstruction: &Reconstruction,
) -> Result<(), ExportError> {
    write_xy(
        writer,
        ["first_dimension_min", "signal"],
        &reconstruction.axes.first_dimension,
        &reconstruction.projection,
    )
}

/// Write all three tables into `dir`, creating it if needed.
pub fn write_csv_tables<P: AsRef<Path>>(
    dir: P,
    reconstruction: &Reconstruction,
) -> Result<(), ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    write_heatmap_csv(fs::File::create(dir.join(HEATMAP_FILE))?, reconstruction)?;
    write_slice_csv(fs::File::create(dir.join(SLICE_FILE))?, reconstruction)?;
    write_projection_csv(fs::File::create(dir.join(PROJECTION_FILE))?, reconstruction)?;

    debug!("Wrote CSV tables to {}", dir.display());
    Ok(())
}

fn write_xy<W: Write>(
    writer: W,
    header: [&str; 2],
    x: &[f64],
    y: &[f64],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header)?;
    for (x, y) in x.iter().zip(y) {
        csv_writer.write_record([x.to_string(), y.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
