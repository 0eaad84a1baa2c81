//! CSV row construction.

use chrono::NaiveDate;
use csv::WriterBuilder;

use rcm_model::Resident;

use crate::error::{ExportError, Result};
use crate::sink::DownloadSink;

/// Header row, in the fixed export column order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Name",
    "Age",
    "Gender",
    "Status",
    "Address",
    "Contact",
    "Emergency Contact",
    "Join Date",
];

/// Export file name for the given date: `residents_export_<ISO-date>.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("residents_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Serializes the records to CSV bytes: header first, then one row per
/// resident in the order given. Text fields are quoted by the writer as
/// needed; the column order is fixed regardless of how the caller sorted.
pub fn write_csv(residents: &[Resident]) -> Result<Vec<u8>> {
    if residents.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    for resident in residents {
        writer.write_record([
            resident.name.as_str(),
            &resident.age.to_string(),
            resident.gender.as_str(),
            resident.status.as_str(),
            resident.address.as_str(),
            resident.contact_number.as_str(),
            resident.emergency_contact.as_str(),
            &resident.join_date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

/// Serializes the records and hands the bytes to the sink under the dated
/// file name. Returns the file name used.
pub fn export_residents<S: DownloadSink>(
    residents: &[Resident],
    date: NaiveDate,
    sink: &mut S,
) -> Result<String> {
    let bytes = write_csv(residents)?;
    let name = export_file_name(date);
    sink.deliver(&name, &bytes)?;
    tracing::info!(file = %name, rows = residents.len(), "export written");
    Ok(name)
}
