use std::path::PathBuf;

use csv::{Reader, Writer};

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

const IMPORT_PATH: &str = "./csv/contacts.csv";
const EXPORT_PATH: &str = "./csv/exported.csv";

/// Append every record of a .csv file to the store. Returns the file
/// actually read and how many contacts came in. Records only need the
/// name and phone columns; everything else is backfilled.
pub fn import_contacts_from_csv(
    store: &dyn ContactStore,
    src: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;
    let mut contacts = store.load()?;

    let mut counter: u64 = 0;
    for result in reader.deserialize() {
        let record: Contact = result?;
        contacts.push(record);
        counter += 1;
    }

    store.save(&contacts)?;

    Ok((file_path, counter))
}

/// Write the whole collection to a .csv file. A directory destination
/// gets the default file name inside it.
pub fn export_contacts_to_csv(
    store: &dyn ContactStore,
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(des.unwrap_or(EXPORT_PATH));

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;

    let contacts = store.load()?;
    let mut writer = Writer::from_path(&file_path)?;

    for contact in &contacts {
        writer.serialize(contact)?;
    }
    writer.flush()?;

    Ok((file_path, contacts.len() as u64))
}
