use clap::Parser;
use dotenv::dotenv;
use std::env;

use crate::cli::command::{Cli, Commands};
use crate::domain::{book::ContactBook, contact::ContactDraft};
use crate::errors::AppError;
use crate::store::{self, csv_port};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Some(path) = &cli.contacts_path {
        unsafe {
            env::set_var("CONTACTS_PATH", path);
        }
    }

    let book = ContactBook::new(Box::new(store::parse_store()?));

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let contact = book.add(ContactDraft::new(
                name,
                phone,
                email.unwrap_or_default(),
                address.unwrap_or_default(),
            ))?;

            println!("{} added successfully", contact.name);
            Ok(())
        }

        Commands::List => {
            let contacts = book.list_all()?;

            if contacts.is_empty() {
                println!("No contacts yet");
                return Ok(());
            }

            for contact in &contacts {
                println!("{}", contact.display_line());
            }
            Ok(())
        }

        Commands::Search { keyword } => {
            let matches = book.search(&keyword)?;

            if matches.is_empty() {
                println!("No contact matching '{}' found", keyword.trim());
                return Ok(());
            }

            for contact in &matches {
                println!("{}", contact.display_line());
            }
            Ok(())
        }

        Commands::Edit {
            name,
            id,
            new_name,
            new_phone,
            new_email,
            new_address,
        } => {
            let draft = ContactDraft::new(
                new_name,
                new_phone,
                new_email.unwrap_or_default(),
                new_address.unwrap_or_default(),
            );

            let updated = match (id, name) {
                (Some(id), _) => book.update_by_id(&id, draft)?,
                (None, Some(name)) => book.update(&name, draft)?,
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide --name or --id of the contact to edit".to_string(),
                    ));
                }
            };

            println!("{} updated successfully", updated.name);
            Ok(())
        }

        Commands::Delete { name, id } => {
            match (id, name) {
                (Some(id), _) => {
                    let removed = book.delete_by_id(&id)?;
                    println!("Deleted {}", removed.name);
                }
                (None, Some(name)) => {
                    let count = book.delete(&name)?;

                    if count == 0 {
                        println!("Name not found in contact list");
                    } else {
                        println!("Deleted {} contact(s) named {}", count, name);
                    }
                }
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide --name or --id of the contact to delete".to_string(),
                    ));
                }
            }
            Ok(())
        }

        Commands::Import { src } => {
            let (path, total) = csv_port::import_contacts_from_csv(book.storage(), src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = csv_port::export_contacts_to_csv(book.storage(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
