//! Command handlers. Each one maps to a single portal action.

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use lsc_portal_core::models::{filter_centers, NewLscCenter, Student};
use lsc_portal_core::validation::validate_new_password;
use lsc_portal_core::{ApiClient, Config};

use crate::{Command, ReportKind};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    rpassword::prompt_password(label).context("Failed to read password")
}

pub(crate) async fn run(client: &ApiClient, config: &mut Config, command: Command) -> Result<()> {
    match command {
        Command::Login { lsc_number } => login(client, config, lsc_number).await,
        Command::Logout => {
            client.logout().await;
            println!("Logged out");
            Ok(())
        }
        Command::ChangePassword => change_password(client).await,
        Command::Status => {
            match client.session() {
                Some(_) => println!("Signed in ({})", client.base_url()),
                None => println!("Not signed in ({})", client.base_url()),
            }
            Ok(())
        }
        Command::Centers { search } => {
            let centers = client.list_lsc_centers().await?;
            let term = search.unwrap_or_default();
            print_json(&filter_centers(&centers, &term))
        }
        Command::CreateCenter {
            lsc_number,
            lsc_name,
            email,
            mobile,
            address,
        } => {
            let existing = client.list_lsc_centers().await?;
            let password = prompt("Password for the new centre: ")?;
            let center = NewLscCenter {
                lsc_number,
                lsc_name,
                email,
                mobile,
                address,
                password,
            };
            let created = client.create_lsc_center_checked(&existing, &center).await?;
            print_json(&created)
        }
        Command::DeleteCenter { lsc_number } => {
            client.delete_lsc_center(&lsc_number).await?;
            println!("Deleted LSC Center {}", lsc_number);
            Ok(())
        }
        Command::Students { search, program } => {
            let students = match program {
                Some(id) => client.students_by_program(id).await?,
                None => client.list_students().await?,
            };
            let term = search.unwrap_or_default();
            let matching: Vec<&Student> =
                students.iter().filter(|s| s.matches_search(&term)).collect();
            print_json(&matching)
        }
        Command::Attendance => print_json(&client.list_attendance().await?),
        Command::Marks { program } => match program {
            Some(id) => print_json(&client.marks_by_program(id).await?),
            None => print_json(&client.list_marks().await?),
        },
        Command::Counsellors => print_json(&client.list_counsellors().await?),
        Command::Programs => print_json(&client.list_programs().await?),
        Command::Report { kind } => match kind {
            ReportKind::Summary => print_json(&client.report_summary().await?),
            ReportKind::Applications => print_json(&client.application_report().await?),
            ReportKind::Unpaid => print_json(&client.unpaid_report().await?),
            ReportKind::Confirmed => print_json(&client.confirmed_report().await?),
        },
        Command::Dashboard => print_json(&client.fetch_dashboard().await?),
    }
}

async fn login(client: &ApiClient, config: &mut Config, lsc_number: Option<String>) -> Result<()> {
    let lsc_number = lsc_number
        .or_else(|| config.last_lsc_number.clone())
        .ok_or_else(|| anyhow!("Please provide an LSC number"))?;
    let password = prompt(&format!("Password for {}: ", lsc_number))?;

    client.login(&lsc_number, &password).await?;

    config.last_lsc_number = Some(lsc_number.clone());
    config.save()?;
    println!("Logged in as {}", lsc_number);
    Ok(())
}

async fn change_password(client: &ApiClient) -> Result<()> {
    if !client.is_authenticated() {
        bail!("Not signed in");
    }
    let old_password = prompt("Current password: ")?;
    let new_password = prompt("New password: ")?;
    if prompt("Confirm new password: ")? != new_password {
        bail!("Passwords do not match");
    }
    validate_new_password(&new_password)?;

    client.change_password(&old_password, &new_password).await?;
    println!("Password changed successfully");
    Ok(())
}
