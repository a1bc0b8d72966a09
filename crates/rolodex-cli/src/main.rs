#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Confirm;
use rolodex_client::{
    validate_edit_draft, validate_new_draft, ApiClient, ContactList, SortColumn, SortOrder,
    TableState,
};
use rolodex_model::{Contact, ContactDraft};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Contact book operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sorted, paginated table of contacts.
    List {
        #[arg(long, value_enum, default_value_t = SortColumnArg::FirstName)]
        sort: SortColumnArg,
        #[arg(long, default_value_t = false)]
        desc: bool,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 5)]
        page_size: usize,
    },
    /// Add a new contact.
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        job_title: String,
    },
    /// Edit an existing contact; unspecified fields keep their current
    /// values.
    Edit {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
    },
    /// Delete a contact by id.
    Delete {
        id: i64,
        /// Skip the interactive confirmation.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortColumnArg {
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Company,
    JobTitle,
}

impl From<SortColumnArg> for SortColumn {
    fn from(value: SortColumnArg) -> Self {
        match value {
            SortColumnArg::Id => Self::Id,
            SortColumnArg::FirstName => Self::FirstName,
            SortColumnArg::LastName => Self::LastName,
            SortColumnArg::Email => Self::Email,
            SortColumnArg::PhoneNumber => Self::PhoneNumber,
            SortColumnArg::Company => Self::Company,
            SortColumnArg::JobTitle => Self::JobTitle,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_table(visible: &[Contact], total: usize, state: &TableState) {
    const HEADERS: [&str; 7] = [
        "ID",
        "First Name",
        "Last Name",
        "Email",
        "Phone Number",
        "Company",
        "Job Title",
    ];
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    let rows: Vec<[String; 7]> = visible
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.first_name.clone(),
                c.last_name.clone(),
                c.email.clone(),
                c.phone_number.clone(),
                c.company.clone(),
                c.job_title.clone(),
            ]
        })
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }
    let header_line: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
    println!(
        "page {} ({} of {} contacts shown)",
        state.page,
        visible.len(),
        total
    );
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::from_env()?;
    let mut list = ContactList::new(client);
    match cli.command {
        Commands::List {
            sort,
            desc,
            page,
            page_size,
        } => {
            list.refresh().await?;
            let mut state = TableState::default();
            state.order_by = sort.into();
            state.order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            state.set_page_size(page_size);
            state.set_page(page);
            print_table(&state.visible(list.rows()), list.rows().len(), &state);
        }
        Commands::Add {
            first_name,
            last_name,
            email,
            phone_number,
            company,
            job_title,
        } => {
            let draft = ContactDraft {
                first_name: Some(first_name),
                last_name: Some(last_name),
                email: Some(email),
                phone_number: Some(phone_number),
                company: Some(company),
                job_title: Some(job_title),
            };
            let fields = validate_new_draft(&draft)?;
            let created = list.add(&fields).await?;
            println!("added contact {}", created.id);
        }
        Commands::Edit {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            company,
            job_title,
        } => {
            list.refresh().await?;
            // Seed the draft from the current row, then overlay the flags.
            let current = list
                .rows()
                .iter()
                .find(|c| c.id == id)
                .ok_or("contact not found")?;
            let mut draft = ContactDraft::from_contact(current);
            if first_name.is_some() {
                draft.first_name = first_name;
            }
            if last_name.is_some() {
                draft.last_name = last_name;
            }
            if email.is_some() {
                draft.email = email;
            }
            if phone_number.is_some() {
                draft.phone_number = phone_number;
            }
            if company.is_some() {
                draft.company = company;
            }
            if job_title.is_some() {
                draft.job_title = job_title;
            }
            let fields = validate_edit_draft(&draft)?;
            let updated = list.edit(id, &fields).await?;
            println!("updated contact {}", updated.id);
        }
        Commands::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Are you sure you want to delete this record?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    return Ok(());
                }
            }
            list.remove(id).await?;
            println!("Contact deleted");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
