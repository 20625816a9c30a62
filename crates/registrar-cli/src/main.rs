use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use registrar_cli::seeder::{SeedConfig, seed_all};
use registrar_cli::{
    ApiClient, CliError, CliResult, DEFAULT_API_URL, EntityKind, EntityPage, Prompter,
    TerminalPrompter,
};

#[derive(Parser)]
#[command(name = "registrar-cli")]
#[command(about = "Registrar CLI - Administrative client for the Registrar API", long_about = None)]
struct Cli {
    /// Base URL of the API, including the `/api` prefix
    #[arg(long, env = "REGISTRAR_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "REGISTRAR_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive management page for an entity kind
    Page {
        #[arg(value_enum)]
        entity: EntityKind,
    },
    /// Print every record of an entity kind
    List {
        #[arg(value_enum)]
        entity: EntityKind,
    },
    /// Log in as a school, student, or teacher and print the token
    Login {
        #[arg(value_enum)]
        entity: EntityKind,

        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Show who the current token belongs to
    Check,
    /// Populate the API with fake schools and their records
    Seed {
        /// Number of schools to create
        #[arg(short = 's', long, default_value = "2")]
        schools: usize,

        /// Number of teachers per school
        #[arg(long, default_value = "3")]
        teachers: usize,

        /// Number of classes per school
        #[arg(long, default_value = "3")]
        classes: usize,

        /// Number of subjects per school
        #[arg(long, default_value = "4")]
        subjects: usize,

        /// Number of students per class
        #[arg(long, default_value = "5")]
        students: usize,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url).with_token(cli.token);

    let result = match cli.command {
        Commands::Page { entity } => handle_page(&client, entity).await,
        Commands::List { entity } => handle_list(&client, entity).await,
        Commands::Login {
            entity,
            email,
            password,
        } => handle_login(&client, entity, email, password).await,
        Commands::Check => handle_check(&client).await,
        Commands::Seed {
            schools,
            teachers,
            classes,
            subjects,
            students,
        } => {
            let config = SeedConfig {
                schools,
                teachers_per_school: teachers,
                classes_per_school: classes,
                subjects_per_school: subjects,
                students_per_class: students,
            };
            handle_seed(&client, config).await
        }
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn handle_page(client: &ApiClient, entity: EntityKind) -> CliResult<()> {
    let mut page = EntityPage::open(client, entity).await?;
    let mut prompter = TerminalPrompter;
    page.run(&mut prompter).await
}

async fn handle_list(client: &ApiClient, entity: EntityKind) -> CliResult<()> {
    let page = EntityPage::open(client, entity).await?;
    println!("{}", page.render());
    Ok(())
}

async fn handle_login(
    client: &ApiClient,
    entity: EntityKind,
    email: Option<String>,
    password: Option<String>,
) -> CliResult<()> {
    if !entity.is_account() {
        return Err(CliError::Validation(format!(
            "{} records cannot log in",
            entity.label()
        )));
    }

    let mut prompter = TerminalPrompter;
    let email = match email {
        Some(email) => email,
        None => prompter.input("Email address", "")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompter.password("Password")?,
    };

    let login = client.login(entity.segment(), &email, &password).await?;

    println!("\n✅ Login successful!");
    println!("   Role: {:?}", login.user.role);
    println!("   Id: {}", login.user.id);
    println!("   Token: {}", login.token);
    Ok(())
}

async fn handle_check(client: &ApiClient) -> CliResult<()> {
    let identity = client.check().await?;
    println!("\n✅ Authenticated");
    println!("{}", serde_json::to_string_pretty(&identity).unwrap_or_default());
    Ok(())
}

async fn handle_seed(client: &ApiClient, config: SeedConfig) -> CliResult<()> {
    let summary = seed_all(client, config).await?;

    println!("\n✅ Seeded data:");
    println!("   Schools: {}", summary.schools);
    println!("   Teachers: {}", summary.teachers);
    println!("   Classes: {}", summary.classes);
    println!("   Subjects: {}", summary.subjects);
    println!("   Students: {}", summary.students);
    println!("   Login password for all accounts: {}", registrar_cli::seeder::SEED_PASSWORD);
    Ok(())
}
