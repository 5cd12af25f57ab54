//! Project bootstrap command.
//!
//! Writes the persisted database marker, the environment file, the server
//! entry point, the auth middleware, the database configuration module, and
//! package metadata. Installs nothing and executes no external tooling.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use handlebars::Handlebars;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use backforge::config::{ProjectConfig, CONFIG_FILE};
use backforge::templates::{
    AUTH_MIDDLEWARE, DATABASE_CONFIG_DOCUMENT, DATABASE_CONFIG_RELATIONAL, ENV_MONGODB, ENV_MYSQL,
    ENV_POSTGRES, ENV_SQLITE, PACKAGE_JSON, SERVER_INDEX_JS,
};
use backforge::{DatabaseChoice, DatabaseKind};

/// Initialize a backforge project in a directory.
pub struct InitCommand {
    root: PathBuf,
    database: Option<DatabaseChoice>,
}

impl InitCommand {
    /// Create a new command instance. `database` may be `None`, in which
    /// case the operator is prompted.
    #[must_use]
    pub const fn new(root: PathBuf, database: Option<DatabaseChoice>) -> Self {
        Self { root, database }
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Fails when the project is already initialized (the database choice
    /// is immutable), or on a prompt, render, or write failure.
    pub fn execute(&self) -> Result<()> {
        if ProjectConfig::exists(&self.root) {
            bail!(
                "{CONFIG_FILE} already exists in this directory; the database choice is made once at init time"
            );
        }

        let database = match self.database {
            Some(database) => database,
            None => Self::prompt_database()?,
        };

        println!(
            "{} {} {}",
            style("Initializing").green().bold(),
            style("backforge project with").bold(),
            style(database.as_str()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Creating project structure...");
        self.create_structure()?;

        spinner.set_message("Generating project files...");
        self.generate_files(database)?;

        spinner.set_message("Writing configuration...");
        ProjectConfig::new(database).store(&self.root)?;

        spinner.finish_and_clear();

        Self::print_success(database);

        Ok(())
    }

    /// Ask the operator which database engine the project targets.
    fn prompt_database() -> Result<DatabaseChoice> {
        let choices = [
            DatabaseChoice::Mysql,
            DatabaseChoice::Postgres,
            DatabaseChoice::Sqlite,
            DatabaseChoice::Mongodb,
        ];
        let labels: Vec<_> = choices.iter().map(|choice| choice.as_str()).collect();

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose your database")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read database choice")?;

        Ok(choices[index])
    }

    /// Create directory structure
    fn create_structure(&self) -> Result<()> {
        let dirs = ["models", "controllers", "routes", "middleware", "config"];

        for dir in &dirs {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        Ok(())
    }

    /// Generate project files from templates
    fn generate_files(&self, database: DatabaseChoice) -> Result<()> {
        let mut handlebars = Handlebars::new();

        // Generated output is code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        let project_name = self
            .root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("app")
            .to_string();

        let context = json!({
            "project_name": project_name,
            "is_relational": database.kind() == DatabaseKind::Relational,
            "is_mongodb": database == DatabaseChoice::Mongodb,
            "is_mysql": database == DatabaseChoice::Mysql,
            "is_postgres": database == DatabaseChoice::Postgres,
            "is_sqlite": database == DatabaseChoice::Sqlite,
        });

        let env_template = match database {
            DatabaseChoice::Mysql => ENV_MYSQL,
            DatabaseChoice::Postgres => ENV_POSTGRES,
            DatabaseChoice::Sqlite => ENV_SQLITE,
            DatabaseChoice::Mongodb => ENV_MONGODB,
        };
        self.write_file(&handlebars, ".env", env_template, &context)?;

        let database_config = match database.kind() {
            DatabaseKind::Relational => DATABASE_CONFIG_RELATIONAL,
            DatabaseKind::Document => DATABASE_CONFIG_DOCUMENT,
        };
        self.write_file(&handlebars, "config/database.js", database_config, &context)?;

        self.write_file(&handlebars, "index.js", SERVER_INDEX_JS, &context)?;
        self.write_file(&handlebars, "middleware/auth.js", AUTH_MIDDLEWARE, &context)?;
        self.write_file(&handlebars, "package.json", PACKAGE_JSON, &context)?;

        Ok(())
    }

    /// Write a single file from template
    fn write_file(
        &self,
        handlebars: &Handlebars<'static>,
        relative_path: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<()> {
        let path = self.root.join(relative_path);

        let rendered = handlebars
            .render_template(template, context)
            .with_context(|| format!("Failed to render template: {relative_path}"))?;

        fs::write(&path, rendered)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(database: DatabaseChoice) {
        println!("{}", style("✓ Project initialized!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Review the generated {}:", style("1.").cyan(), style(".env").cyan());
        println!("     set a real JWT_SECRET and your connection details");
        println!();
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("npm install").cyan());
        println!();
        println!("  {} Scaffold your first entity:", style("3.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("backforge scaffold User name:string,email:string,password:string").cyan()
        );
        println!();
        if database.kind() == DatabaseKind::Relational {
            println!(
                "  {} Define models and migrations with your migration tool, then run {}",
                style("4.").cyan(),
                style("npm run migrate").cyan()
            );
            println!();
        }
        println!("{}", style("Happy scaffolding!").green().bold());
    }
}
