//! Entity scaffolding command.
//!
//! Resolves the database kind from the persisted configuration and the auth
//! decision from the naming convention or an operator prompt, then drives
//! the generator and writes its artifacts. Regeneration is a destructive
//! replacement: existing scaffold files for the entity are overwritten
//! without merging.
//!
//! # Example
//!
//! ```bash
//! backforge scaffold Product title:string,price:float
//! backforge scaffold User name:string,email:string,password:string
//! ```

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use inflector::Inflector;

use backforge::{DatabaseKind, ProjectConfig, ScaffoldGenerator};

/// Generate the scaffold for one entity.
pub struct ScaffoldCommand {
    name: String,
    attributes: String,
}

impl ScaffoldCommand {
    /// Create a new command instance.
    #[must_use]
    pub const fn new(name: String, attributes: String) -> Self {
        Self { name, attributes }
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Fails on missing configuration, invalid entity input, a declined
    /// prompt, or a filesystem failure. A failed write leaves earlier
    /// artifacts in place.
    pub fn execute(&self) -> Result<()> {
        let project_root = std::env::current_dir().context("Failed to get current directory")?;

        let config = ProjectConfig::load(&project_root)?;
        let generator = ScaffoldGenerator::new(&self.name, &self.attributes)?;

        let gate_routes = if generator.spec().is_auth_entity() {
            println!(
                "{} {} is an auth entity; generating register/login/profile endpoints",
                style("i").cyan().bold(),
                style(generator.spec().pascal()).green().bold()
            );
            true
        } else {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Protect the generated routes with the auth middleware?")
                .default(true)
                .interact()
                .context("Failed to read auth answer")?
        };

        println!(
            "\n{} {} {}",
            style("Scaffolding").cyan().bold(),
            style(generator.spec().pascal()).green().bold(),
            style("...").cyan().bold()
        );

        let artifacts = generator.generate(config.database.kind(), gate_routes)?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            artifacts.len()
        );

        // Writes stop at the first failure; files already written stay.
        for artifact in &artifacts {
            artifact.write_to(&project_root)?;

            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(artifact.path.display()).dim(),
                style(artifact.kind.describe()).dim()
            );
        }

        Self::print_next_steps(&generator, config.database.kind());

        Ok(())
    }

    /// Print success message with next steps
    fn print_next_steps(generator: &ScaffoldGenerator, kind: DatabaseKind) {
        let stem = generator.spec().camel();
        let mount = format!(
            "apiRouter.use('/{}', require('./routes/{stem}Routes'));",
            stem.to_plural()
        );

        println!(
            "\n{} Scaffold for {} is ready!",
            style("✨").green().bold(),
            style(generator.spec().pascal()).green().bold()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!("  1. Mount the routes in index.js: {}", style(mount).yellow());
        if kind == DatabaseKind::Relational {
            println!(
                "  2. Define the model and migration with your migration tool, then run it: {}",
                style("npm run migrate").yellow()
            );
            println!("  3. Start the server: {}", style("npm run dev").yellow());
        } else {
            println!("  2. Start the server: {}", style("npm run dev").yellow());
        }
    }
}
