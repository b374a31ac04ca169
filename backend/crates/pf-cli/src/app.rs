use crate::commands::Commands;
use crate::output::ProjectListing;
use crate::{Cli, CliError, Result as CliErrorResult};

use pf_config::Config;
use pf_core::{Identity, ProjectValidator};
use pf_db::{ExternalLinkRepository, ProjectRepository};
use pf_submit::{ProjectSubmitter, SqliteLinkStore, SqliteProjectStore, SubmissionOrchestrator};

use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;
use sqlx::SqlitePool;

/// Open the configured database, creating its directory if needed.
pub async fn open_database(config: &Config) -> CliErrorResult<SqlitePool> {
    let path = config.database_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::Config(pf_config::ConfigError::database(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    info!("Opening database at {}", path.display());
    Ok(pf_db::connect(&path).await?)
}

/// Run the parsed command and return the JSON to print.
pub async fn execute(cli: Cli, config: &Config, pool: SqlitePool) -> CliErrorResult<Value> {
    match cli.command {
        Commands::Personal(args) => {
            let outcome = submitter(config, &pool)
                .submit_personal(&args.into())
                .await?;
            Ok(serde_json::to_value(outcome)?)
        }
        Commands::External(args) => {
            let outcome = submitter(config, &pool)
                .submit_external(&args.into())
                .await?;
            Ok(serde_json::to_value(outcome)?)
        }
        Commands::List => list_projects(pool).await,
    }
}

fn submitter(config: &Config, pool: &SqlitePool) -> ProjectSubmitter {
    let session = config.auth.session_user().map(Identity::new);
    debug!("Session identity: {:?}", session);

    ProjectSubmitter::new(
        ProjectValidator::new(config.validation.clone()),
        SubmissionOrchestrator::new(
            Arc::new(SqliteProjectStore::new(pool.clone())),
            Arc::new(SqliteLinkStore::new(pool.clone(), session)),
        ),
    )
}

async fn list_projects(pool: SqlitePool) -> CliErrorResult<Value> {
    let links = ExternalLinkRepository::new(pool.clone());
    let projects = ProjectRepository::new(pool).list().await?;

    let mut listings = Vec::with_capacity(projects.len());
    for project in projects {
        let urls = links
            .list_by_project_name(&project.name)
            .await?
            .into_iter()
            .map(|link| link.url)
            .collect();
        listings.push(ProjectListing {
            project,
            links: urls,
        });
    }

    Ok(serde_json::to_value(listings)?)
}
