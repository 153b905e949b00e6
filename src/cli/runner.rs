//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InstanceCommands, KeyCommands, PagingArgs};
use crate::config::ServiceConfig;
use crate::error::{Result, ResultExt};
use crate::global_search::{self, GlobalSearchV2, SearchOptions};
use crate::pagination::{ListOptions, PageFetcher, Pager};
use crate::resource_controller::{
    self, ListResourceInstancesOptions, ListResourceKeysForInstanceOptions,
    ListResourceKeysOptions, ResourceControllerV2,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result as pretty JSON
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("rendering output")?
        );
        Ok(())
    }

    /// Run the CLI command and return its result
    pub async fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::Search {
                query,
                fields,
                limit,
                account_id,
                all,
            } => {
                let mut options = SearchOptions::new();
                options.query = query.clone();
                options.account_id = account_id.clone();
                options.limit = *limit;
                if !fields.is_empty() {
                    options.fields = Some(fields.clone());
                }

                let service = self.global_search()?;
                if *all {
                    collect(service.new_search_pager(&options)?).await
                } else {
                    to_json(&service.search(&options).await?)
                }
            }
            Commands::SupportedTypes => to_json(&self.global_search()?.get_supported_types().await?),
            Commands::Instances(command) => self.instances(command).await,
            Commands::Keys(command) => self.keys(command).await,
        }
    }

    async fn instances(&self, command: &InstanceCommands) -> Result<Value> {
        let controller = self.resource_controller()?;
        match command {
            InstanceCommands::List {
                name,
                resource_group_id,
                paging,
            } => {
                let mut options = ListResourceInstancesOptions::new();
                options.name = name.clone();
                options.resource_group_id = resource_group_id.clone();
                options.limit = paging.limit;

                if paging.all {
                    collect(controller.new_resource_instances_pager(&options)?).await
                } else {
                    to_json(&controller.list_resource_instances(&options).await?)
                }
            }
            InstanceCommands::Get { id } => to_json(&controller.get_resource_instance(id).await?),
        }
    }

    async fn keys(&self, command: &KeyCommands) -> Result<Value> {
        let controller = self.resource_controller()?;
        match command {
            KeyCommands::List {
                instance_id: Some(id),
                paging,
            } => {
                let mut options = ListResourceKeysForInstanceOptions::new(id);
                options.limit = paging.limit;

                if paging.all {
                    collect(controller.new_resource_keys_for_instance_pager(&options)?).await
                } else {
                    to_json(&controller.list_resource_keys_for_instance(&options).await?)
                }
            }
            KeyCommands::List {
                instance_id: None,
                paging: PagingArgs { limit, all },
            } => {
                let mut options = ListResourceKeysOptions::new();
                options.limit = *limit;

                if *all {
                    collect(controller.new_resource_keys_pager(&options)?).await
                } else {
                    to_json(&controller.list_resource_keys(&options).await?)
                }
            }
            KeyCommands::Get { id } => to_json(&controller.get_resource_key(id).await?),
        }
    }

    /// Settings of one service, from the config file when given, else the environment
    fn service_config(&self, service_name: &str) -> Result<ServiceConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), service = service_name, "Loading service config");
                ServiceConfig::from_yaml_file(path, service_name)
            }
            None => ServiceConfig::from_env(service_name),
        }
    }

    fn global_search(&self) -> Result<GlobalSearchV2> {
        let config = self.service_config(global_search::DEFAULT_SERVICE_NAME)?;
        GlobalSearchV2::from_config(&config)
    }

    fn resource_controller(&self) -> Result<ResourceControllerV2> {
        let config = self.service_config(resource_controller::DEFAULT_SERVICE_NAME)?;
        ResourceControllerV2::from_config(&config)
    }
}

/// Drain a pager and render every item
async fn collect<O, F>(mut pager: Pager<O, F>) -> Result<Value>
where
    O: ListOptions,
    F: PageFetcher<O>,
    F::Item: Serialize,
{
    let items = pager.get_all().await?;
    info!(
        items = items.len(),
        pages = pager.pages_fetched(),
        "Fetched all pages"
    );
    to_json(&items)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
