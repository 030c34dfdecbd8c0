use crate::{
    commands::{Commands, DialectKind, FormCommands},
    env::{EnvManager, OWNER_VAR, REGISTRY_VAR, STORE_VAR},
    error::CliError,
};
use clap::Parser;
use expression_engine::execute;
use form_store::{FormService, SledFormStore};
use model::{
    records::row::RowData,
    registry::{Registry, RegistryConfig},
    report::{select_report_type, visible_report_types},
};
use planner::{
    SearchQuery, compile, compile_ordering,
    query::dialect::{Dialect, MySql, Postgres},
};
use seek_syntax::{FormData, SyntaxError, describe, validate};
use serde_json::{Value as Json, json};
use std::{path::PathBuf, sync::Arc};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;
mod output;

const ANONYMOUS_OWNER: &str = "anonymous";

#[derive(Parser)]
#[command(
    name = "seekform",
    version = "0.1.0",
    about = "Build, check and run boolean search forms"
)]
struct Cli {
    #[arg(long, global = true, help = "Path to the registry catalog (JSON)")]
    registry: Option<String>,

    #[arg(long, global = true, help = "Directory of the saved form store")]
    store: Option<String>,

    #[arg(long, global = true, help = "Load KEY=VALUE variables from this file")]
    env_file: Option<String>,

    #[arg(long, global = true, help = "User that owns saved forms")]
    owner: Option<String>,

    #[arg(long, global = true, help = "Act as a privileged caller")]
    privileged: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings resolved from flags and environment for one invocation.
struct Session {
    registry_path: Option<String>,
    store_path: Option<String>,
    owner: String,
    privileged: bool,
}

impl Session {
    fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let mut env = EnvManager::new();
        if let Some(path) = &cli.env_file {
            env.load_from_file(path)?;
        }

        let owner = env
            .resolve(cli.owner.clone(), OWNER_VAR)
            .or_else(|| env.get("USER").map(str::to_string))
            .unwrap_or_else(|| ANONYMOUS_OWNER.to_string());

        Ok(Self {
            registry_path: env.resolve(cli.registry.clone(), REGISTRY_VAR),
            store_path: env.resolve(cli.store.clone(), STORE_VAR),
            owner,
            privileged: cli.privileged,
        })
    }

    async fn registry(&self) -> Result<Arc<Registry>, CliError> {
        let path = self.registry_path.as_deref().ok_or_else(|| {
            CliError::Config(format!("No registry catalog given (use --registry or {REGISTRY_VAR})"))
        })?;

        let source = tokio::fs::read_to_string(path).await?;
        let config = RegistryConfig::from_json_str(&source)?;
        let registry = Registry::from_config(&config)?;
        debug!(
            "Loaded registry from {} with {} fields",
            path,
            registry.fields().len()
        );
        Ok(Arc::new(registry))
    }

    fn form_service(&self) -> Result<FormService<SledFormStore>, CliError> {
        let path = match &self.store_path {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .ok_or_else(|| CliError::Config("Could not determine home directory".into()))?
                .join(".seekform/forms"),
        };
        debug!("Opening form store at {}", path.display());
        Ok(FormService::new(SledFormStore::open(&path)?))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::resolve(&cli)?;

    match cli.command {
        Commands::Fields => {
            let registry = session.registry().await?;
            let fields = registry
                .visible_fields(session.privileged)
                .into_iter()
                .map(|field| {
                    let operators = field.operators.iter().map(|op| op.token()).collect::<Vec<_>>();
                    let choices = field.kind.choices().unwrap_or_default();
                    json!({
                        "label": field.label,
                        "type": field.field_type().to_string(),
                        "operators": operators,
                        "choices": choices,
                        "public": field.public,
                    })
                })
                .collect::<Vec<_>>();
            output::print_json(&fields)?;
        }
        Commands::ReportTypes => {
            let registry = session.registry().await?;
            output::print_json(&visible_report_types(&registry, session.privileged))?;
        }
        Commands::Validate { form } => {
            let registry = session.registry().await?;
            let form = load_form(&form, &registry, session.privileged).await?;
            validate(&form.sequence, &registry).map_err(SyntaxError::from)?;
            compile_ordering(&form.ordering, &registry)?;
            info!("Form is valid");
            println!("{}", describe(&form.sequence, &registry));
        }
        Commands::Describe { form } => {
            let registry = session.registry().await?;
            let form = load_form(&form, &registry, session.privileged).await?;
            println!("{}", describe(&form.sequence, &registry));
        }
        Commands::Compile {
            form,
            dialect,
            table,
            limit,
            predicate,
        } => {
            let registry = session.registry().await?;
            let form = load_form(&form, &registry, session.privileged).await?;
            let compiled = compile(&form.sequence, &registry)?;
            let keys = compile_ordering(&form.ordering, &registry)?;

            let mut query = SearchQuery::new(&table)
                .filter(compiled.clone())
                .order_by(keys);
            if let Some(limit) = limit {
                query = query.limit(limit);
            }

            let (sql, params) = query.render(dialect_for(dialect));
            let mut result = json!({
                "sql": sql,
                "params": params.iter().map(|p| p.to_json()).collect::<Vec<_>>(),
            });
            if predicate {
                result["predicate"] = serde_json::to_value(&compiled)?;
            }
            output::print_json(&result)?;
        }
        Commands::Search {
            form,
            data,
            limit,
            output,
        } => {
            let registry = session.registry().await?;
            let form = load_form(&form, &registry, session.privileged).await?;
            let rows = load_rows(&data).await?;

            let matched = execute(&form, &registry, &rows)?;
            let records = matched
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|row| row.to_json())
                .collect::<Vec<_>>();
            output::emit_json(&records, output.as_deref()).await?;
        }
        Commands::Forms(command) => run_form_command(command, &session).await?,
    }

    Ok(())
}

async fn run_form_command(command: FormCommands, session: &Session) -> Result<(), CliError> {
    let service = session.form_service()?;

    match command {
        FormCommands::Save {
            name,
            form,
            public,
            overwrite,
        } => {
            let registry = session.registry().await?;
            let form = load_form(&form, &registry, session.privileged).await?;
            let stored = service
                .save(&name, &session.owner, public, &form, overwrite)
                .await?;
            println!("Saved form '{}' ({})", stored.name, stored.id);
        }
        FormCommands::Load { name, output } => {
            let registry = session.registry().await?;
            let form = service.load(&name, &session.owner, &registry).await?;
            gate_report_type(&form, &registry, session.privileged)?;
            output::emit_json(&form.encode(), output.as_deref()).await?;
        }
        FormCommands::List { public_only } => {
            let names = service.list(&session.owner, !public_only).await?;
            for name in names {
                println!("{name}");
            }
        }
        FormCommands::Delete { name } => {
            service.delete(&name, &session.owner).await?;
            println!("Deleted form '{name}'");
        }
    }

    Ok(())
}

/// Reads a form document. A bare expression array is accepted as a form
/// without ordering or report type.
async fn load_form(path: &str, registry: &Registry, privileged: bool) -> Result<FormData, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let document: Json = serde_json::from_str(&source)?;

    let form = match &document {
        Json::Array(_) => FormData::new(seek_syntax::deserialize(&document, registry)?),
        _ => FormData::decode(&document, registry)?,
    };

    gate_report_type(&form, registry, privileged)?;
    Ok(form)
}

/// A report type carried by a form must pass the gate for this caller,
/// whether the form came from a file or from the store.
fn gate_report_type(form: &FormData, registry: &Registry, privileged: bool) -> Result<(), CliError> {
    if let Some(label) = &form.report_type {
        select_report_type(label, registry, privileged)?;
    }
    Ok(())
}

async fn load_rows(path: &str) -> Result<Vec<RowData>, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let document: Json = serde_json::from_str(&source)?;

    let Json::Array(items) = document else {
        return Err(CliError::InvalidData(format!("{path} does not hold a JSON array")));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(|object| RowData::from_json("record", object))
                .ok_or_else(|| CliError::InvalidData(format!("record {index} is not an object")))
        })
        .collect()
}

fn dialect_for(kind: DialectKind) -> &'static dyn Dialect {
    match kind {
        DialectKind::Postgres => &Postgres,
        DialectKind::Mysql => &MySql,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_store::MemoryFormStore;
    use model::{
        errors::GateError,
        fields::{FieldDefinition, Operator},
        report::ReportType,
    };
    use seek_syntax::{Condition, Sequence};

    fn registry() -> Registry {
        Registry::builder()
            .register(FieldDefinition::string("Title", "title"))
            .report_type(ReportType::new("list"))
            .report_type(ReportType::restricted("export"))
            .build()
            .unwrap()
    }

    fn form(report_type: &str) -> FormData {
        FormData::new(Sequence::new(Condition::text("Title", Operator::Contains, "rust")))
            .with_report_type(report_type)
    }

    #[test]
    fn test_gate_report_type() {
        let registry = registry();
        assert!(gate_report_type(&form("list"), &registry, false).is_ok());
        assert!(gate_report_type(&form("export"), &registry, true).is_ok());
        assert!(matches!(
            gate_report_type(&form("export"), &registry, false),
            Err(CliError::Gate(GateError::Unauthorized(_)))
        ));
    }

    #[tokio::test]
    async fn test_stored_restricted_form_is_gated_on_load() {
        let registry = registry();
        let service = FormService::new(MemoryFormStore::new());
        service
            .save("exports", "alice", false, &form("export"), false)
            .await
            .unwrap();

        let loaded = service.load("exports", "alice", &registry).await.unwrap();
        assert!(matches!(
            gate_report_type(&loaded, &registry, false),
            Err(CliError::Gate(GateError::Unauthorized(_)))
        ));
        assert!(gate_report_type(&loaded, &registry, true).is_ok());
    }
}
