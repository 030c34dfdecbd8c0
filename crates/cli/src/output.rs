use crate::error::CliError;
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", to_json(value)?);
    Ok(())
}

pub async fn write_json<T: Serialize + ?Sized>(value: &T, path: &str) -> Result<(), CliError> {
    tokio::fs::write(path, to_json(value)?).await?;
    Ok(())
}

/// Writes to `path` when given, stdout otherwise.
pub async fn emit_json<T: Serialize + ?Sized>(
    value: &T,
    path: Option<&str>,
) -> Result<(), CliError> {
    match path {
        Some(path) => write_json(value, path).await,
        None => print_json(value),
    }
}
