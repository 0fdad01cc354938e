use anyhow::Result;
use nansi_core::configs::command_file_schema;

pub fn execute() -> Result<()> {
    println!("{}", command_file_schema()?);
    Ok(())
}
