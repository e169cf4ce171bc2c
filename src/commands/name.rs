use clap::Args;
use serde::Serialize;

use groundwork::naming;

use super::CmdResult;

#[derive(Args)]
pub struct NameArgs {
    /// Free-text project name to derive identifiers from
    pub project_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameOutput {
    pub command: &'static str,
    pub project_name: String,
    pub repository_name: String,
    pub package_name: String,
}

pub fn run(args: &NameArgs) -> CmdResult<NameOutput> {
    let names = naming::derive_names(&args.project_name)?;

    Ok((
        NameOutput {
            command: "name",
            project_name: args.project_name.clone(),
            repository_name: names.repository_name,
            package_name: names.package_name,
        },
        0,
    ))
}
